use chrono::NaiveDate;
use fiscale::Gender;
use fiscale::generator::*;

fn main() {
    let birth_date = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    let person = PersonalData::new("Mario", "Rossi", birth_date, Gender::Male, "H501");

    println!("=== Canonical Fiscal Code ===\n");
    match generate(&person) {
        Ok(code) => println!("  {} {} => {code}", person.first_name, person.last_name),
        Err(e) => println!("  error: {e}"),
    }

    println!("\n=== Official Omocodia Progression ===\n");
    let official = FiscalCodeGenerator::new().with_mode(OmocodiaMode::Official);
    if let Ok(codes) = official.generate_all(&person) {
        for code in &codes {
            println!("  level {}: {code}", code.omocodia_level());
        }
    }

    println!("\n=== All Omocodie (first 10) ===\n");
    let capped = FiscalCodeGenerator::new().with_limit(10);
    if let Ok(codes) = capped.generate_all(&person) {
        for (mask, code) in codes.iter().enumerate() {
            println!("  mask {mask:07b}: {code}");
        }
    }

    let total = generate_all(&person).map_or(0, |codes| codes.len());
    println!("\n  {total} codes in total");
}
