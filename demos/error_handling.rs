use chrono::NaiveDate;
use fiscale::generator::*;
use fiscale::*;

fn describe(err: &TaxIdError) -> &'static str {
    match err {
        TaxIdError::InvalidFormat { .. } => "malformed input",
        TaxIdError::InvalidChecksum { .. } => "typo in the number",
        TaxIdError::InvalidTaxIdentifier(_) => "not a tax identifier",
        TaxIdError::InvalidName { .. } => "name has no letters",
        TaxIdError::InvalidBirthPlaceCode(_) => "bad cadastral code",
        TaxIdError::InvalidGender(_) => "bad gender",
        TaxIdError::InvalidBirthDate(_) => "impossible birth date",
        _ => "other",
    }
}

fn main() {
    println!("=== Validation Errors ===\n");

    for input in ["1234567890", "12345678901", "RSSMRA80A01H501A", "hello"] {
        if let Err(e) = TaxIdentifier::create(input) {
            println!("  {input}: {} ({e})", describe(&e));
        }
    }

    println!("\n=== Generation Errors ===\n");

    let birth_date = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    let people = [
        PersonalData::new("Mario", "42", birth_date, Gender::Male, "H501"),
        PersonalData::new("Mario", "Rossi", birth_date, Gender::Male, "H50"),
    ];
    for person in &people {
        if let Err(e) = generate_all(person) {
            println!("  {} {}: {} ({e})", person.first_name, person.last_name, describe(&e));
        }
    }

    if let Err(e) = "X".parse::<Gender>() {
        println!("  gender 'X': {} ({e})", describe(&e));
    }
}
