use chrono::NaiveDate;
use fiscale::*;

fn main() {
    println!("=== Tax Identifier Validation ===\n");

    let inputs = [
        "00000000000",      // Partita IVA, trivially valid
        "12345678903",      // Partita IVA
        "12345678901",      // wrong check digit
        "rssmra80a01h501u", // fiscal code, lowercase
        "RSSMRA80A01H5LMX", // omocode
        "RSSMRA80A01H501A", // wrong check letter
        "RSSMRA80F01H501U", // unknown month letter
        "IT12345678903",    // EU form is not accepted by the factory
    ];

    for input in &inputs {
        match TaxIdentifier::create(input) {
            Ok(id) => println!("  {input} => {} {}", id.kind(), id.value()),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    println!("\n=== EU VAT ID ===\n");

    for input in ["IT12345678903", "it00000000000", "FR12345678903"] {
        match PartitaIva::from_eu_vat_id(input) {
            Ok(piva) => println!(
                "  {input} => {} (office {})",
                piva.to_eu_vat_id(),
                piva.office_code()
            ),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    println!("\n=== Fiscal Code Decoding ===\n");

    let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    for input in ["BNCGLI85E56F205I", "RSSMRAULALMHRLMD"] {
        let code = FiscalCode::create(input).unwrap();
        let parts = code.parts();
        println!("  {input}:");
        println!("    canonical={}, omocodia level={}", code.base(), parts.omocodia_level);
        println!(
            "    gender={}, birthplace={}, born={}",
            parts.gender,
            parts.birth_place_code,
            code.birth_date(today)
                .map_or_else(|e| e.to_string(), |d| d.to_string())
        );
    }
}
