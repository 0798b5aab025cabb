#![cfg(feature = "generator")]

use std::collections::HashSet;

use chrono::NaiveDate;
use fiscale::generator::*;
use fiscale::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mario() -> PersonalData {
    PersonalData::new("Mario", "Rossi", date(1980, 1, 1), Gender::Male, "H501")
}

// ---------------------------------------------------------------------------
// Canonical codes
// ---------------------------------------------------------------------------

#[test]
fn known_people() {
    let cases = [
        (
            PersonalData::new("Gianfranco", "De Luca", date(1975, 12, 31), Gender::Male, "Z404"),
            "DLCGFR75T31Z404L",
        ),
        (
            PersonalData::new("Niccolò", "D'Annunzio", date(1863, 3, 12), Gender::Male, "G482"),
            "DNNNCL63C12G482W",
        ),
        (
            PersonalData::new("Ugo", "Fo", date(2005, 7, 4), Gender::Male, "A944"),
            "FOXGUO05L04A944L",
        ),
        (
            PersonalData::new("Maria", "Rossi", date(1990, 10, 9), Gender::Female, "h501"),
            "RSSMRA90R49H501C",
        ),
    ];
    for (person, expected) in cases {
        assert_eq!(generate(&person).unwrap().value(), expected);
    }
}

#[test]
fn leap_day_codes() {
    let male = PersonalData::new("Anna", "Verdi", date(2000, 2, 29), Gender::Male, "L219");
    let female = PersonalData { gender: Gender::Female, ..male.clone() };

    let m = generate(&male).unwrap();
    let f = generate(&female).unwrap();
    assert_eq!(&m.value()[9..11], "29");
    assert_eq!(&f.value()[9..11], "69");
    assert_eq!(m.value(), "VRDNNA00B29L219Z");
    assert_eq!(f.value(), "VRDNNA00B69L219D");
}

#[test]
fn month_letters() {
    let letters = "ABCDEHLMPRST";
    for (i, expected) in letters.chars().enumerate() {
        let month = u32::try_from(i + 1).unwrap();
        let person = PersonalData::new("Mario", "Rossi", date(1980, month, 1), Gender::Male, "H501");
        let code = generate(&person).unwrap();
        assert_eq!(code.value().chars().nth(8), Some(expected));
    }
}

#[test]
fn generated_code_decodes_back() {
    let person = PersonalData::new("Giulia", "Bianchi", date(1985, 5, 16), Gender::Female, "F205");
    let code = generate(&person).unwrap();
    assert_eq!(code.birth_date(date(2026, 1, 1)).unwrap(), person.birth_date);
    assert_eq!(code.gender(), Gender::Female);
    assert_eq!(code.birth_place_code(), "F205");
}

// ---------------------------------------------------------------------------
// Omocodia
// ---------------------------------------------------------------------------

#[test]
fn full_enumeration() {
    let codes = generate_all(&mario()).unwrap();
    assert_eq!(codes.len(), 128);

    let unique: HashSet<&str> = codes.iter().map(FiscalCode::value).collect();
    assert_eq!(unique.len(), 128);

    assert_eq!(codes[1].value(), "RSSMRA80A01H50MM");
    assert_eq!(codes[2].value(), "RSSMRA80A01H5L1F");
    assert_eq!(codes[3].value(), "RSSMRA80A01H5LMX");
    assert_eq!(codes[127].value(), "RSSMRAULALMHRLMD");
}

#[test]
fn every_variant_is_valid_and_same_person() {
    let codes = generate_all(&mario()).unwrap();
    let base = &codes[0];
    for code in &codes {
        let reparsed = FiscalCode::create(code.value()).unwrap();
        assert_eq!(&reparsed, code);
        assert_eq!(&code.base(), base);
        assert!(code.is_same_person(base));
    }
}

#[test]
fn omocodia_levels_match_popcount() {
    let codes = generate_all(&mario()).unwrap();
    for (mask, code) in codes.iter().enumerate() {
        assert_eq!(u32::from(code.omocodia_level()), mask.count_ones());
    }
}

#[test]
fn birth_place_with_inner_letter() {
    let person = PersonalData::new("Mario", "Rossi", date(1980, 1, 1), Gender::Male, "Z4A9");
    let codes = generate_all(&person).unwrap();
    assert_eq!(codes.len(), 64);
    assert_eq!(codes[0].value(), "RSSMRA80A01Z4A9D");
    assert_eq!(codes[1].value(), "RSSMRA80A01Z4AVS");
    assert_eq!(codes[2].value(), "RSSMRA80A01ZQA9A");
    assert_eq!(codes[63].value(), "RSSMRAULALMZQAVA");

    assert!(!codes[0].is_omocode());
    for (mask, code) in codes.iter().enumerate() {
        assert_eq!(u32::from(code.omocodia_level()), mask.count_ones());
        assert_eq!(&code.base(), &codes[0]);
        assert_eq!(code.birth_place_code(), "Z4A9");
    }

    let official = FiscalCodeGenerator::new()
        .with_mode(OmocodiaMode::Official)
        .generate_all(&person)
        .unwrap();
    assert_eq!(official.len(), 7);
}

#[test]
fn irreversible_birth_places_rejected() {
    // A leading digit or an inner omocodia letter would decode differently
    for code in ["1234", "ZLMN", "Z4M9", "H50V"] {
        let person = PersonalData::new("Mario", "Rossi", date(1980, 1, 1), Gender::Male, code);
        assert_eq!(
            generate_all(&person).unwrap_err(),
            TaxIdError::InvalidBirthPlaceCode(code.into())
        );
    }
}

#[test]
fn official_progression() {
    let codes = FiscalCodeGenerator::new()
        .with_mode(OmocodiaMode::Official)
        .generate_all(&mario())
        .unwrap();
    let values: Vec<&str> = codes.iter().map(FiscalCode::value).collect();
    assert_eq!(
        values,
        [
            "RSSMRA80A01H501U",
            "RSSMRA80A01H50MM",
            "RSSMRA80A01H5LMX",
            "RSSMRA80A01HRLMS",
            "RSSMRA80A0MHRLMK",
            "RSSMRA80ALMHRLMV",
            "RSSMRA8LALMHRLMG",
            "RSSMRAULALMHRLMD",
        ]
    );
}

#[test]
fn limit_keeps_prefix_of_full_output() {
    let all = generate_all(&mario()).unwrap();
    let capped = FiscalCodeGenerator::new().with_limit(10).generate_all(&mario()).unwrap();
    assert_eq!(capped[..], all[..10]);
}

#[test]
fn limit_larger_than_output() {
    let codes = FiscalCodeGenerator::new()
        .with_mode(OmocodiaMode::Official)
        .with_limit(1000)
        .generate_all(&mario())
        .unwrap();
    assert_eq!(codes.len(), 8);
}

#[test]
fn deterministic() {
    let generator = FiscalCodeGenerator::new();
    assert_eq!(
        generator.generate_all(&mario()).unwrap(),
        generator.generate_all(&mario()).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn empty_first_name() {
    let person = PersonalData { first_name: " ".into(), ..mario() };
    assert_eq!(
        generate_all(&person).unwrap_err(),
        TaxIdError::InvalidName {
            field: NameField::FirstName,
            value: " ".into(),
        }
    );
}

#[test]
fn birth_place_length() {
    let person = PersonalData { birth_place_code: "H5011".into(), ..mario() };
    let err = generate_all(&person).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid birthplace code 'H5011': expected 4 alphanumeric characters"
    );
}

#[test]
fn personal_data_serde() {
    let json = r#"{
        "first_name": "Mario",
        "last_name": "Rossi",
        "birth_date": "1980-01-01",
        "gender": "M",
        "birth_place_code": "H501"
    }"#;
    let person: PersonalData = serde_json::from_str(json).unwrap();
    assert_eq!(person, mario());
    assert!(serde_json::from_str::<PersonalData>(&json.replace("\"M\"", "\"X\"")).is_err());
}
