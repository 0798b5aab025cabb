//! Codice Fiscale generation, including omocodia variants.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fiscale::generator::*;
//! use fiscale::Gender;
//!
//! let person = PersonalData::new(
//!     "Mario",
//!     "Rossi",
//!     NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
//!     Gender::Male,
//!     "H501",
//! );
//!
//! let codes = generate_all(&person).unwrap();
//! assert_eq!(codes[0].value(), "RSSMRA80A01H501U");
//! assert_eq!(codes.len(), 128);
//!
//! let official = FiscalCodeGenerator::new()
//!     .with_mode(OmocodiaMode::Official)
//!     .generate_all(&person)
//!     .unwrap();
//! assert_eq!(official.len(), 8);
//! ```

mod names;
mod omocodia;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{FiscalCode, Gender, TaxIdError, TaxIdKind, tables};

pub use names::{name_code, surname_code};
pub use omocodia::OmocodiaMode;

const BIRTH_PLACE_CODE_LEN: usize = 4;

/// Person data a fiscal code is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalData {
    /// Given name(s).
    pub first_name: String,
    /// Surname(s).
    pub last_name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Sex.
    pub gender: Gender,
    /// Cadastral code of the birthplace (comune or foreign country).
    pub birth_place_code: String,
}

impl PersonalData {
    /// Bundle the generator input.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        gender: Gender,
        birth_place_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            gender,
            birth_place_code: birth_place_code.into(),
        }
    }
}

/// Fiscal code generator.
///
/// By default every omocodia combination is produced; use
/// [`with_mode`](Self::with_mode) and [`with_limit`](Self::with_limit) to
/// narrow the output.
#[derive(Debug, Clone, Default)]
pub struct FiscalCodeGenerator {
    mode: OmocodiaMode,
    limit: Option<usize>,
}

impl FiscalCodeGenerator {
    /// Generator enumerating all omocodia variants, uncapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose which omocodia variants to enumerate.
    pub fn with_mode(mut self, mode: OmocodiaMode) -> Self {
        self.mode = mode;
        self
    }

    /// Cap the number of codes returned, canonical code included.
    ///
    /// A limit of 0 is treated as 1: the canonical code is always returned.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.max(1));
        self
    }

    /// The configured omocodia mode.
    pub fn mode(&self) -> OmocodiaMode {
        self.mode
    }

    /// The canonical (non-omocode) fiscal code.
    pub fn generate(&self, person: &PersonalData) -> Result<FiscalCode, TaxIdError> {
        let body = canonical_body(person)?;
        finish(&body)
    }

    /// The canonical code followed by its omocodia variants.
    ///
    /// Variants are ordered by substitution mask; the output is the same
    /// for the same input and configuration.
    pub fn generate_all(&self, person: &PersonalData) -> Result<Vec<FiscalCode>, TaxIdError> {
        let body = canonical_body(person)?;
        let positions = omocodia::numeric_positions(&body);
        let masks = self.mode.masks(positions.len());
        let cap = self.limit.unwrap_or(usize::MAX);

        let mut codes = Vec::with_capacity((masks.len() + 1).min(cap));
        codes.push(finish(&body)?);
        for mask in masks.into_iter().take(cap - 1) {
            let code = finish(&omocodia::substitute(&body, &positions, mask))?;
            tracing::trace!(code = %code, mask, "omocodia variant");
            codes.push(code);
        }

        tracing::debug!(
            canonical = %codes[0],
            count = codes.len(),
            mode = ?self.mode,
            "generated fiscal codes"
        );
        Ok(codes)
    }
}

/// Canonical code plus every omocodia variant, using the default generator.
pub fn generate_all(person: &PersonalData) -> Result<Vec<FiscalCode>, TaxIdError> {
    FiscalCodeGenerator::new().generate_all(person)
}

/// The canonical fiscal code, using the default generator.
pub fn generate(person: &PersonalData) -> Result<FiscalCode, TaxIdError> {
    FiscalCodeGenerator::new().generate(person)
}

/// Build the 15-character body: names, date, sex and birthplace.
fn canonical_body(person: &PersonalData) -> Result<Vec<u8>, TaxIdError> {
    let surname = surname_code(&person.last_name)?;
    let name = name_code(&person.first_name)?;
    let birth_place = birth_place_code(&person.birth_place_code)?;

    let date = person.birth_date;
    let year = date.year().rem_euclid(100);
    let month = tables::month_letter(date.month()).map_or('A', char::from);
    let day = date.day() + person.gender.day_offset();

    Ok(format!("{surname}{name}{year:02}{month}{day:02}{birth_place}").into_bytes())
}

/// Validate and uppercase a cadastral code.
///
/// The first character must be a letter. The other three must be digits
/// or letters outside the omocodia alphabet, so that a decoder can tell
/// them apart from substituted digits.
fn birth_place_code(code: &str) -> Result<String, TaxIdError> {
    if code.chars().count() != BIRTH_PLACE_CODE_LEN
        || !code.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(TaxIdError::InvalidBirthPlaceCode(code.into()));
    }
    let upper = code.to_ascii_uppercase();
    let (first, rest) = upper.as_bytes().split_at(1);
    let reversible = first[0].is_ascii_alphabetic()
        && rest
            .iter()
            .all(|&b| b.is_ascii_digit() || tables::omocode_digit(b).is_none());
    if !reversible {
        return Err(TaxIdError::InvalidBirthPlaceCode(code.into()));
    }
    Ok(upper)
}

fn finish(body: &[u8]) -> Result<FiscalCode, TaxIdError> {
    FiscalCode::from_body(body).ok_or_else(|| {
        TaxIdError::format(
            TaxIdKind::TaxCode,
            &String::from_utf8_lossy(body),
            "generated body is not alphanumeric",
        )
    })
}
