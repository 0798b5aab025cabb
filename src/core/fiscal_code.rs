//! Codice Fiscale (Italian personal fiscal code) validation and decoding.
//!
//! Layout of the 16 characters:
//!
//! | Positions | Content |
//! |-----------|---------|
//! | 1-3 | surname code |
//! | 4-6 | given-name code |
//! | 7-8 | year of birth (two digits) |
//! | 9 | month letter |
//! | 10-11 | day of birth, +40 for women |
//! | 12-15 | cadastral code of the birthplace |
//! | 16 | check letter |
//!
//! Under omocodia, digits at positions 7, 8, 10, 11, 13, 14 and 15 may be
//! replaced with the letters `L M N P Q R S T U V`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::TaxIdError;
use super::identifier::TaxIdKind;
use super::tables;

/// Number of characters in a fiscal code.
pub const FISCAL_CODE_LEN: usize = 16;

/// 0-based positions that hold digits in a canonical code built from a
/// standard cadastral code (one letter followed by three digits).
pub(crate) const OMOCODE_POSITIONS: [usize; 7] = [6, 7, 9, 10, 12, 13, 14];

const FEMALE_DAY_OFFSET: u32 = 40;

const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Sex as encoded in the day field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    /// `M`
    Male,
    /// `F`, encoded as day + 40.
    Female,
}

impl Gender {
    /// Offset added to the day of birth.
    pub fn day_offset(self) -> u32 {
        match self {
            Self::Male => 0,
            Self::Female => FEMALE_DAY_OFFSET,
        }
    }

    /// Single-letter form.
    pub fn as_char(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Gender {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => Err(TaxIdError::InvalidGender(other.into())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_char().to_string()
    }
}

/// Person data read back out of a fiscal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalCodeParts {
    /// Three-letter surname code.
    pub surname_code: String,
    /// Three-letter given-name code.
    pub name_code: String,
    /// Last two digits of the birth year.
    pub year_of_century: u8,
    /// Month of birth, 1-12.
    pub month: u32,
    /// Day of birth, 1-31 (the +40 offset removed).
    pub day: u32,
    /// Sex.
    pub gender: Gender,
    /// Cadastral code with omocodia letters reverted.
    pub birth_place_code: String,
    /// Number of positions carrying an omocodia letter.
    pub omocodia_level: u8,
}

/// A validated Italian fiscal code.
///
/// Always 16 uppercase ASCII alphanumerics with a matching check letter.
/// Only obtainable through [`FiscalCode::create`] or the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FiscalCode(String);

impl FiscalCode {
    /// Validate and wrap a fiscal code.
    ///
    /// The input is trimmed and uppercased. Structural problems (length,
    /// character classes, month letter, impossible day) are
    /// [`TaxIdError::InvalidFormat`]; a wrong final letter is
    /// [`TaxIdError::InvalidChecksum`].
    pub fn create(input: &str) -> Result<Self, TaxIdError> {
        let value = input.trim().to_ascii_uppercase();
        check_structure(&value)?;

        let bytes = value.as_bytes();
        let (body, check) = bytes.split_at(FISCAL_CODE_LEN - 1);
        let expected = tables::check_letter(body)
            .ok_or_else(|| TaxIdError::format(TaxIdKind::TaxCode, &value, "invalid body"))?;
        let found = check[0];
        if expected != found {
            return Err(TaxIdError::InvalidChecksum {
                kind: TaxIdKind::TaxCode,
                value,
                expected: char::from(expected),
                found: char::from(found),
            });
        }

        Ok(Self(value))
    }

    /// Wrap a 15-character body, appending its check letter.
    ///
    /// The caller guarantees the body is uppercase ASCII alphanumeric.
    pub(crate) fn from_body(body: &[u8]) -> Option<Self> {
        let check = tables::check_letter(body)?;
        let mut code = String::with_capacity(FISCAL_CODE_LEN);
        code.extend(body.iter().map(|&b| char::from(b)));
        code.push(char::from(check));
        Some(Self(code))
    }

    /// The 16-character value.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Always [`TaxIdKind::TaxCode`].
    pub fn kind(&self) -> TaxIdKind {
        TaxIdKind::TaxCode
    }

    /// The final check letter.
    pub fn check_char(&self) -> char {
        char::from(self.0.as_bytes()[FISCAL_CODE_LEN - 1])
    }

    /// Number of standard numeric positions holding an omocodia letter.
    pub fn omocodia_level(&self) -> u8 {
        let bytes = self.0.as_bytes();
        let count = OMOCODE_POSITIONS
            .iter()
            .filter(|&&pos| tables::omocode_digit(bytes[pos]).is_some())
            .count();
        u8::try_from(count).unwrap_or(u8::MAX)
    }

    /// Whether any numeric position carries an omocodia letter.
    pub fn is_omocode(&self) -> bool {
        self.omocodia_level() > 0
    }

    /// The canonical code: every omocodia letter reverted to its digit and
    /// the check letter recomputed.
    ///
    /// Returns a clone when the code is not an omocode.
    pub fn base(&self) -> Self {
        if !self.is_omocode() {
            return self.clone();
        }
        let mut body = self.0.as_bytes()[..FISCAL_CODE_LEN - 1].to_vec();
        for pos in OMOCODE_POSITIONS {
            if let Some(digit) = tables::omocode_digit(body[pos]) {
                body[pos] = digit;
            }
        }
        // Reverting letters to digits keeps the body alphanumeric.
        Self::from_body(&body).unwrap_or_else(|| self.clone())
    }

    /// Whether two codes identify the same person, omocodia aside.
    pub fn is_same_person(&self, other: &Self) -> bool {
        self.base() == other.base()
    }

    /// Decode the person data.
    pub fn parts(&self) -> FiscalCodeParts {
        let bytes = self.0.as_bytes();
        let digit = |pos: usize| tables::numeric_value(bytes[pos]).unwrap_or(0);

        let encoded_day = u32::from(digit(9)) * 10 + u32::from(digit(10));
        let (day, gender) = if encoded_day > FEMALE_DAY_OFFSET {
            (encoded_day - FEMALE_DAY_OFFSET, Gender::Female)
        } else {
            (encoded_day, Gender::Male)
        };

        let birth_place_code = (11..15)
            .map(|pos| {
                let b = bytes[pos];
                if pos != 11 {
                    char::from(tables::omocode_digit(b).unwrap_or(b))
                } else {
                    char::from(b)
                }
            })
            .collect();

        FiscalCodeParts {
            surname_code: self.0[..3].into(),
            name_code: self.0[3..6].into(),
            year_of_century: digit(6) * 10 + digit(7),
            month: tables::month_from_letter(bytes[8]).unwrap_or(1),
            day,
            gender,
            birth_place_code,
            omocodia_level: self.omocodia_level(),
        }
    }

    /// Sex encoded in the day field.
    pub fn gender(&self) -> Gender {
        self.parts().gender
    }

    /// Cadastral code of the birthplace, omocodia reverted.
    pub fn birth_place_code(&self) -> String {
        self.parts().birth_place_code
    }

    /// Birth date, resolving the two-digit year to the latest year that is
    /// not after `reference`'s year.
    ///
    /// Fails with [`TaxIdError::InvalidBirthDate`] when the date does not
    /// exist in that century (29 February of a non-leap year).
    pub fn birth_date(&self, reference: NaiveDate) -> Result<NaiveDate, TaxIdError> {
        let parts = self.parts();
        let ref_year = reference.year();
        let mut year = ref_year - ref_year.rem_euclid(100) + i32::from(parts.year_of_century);
        if year > ref_year {
            year -= 100;
        }
        NaiveDate::from_ymd_opt(year, parts.month, parts.day).ok_or_else(|| {
            TaxIdError::InvalidBirthDate(format!(
                "{year:04}-{:02}-{:02} does not exist",
                parts.month, parts.day
            ))
        })
    }
}

/// Compute the check letter for the first 15 characters of a fiscal code.
///
/// Returns `None` unless `body` is exactly 15 uppercase ASCII alphanumerics.
pub fn compute_check_char(body: &str) -> Option<char> {
    tables::check_letter(body.as_bytes()).map(char::from)
}

fn check_structure(value: &str) -> Result<(), TaxIdError> {
    let fail = |reason: &str| TaxIdError::format(TaxIdKind::TaxCode, value, reason);

    if value.len() != FISCAL_CODE_LEN || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(fail("expected 16 alphanumeric characters"));
    }
    let bytes = value.as_bytes();

    if !bytes[..6].iter().all(u8::is_ascii_alphabetic) {
        return Err(fail("surname and name codes must be letters"));
    }
    for pos in [6, 7, 9, 10] {
        if tables::numeric_value(bytes[pos]).is_none() {
            return Err(fail("year and day must be digits or omocodia letters"));
        }
    }
    let month = tables::month_from_letter(bytes[8]).ok_or_else(|| fail("unknown month letter"))?;
    if !bytes[15].is_ascii_alphabetic() {
        return Err(fail("check character must be a letter"));
    }

    let tens = u32::from(tables::numeric_value(bytes[9]).unwrap_or(0));
    let units = u32::from(tables::numeric_value(bytes[10]).unwrap_or(0));
    let encoded_day = tens * 10 + units;
    let day = if encoded_day > FEMALE_DAY_OFFSET {
        encoded_day - FEMALE_DAY_OFFSET
    } else {
        encoded_day
    };
    let max_day = usize::try_from(month - 1)
        .ok()
        .and_then(|idx| DAYS_IN_MONTH.get(idx).copied())
        .unwrap_or(31);
    if day == 0 || day > max_day {
        return Err(fail("day of birth out of range"));
    }

    Ok(())
}

impl fmt::Display for FiscalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FiscalCode {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl TryFrom<String> for FiscalCode {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<FiscalCode> for String {
    fn from(value: FiscalCode) -> Self {
        value.0
    }
}

impl AsRef<str> for FiscalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
