//! Partita IVA (Italian VAT number) validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TaxIdError;
use super::identifier::TaxIdKind;

/// Number of digits in a Partita IVA.
pub const PARTITA_IVA_LEN: usize = 11;

/// A validated Italian VAT number.
///
/// Eleven ASCII digits whose last digit is the Luhn-style control digit
/// over the first ten. Only obtainable through [`PartitaIva::create`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartitaIva(String);

impl PartitaIva {
    /// Validate and wrap a Partita IVA.
    ///
    /// Surrounding whitespace is ignored. Anything but exactly 11 ASCII
    /// digits is an [`TaxIdError::InvalidFormat`]; a wrong control digit is
    /// an [`TaxIdError::InvalidChecksum`].
    pub fn create(input: &str) -> Result<Self, TaxIdError> {
        let value = input.trim();
        if value.len() != PARTITA_IVA_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TaxIdError::format(
                TaxIdKind::Vat,
                value,
                format!("expected {PARTITA_IVA_LEN} digits"),
            ));
        }

        let (body, check) = value.split_at(PARTITA_IVA_LEN - 1);
        let expected = compute_check_digit(body).ok_or_else(|| {
            TaxIdError::format(TaxIdKind::Vat, value, "body is not numeric")
        })?;
        let found = check.bytes().next().map_or(0, |b| b - b'0');
        if expected != found {
            return Err(TaxIdError::InvalidChecksum {
                kind: TaxIdKind::Vat,
                value: value.into(),
                expected: char::from(b'0' + expected),
                found: char::from(b'0' + found),
            });
        }

        Ok(Self(value.into()))
    }

    /// Validate a VAT ID in the EU (VIES) form, `IT` followed by 11 digits.
    ///
    /// The country prefix is optional and case-insensitive; any other
    /// prefix is rejected.
    pub fn from_eu_vat_id(input: &str) -> Result<Self, TaxIdError> {
        let trimmed = input.trim();
        let number = match trimmed.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("IT") => &trimmed[2..],
            Some(prefix) if prefix.bytes().all(|b| b.is_ascii_alphabetic()) => {
                return Err(TaxIdError::format(
                    TaxIdKind::Vat,
                    trimmed,
                    format!("country prefix '{prefix}' is not IT"),
                ));
            }
            _ => trimmed,
        };
        Self::create(number)
    }

    /// The 11-digit value.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Always [`TaxIdKind::Vat`].
    pub fn kind(&self) -> TaxIdKind {
        TaxIdKind::Vat
    }

    /// The EU VAT ID form (`IT` + 11 digits).
    pub fn to_eu_vat_id(&self) -> String {
        format!("IT{}", self.0)
    }

    /// Taxpayer serial number (first 7 digits).
    pub fn company_number(&self) -> &str {
        &self.0[..7]
    }

    /// Code of the provincial tax office that issued the number (digits 8-10).
    pub fn office_code(&self) -> &str {
        &self.0[7..10]
    }

    /// The control digit.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[PARTITA_IVA_LEN - 1] - b'0'
    }
}

/// Compute the control digit for the first ten digits of a Partita IVA.
///
/// Digits at even (0-based) positions count as-is; digits at odd positions
/// are doubled, minus 9 when the result exceeds 9. The control digit
/// brings the sum up to a multiple of ten.
///
/// Returns `None` unless `first_ten` is exactly ten ASCII digits.
pub fn compute_check_digit(first_ten: &str) -> Option<u8> {
    if first_ten.len() != PARTITA_IVA_LEN - 1 {
        return None;
    }
    let mut sum = 0u32;
    for (i, b) in first_ten.bytes().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let digit = u32::from(b - b'0');
        sum += if i % 2 == 0 {
            digit
        } else {
            let doubled = digit * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        };
    }
    u8::try_from((10 - sum % 10) % 10).ok()
}

impl fmt::Display for PartitaIva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PartitaIva {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl TryFrom<String> for PartitaIva {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<PartitaIva> for String {
    fn from(value: PartitaIva) -> Self {
        value.0
    }
}

impl AsRef<str> for PartitaIva {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
