use std::fmt;

use thiserror::Error;

use super::identifier::TaxIdKind;

/// Which personal name failed normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    /// Given name (nome).
    FirstName,
    /// Surname (cognome).
    LastName,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstName => f.write_str("first name"),
            Self::LastName => f.write_str("last name"),
        }
    }
}

/// Errors raised while validating or generating a tax identifier.
///
/// Every variant is a deterministic function of the caller's input, so
/// none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TaxIdError {
    /// The input does not have the shape of the identifier.
    #[error("invalid {kind} format '{value}': {reason}")]
    InvalidFormat {
        /// Identifier kind being parsed.
        kind: TaxIdKind,
        /// The offending (trimmed) input.
        value: String,
        /// Why the value failed validation.
        reason: String,
    },

    /// The shape is right but the control character does not match.
    #[error("invalid {kind} checksum '{value}': expected '{expected}', found '{found}'")]
    InvalidChecksum {
        /// Identifier kind being parsed.
        kind: TaxIdKind,
        /// The offending (trimmed) input.
        value: String,
        /// Control character computed from the body.
        expected: char,
        /// Control character present in the input.
        found: char,
    },

    /// The input is neither an 11-digit nor a 16-character identifier.
    #[error("'{0}' is neither a Partita IVA nor a Codice Fiscale")]
    InvalidTaxIdentifier(String),

    /// A name has no letters left after normalization.
    #[error("invalid {field} '{value}': no alphabetic characters")]
    InvalidName {
        /// Which name was rejected.
        field: NameField,
        /// The name as supplied.
        value: String,
    },

    /// The cadastral code is not exactly 4 alphanumeric characters.
    #[error("invalid birthplace code '{0}': expected 4 alphanumeric characters")]
    InvalidBirthPlaceCode(String),

    /// Gender is not `M` or `F`.
    #[error("invalid gender '{0}': expected 'M' or 'F'")]
    InvalidGender(String),

    /// The encoded birth date does not exist in the resolved century.
    #[error("invalid birth date: {0}")]
    InvalidBirthDate(String),
}

impl TaxIdError {
    pub(crate) fn format(kind: TaxIdKind, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
