use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TaxIdError;
use super::fiscal_code::{FISCAL_CODE_LEN, FiscalCode};
use super::partita_iva::{PARTITA_IVA_LEN, PartitaIva};

/// The two kinds of Italian tax identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxIdKind {
    /// Partita IVA (VAT number).
    Vat,
    /// Codice Fiscale (personal fiscal code).
    TaxCode,
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vat => f.write_str("Partita IVA"),
            Self::TaxCode => f.write_str("Codice Fiscale"),
        }
    }
}

/// Either kind of validated tax identifier.
///
/// Two identifiers are equal when they have the same kind and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaxIdentifier {
    /// An 11-digit VAT number.
    Vat(PartitaIva),
    /// A 16-character fiscal code.
    TaxCode(FiscalCode),
}

impl TaxIdentifier {
    /// Parse an arbitrary string as a tax identifier.
    ///
    /// The input is trimmed and uppercased, then routed by shape:
    /// 16 ASCII alphanumerics go to [`FiscalCode::create`], 11 ASCII digits
    /// go to [`PartitaIva::create`]. Errors from either are returned as-is;
    /// any other shape is an [`TaxIdError::InvalidTaxIdentifier`].
    pub fn create(input: &str) -> Result<Self, TaxIdError> {
        let normalized = input.trim().to_ascii_uppercase();

        if normalized.len() == FISCAL_CODE_LEN
            && normalized.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            tracing::debug!(input = %normalized, "routing tax identifier to fiscal code");
            return FiscalCode::create(&normalized).map(Self::TaxCode);
        }

        if normalized.len() == PARTITA_IVA_LEN && normalized.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(input = %normalized, "routing tax identifier to partita iva");
            return PartitaIva::create(&normalized).map(Self::Vat);
        }

        tracing::debug!(input = %normalized, "unrecognized tax identifier shape");
        Err(TaxIdError::InvalidTaxIdentifier(normalized))
    }

    /// The identifier's string value.
    pub fn value(&self) -> &str {
        match self {
            Self::Vat(piva) => piva.value(),
            Self::TaxCode(cf) => cf.value(),
        }
    }

    /// Which kind of identifier this is.
    pub fn kind(&self) -> TaxIdKind {
        match self {
            Self::Vat(_) => TaxIdKind::Vat,
            Self::TaxCode(_) => TaxIdKind::TaxCode,
        }
    }

    /// The VAT number, if this is one.
    pub fn as_partita_iva(&self) -> Option<&PartitaIva> {
        match self {
            Self::Vat(piva) => Some(piva),
            Self::TaxCode(_) => None,
        }
    }

    /// The fiscal code, if this is one.
    pub fn as_fiscal_code(&self) -> Option<&FiscalCode> {
        match self {
            Self::Vat(_) => None,
            Self::TaxCode(cf) => Some(cf),
        }
    }
}

impl From<PartitaIva> for TaxIdentifier {
    fn from(value: PartitaIva) -> Self {
        Self::Vat(value)
    }
}

impl From<FiscalCode> for TaxIdentifier {
    fn from(value: FiscalCode) -> Self {
        Self::TaxCode(value)
    }
}

impl fmt::Display for TaxIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for TaxIdentifier {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl TryFrom<String> for TaxIdentifier {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<TaxIdentifier> for String {
    fn from(value: TaxIdentifier) -> Self {
        match value {
            TaxIdentifier::Vat(piva) => piva.into(),
            TaxIdentifier::TaxCode(cf) => cf.into(),
        }
    }
}
