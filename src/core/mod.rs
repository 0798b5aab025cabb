//! Tax identifier value objects and validation.
//!
//! [`PartitaIva`] and [`FiscalCode`] are validated on construction and
//! immutable afterwards; [`TaxIdentifier::create`] dispatches a raw string
//! to the right one by shape.

mod error;
mod fiscal_code;
mod identifier;
mod partita_iva;
pub(crate) mod tables;

pub use error::*;
pub(crate) use fiscal_code::OMOCODE_POSITIONS;
pub use fiscal_code::{FISCAL_CODE_LEN, FiscalCode, FiscalCodeParts, Gender, compute_check_char};
pub use identifier::*;
pub use partita_iva::{PARTITA_IVA_LEN, PartitaIva, compute_check_digit};
