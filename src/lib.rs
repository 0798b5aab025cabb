//! # fiscale
//!
//! Italian tax identifiers: Partita IVA (VAT number) validation, Codice
//! Fiscale validation and decoding, and Codice Fiscale generation with
//! every omocodia variant.
//!
//! All identifiers are immutable value objects. They are only obtainable
//! through validating constructors, so holding a [`PartitaIva`] or a
//! [`FiscalCode`] means holding a well-formed one.
//!
//! ## Quick Start
//!
//! ```rust
//! use fiscale::*;
//!
//! let piva = PartitaIva::create("12345678903").unwrap();
//! assert_eq!(piva.to_eu_vat_id(), "IT12345678903");
//!
//! let id = TaxIdentifier::create("rssmra80a01h501u").unwrap();
//! assert_eq!(id.kind(), TaxIdKind::TaxCode);
//! assert_eq!(id.value(), "RSSMRA80A01H501U");
//!
//! assert!(matches!(
//!     TaxIdentifier::create("12345678901"),
//!     Err(TaxIdError::InvalidChecksum { .. })
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Partita IVA, Codice Fiscale, factory, decoding |
//! | `generator` | Codice Fiscale generation and omocodia |
//! | `all` | Everything |
//!
//! ## Logging
//!
//! Events are emitted through [`tracing`] at `debug` and `trace` level.
//! Install a subscriber to see them.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "generator")]
pub mod generator;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
