//! Omocodia: letter substitution of numeric positions.
//!
//! A variant is identified by a bit mask over the numeric positions of
//! the code body. Bit `i` substitutes the `i`-th numeric position counted
//! from the right, so masks `1, 3, 7, …` are the cumulative right-to-left
//! substitutions assigned by the Agenzia delle Entrate.

use serde::{Deserialize, Serialize};

use crate::core::{OMOCODE_POSITIONS, tables};

/// Which omocodia variants the generator enumerates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OmocodiaMode {
    /// Every substitution combination: `2^n - 1` variants for `n` numeric
    /// positions.
    #[default]
    All,
    /// Only the cumulative right-to-left substitutions: `n` variants.
    Official,
}

impl OmocodiaMode {
    /// Variant masks in output order, excluding the canonical mask 0.
    pub(crate) fn masks(self, positions: usize) -> Vec<u32> {
        let Ok(n) = u32::try_from(positions) else {
            return Vec::new();
        };
        if n == 0 || n >= u32::BITS {
            return Vec::new();
        }
        match self {
            Self::All => (1..(1u32 << n)).collect(),
            Self::Official => (1..=n).map(|k| (1u32 << k) - 1).collect(),
        }
    }
}

/// Positions of the body that hold digits and may be substituted, left
/// to right.
///
/// Only the slots a decoder reverts are considered: the first character
/// of the birthplace code is never substituted.
pub(crate) fn numeric_positions(body: &[u8]) -> Vec<usize> {
    OMOCODE_POSITIONS
        .into_iter()
        .filter(|&pos| body.get(pos).is_some_and(u8::is_ascii_digit))
        .collect()
}

/// Apply a substitution mask to a copy of `body`.
pub(crate) fn substitute(body: &[u8], positions: &[usize], mask: u32) -> Vec<u8> {
    let mut out = body.to_vec();
    for (bit, &pos) in positions.iter().rev().enumerate() {
        if mask >> bit & 1 == 0 {
            continue;
        }
        if let Some(letter) = out.get(pos).copied().and_then(tables::omocode_letter) {
            out[pos] = letter;
        }
    }
    out
}
