//! Error types for USD conversion.

use super::OracleError;
use crate::types::{AssetAmount, AssetId};

/// Errors that can occur while converting an asset amount to USD.
///
/// Conversion either produces an exact truncated USD value or fails; it
/// never wraps, saturates, or substitutes a default.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The price could not be validated.
    ///
    /// Wraps [`OracleError`] so any gate failure (missing feed, compromised
    /// answer, staleness) propagates with its detail intact.
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// An intermediate product or scale factor exceeded 256 bits.
    ///
    /// This covers both genuine magnitude overflow and pathological decimal
    /// configurations whose scale factor (10^exponent) cannot be represented.
    #[error("USD value overflow converting {amount} units of {asset}")]
    ValueOverflow {
        /// The asset being converted
        asset: AssetId,
        /// The raw amount that overflowed
        amount: AssetAmount,
    },
}
