//! Asset decimal precision type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_TOKEN_DECIMALS, NATIVE_DECIMALS};

/// Decimal precision exponent for an asset.
///
/// The exponent states how many fractional digits the asset's smallest unit
/// carries: a raw amount of `10^decimals` represents one whole unit. The full
/// `u8` domain (0 through 255) is accepted; values above 18 are unusual and
/// flagged by [`is_reasonable`](Self::is_reasonable) but still honored.
///
/// # Examples
///
/// ```
/// use vaultbook::AssetDecimals;
///
/// let native = AssetDecimals::NATIVE;
/// assert_eq!(native.as_u8(), 18);
///
/// let usdc_like = AssetDecimals::new(6);
/// assert!(usdc_like.is_reasonable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetDecimals(u8);

impl AssetDecimals {
    /// Maximum reasonable decimals (following ERC-20 convention)
    pub const MAX_REASONABLE: u8 = 18;

    /// Precision of the chain-native asset (18, fixed)
    pub const NATIVE: Self = Self(NATIVE_DECIMALS);

    /// Fallback precision when no override or metadata is available (18)
    pub const DEFAULT: Self = Self(DEFAULT_TOKEN_DECIMALS);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Whether the exponent is zero (treated as "unset" for overrides)
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if decimals are in reasonable range (0-18)
    ///
    /// Any u8 value is valid, but precisions over 18 are rare enough
    /// that they usually indicate misconfiguration.
    pub const fn is_reasonable(&self) -> bool {
        self.0 <= Self::MAX_REASONABLE
    }

    /// Calculate the divisor for conversions: 10^decimals
    ///
    /// Returns `None` when the power does not fit in a U256 (exponents
    /// above 77), which callers must treat as a conversion failure.
    pub fn divisor(&self) -> Option<U256> {
        U256::from(10u64).checked_pow(U256::from(self.0))
    }
}

impl From<u8> for AssetDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AssetDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
