// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw asset amount type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Raw asset amount in the asset's smallest unit (not normalized for decimals).
///
/// This is the unit every balance and transfer is denominated in (e.g., wei
/// for an 18-decimal asset). Arithmetic is deliberately checked-only: balances
/// and accounting totals must fail on overflow rather than wrap or saturate.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use vaultbook::AssetAmount;
///
/// let a = AssetAmount::new(U256::from(1_000u64));
/// let b = AssetAmount::new(U256::from(500u64));
///
/// assert_eq!(a.checked_add(b), Some(AssetAmount::new(U256::from(1_500u64))));
/// assert_eq!(b.checked_sub(a), None); // would underflow
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetAmount(U256);

impl AssetAmount {
    /// Zero amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Whether the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition, `None` on overflow
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction, `None` on underflow
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl From<u64> for AssetAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for AssetAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AssetAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
