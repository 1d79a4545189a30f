// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-point USD value type

use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::config::constants::USD_DECIMALS;

/// USD value as an integer with 8 fractional decimals.
///
/// All USD accounting (per-operation values, bank-wide totals, policy
/// limits) is denominated in this fixed-point unit so that comparisons and
/// aggregation stay exact. `1_0000_0000` represents one dollar.
///
/// Arithmetic is checked-only: totals must fail on overflow rather than
/// wrap. For human-readable reporting use [`to_bigdecimal`](Self::to_bigdecimal)
/// or the `Display` impl.
///
/// # Examples
///
/// ```
/// use vaultbook::Usd8;
///
/// let price = Usd8::from_dollars(2000);
/// assert_eq!(format!("{}", price), "$2000");
///
/// let sum = price.checked_add(Usd8::from_dollars(500)).unwrap();
/// assert_eq!(sum, Usd8::from_dollars(2500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd8(U256);

impl Usd8 {
    /// Zero USD value
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a USD value from a raw 8-decimal integer
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Create a USD value from whole dollars
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use vaultbook::Usd8;
    ///
    /// let value = Usd8::from_dollars(3);
    /// assert_eq!(value.as_u256(), U256::from(300_000_000u64));
    /// ```
    pub fn from_dollars(dollars: u64) -> Self {
        // Both operands fit in 64 bits, the product fits in 128
        Self(U256::from(dollars) * Self::scale())
    }

    /// Get the inner U256 value (8-decimal fixed point)
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the value is zero
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

    /// Convert to a `BigDecimal` for reporting.
    ///
    /// The conversion goes through `BigInt` byte decoding, so it is exact for
    /// the full U256 range and never loses precision to floating point.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use bigdecimal::BigDecimal;
    /// use vaultbook::Usd8;
    ///
    /// let value = Usd8::from_dollars(1234);
    /// assert_eq!(value.to_bigdecimal(), BigDecimal::from_str("1234.00000000").unwrap());
    /// ```
    pub fn to_bigdecimal(&self) -> BigDecimal {
        let digits = BigInt::from_bytes_be(Sign::Plus, &self.0.to_be_bytes::<32>());
        BigDecimal::new(digits, i64::from(USD_DECIMALS))
    }

    fn scale() -> U256 {
        U256::from(10u64).pow(U256::from(USD_DECIMALS))
    }
}

impl From<U256> for Usd8 {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Usd8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let divisor = Self::scale();
        let whole = self.0 / divisor;
        // The remainder of a mod-10^8 division always fits in u64
        let fractional = (self.0 % divisor).to::<u64>();

        // Format with 8 decimal places, removing trailing zeros
        let fractional_str = format!("{:08}", fractional);
        let trimmed = fractional_str.trim_end_matches('0');

        if trimmed.is_empty() {
            write!(f, "${}", whole)
        } else {
            write!(f, "${}.{}", whole, trimmed)
        }
    }
}
