// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! USD conversion engine
//!
//! Converts raw asset amounts into the 8-decimal USD unit that all policy
//! checks and aggregate accounting use:
//!
//! ```text
//! usd8 = amount × price × 10^8 / (10^asset_decimals × 10^price_decimals)
//! ```
//!
//! The whole computation runs in 256-bit integers with checked operations.
//! The full product is formed before the single truncating division, so no
//! precision is lost to intermediate rounding, and any overflow along the
//! way fails the conversion instead of wrapping. Division truncates toward
//! zero, which for these non-negative operands is a floor.

use alloy_primitives::U256;

use crate::config::constants::USD_DECIMALS;
use crate::errors::ConversionError;
use crate::normalizer::DecimalNormalizer;
use crate::oracle::OracleGateway;
use crate::spans;
use crate::types::{AssetAmount, AssetId, Usd8};

/// Converts asset amounts to USD through validated prices.
///
/// Owns the [`DecimalNormalizer`] and [`OracleGateway`] so that every
/// conversion resolves precision and validates the price through the same
/// configuration the ledger administers.
pub struct UsdConverter {
    normalizer: DecimalNormalizer,
    oracle: OracleGateway,
}

impl UsdConverter {
    /// Assemble a converter from its two halves.
    pub fn new(normalizer: DecimalNormalizer, oracle: OracleGateway) -> Self {
        Self { normalizer, oracle }
    }

    /// Shared access to the decimal resolver.
    pub fn normalizer(&self) -> &DecimalNormalizer {
        &self.normalizer
    }

    /// Mutable access to the decimal resolver (override administration).
    pub fn normalizer_mut(&mut self) -> &mut DecimalNormalizer {
        &mut self.normalizer
    }

    /// Shared access to the oracle gateway.
    pub fn oracle(&self) -> &OracleGateway {
        &self.oracle
    }

    /// Mutable access to the oracle gateway (feed administration).
    pub fn oracle_mut(&mut self) -> &mut OracleGateway {
        &mut self.oracle
    }

    /// Convert a raw asset amount to 8-decimal USD.
    ///
    /// Pure read: no state is mutated, and the oracle is queried live even
    /// for a zero amount so an unpriced asset fails closed regardless of
    /// amount. Zero in, zero out falls out of the arithmetic.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::Oracle`] when price validation fails
    /// - [`ConversionError::ValueOverflow`] when the product or a scale
    ///   factor exceeds 256 bits
    pub fn to_usd8(&self, asset: AssetId, amount: AssetAmount) -> Result<Usd8, ConversionError> {
        let span = spans::convert_to_usd(asset, amount);
        let _guard = span.enter();

        let decimals = self.normalizer.resolve(asset);
        let price = self.oracle.validated_price(asset)?;

        let overflow = || ConversionError::ValueOverflow { asset, amount };
        let ten = U256::from(10u64);

        let usd_scale = ten.pow(U256::from(USD_DECIMALS));
        let asset_scale = decimals.divisor().ok_or_else(overflow)?;
        let price_scale = ten
            .checked_pow(U256::from(price.decimals))
            .ok_or_else(overflow)?;
        let divisor = asset_scale.checked_mul(price_scale).ok_or_else(overflow)?;

        let numerator = amount
            .as_u256()
            .checked_mul(price.price)
            .and_then(|product| product.checked_mul(usd_scale))
            .ok_or_else(overflow)?;

        // Truncating division; divisor is a product of powers of ten, never zero
        let usd = numerator / divisor;

        tracing::debug!(
            asset = %asset,
            amount = %amount,
            decimals = decimals.as_u8(),
            price = %price.price,
            usd = %usd,
            "converted amount to USD"
        );

        Ok(Usd8::new(usd))
    }
}
