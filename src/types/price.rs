// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw oracle price observation type

use serde::{Deserialize, Serialize};

/// One raw, unvalidated observation reported by a price feed.
///
/// This is what [`PriceFeed`](crate::PriceFeed) implementations must produce.
/// The price is deliberately signed: real aggregator interfaces report signed
/// answers, and a non-positive value is the compromised-feed signal the
/// [`OracleGateway`](crate::OracleGateway) rejects. Validation (positivity,
/// staleness) happens in the gateway, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceReading {
    /// Reported price in `10^-decimals` USD units; non-positive means the
    /// feed is broken or manipulated
    pub price: i128,
    /// Number of fractional decimals in `price`
    pub decimals: u8,
    /// Unix timestamp (seconds) of the feed's last update
    pub updated_at: u64,
}

impl PriceReading {
    /// Create a new reading
    pub const fn new(price: i128, decimals: u8, updated_at: u64) -> Self {
        Self {
            price,
            decimals,
            updated_at,
        }
    }

    /// Whether the reported price is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.price > 0
    }
}

impl std::fmt::Display for PriceReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (10^-{} USD, updated at {})",
            self.price, self.decimals, self.updated_at
        )
    }
}
