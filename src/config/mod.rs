//! Configuration for ledger assembly
//!
//! This module provides the configuration surface used to assemble a
//! [`Ledger`](crate::Ledger): the policy limits and the per-asset decimal
//! overrides it starts with.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::address;
//! use vaultbook::{AssetDecimals, AssetId, LedgerConfigBuilder, Usd8};
//!
//! let usdc = AssetId::new(address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"));
//!
//! let config = LedgerConfigBuilder::new()
//!     .bank_cap(Usd8::from_dollars(100_000))
//!     .withdraw_limit(Usd8::from_dollars(50_000))
//!     .decimal_override(usdc, AssetDecimals::new(6))
//!     .build();
//!
//! assert_eq!(config.bank_cap, Usd8::from_dollars(100_000));
//! ```

use std::collections::HashMap;

use crate::types::{AssetDecimals, AssetId, Usd8};

pub mod constants;

/// Configuration for a [`Ledger`](crate::Ledger).
///
/// Both limits must be nonzero: a zero cap or zero withdraw limit would make
/// the ledger unusable from the start, so [`Ledger::new`](crate::Ledger::new)
/// rejects such configurations. Runtime updates through the administrative
/// operations are not subject to the same bound.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Bank-wide deposit cap in USD terms
    pub bank_cap: Usd8,

    /// Per-operation withdrawal limit in USD terms
    pub withdraw_limit: Usd8,

    /// Initial per-asset decimal overrides (zero-exponent entries are ignored)
    pub decimal_overrides: HashMap<AssetId, AssetDecimals>,
}

impl LedgerConfig {
    /// Create a config with the given limits and no decimal overrides
    pub fn new(bank_cap: Usd8, withdraw_limit: Usd8) -> Self {
        Self {
            bank_cap,
            withdraw_limit,
            decimal_overrides: HashMap::new(),
        }
    }
}

/// Builder for [`LedgerConfig`]
///
/// Provides a fluent API for constructing ledger configurations.
///
/// # Example
///
/// ```rust
/// use vaultbook::{LedgerConfigBuilder, Usd8};
///
/// let config = LedgerConfigBuilder::new()
///     .bank_cap(Usd8::from_dollars(1_000_000))
///     .withdraw_limit(Usd8::from_dollars(25_000))
///     .build();
/// ```
pub struct LedgerConfigBuilder {
    config: LedgerConfig,
}

impl Default for LedgerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerConfigBuilder {
    /// Create a new builder with zeroed limits.
    ///
    /// The limits start at zero and must be set explicitly;
    /// [`Ledger::new`](crate::Ledger::new) rejects a config whose limits
    /// were never raised above zero.
    pub fn new() -> Self {
        Self {
            config: LedgerConfig::new(Usd8::ZERO, Usd8::ZERO),
        }
    }

    /// Set the bank-wide deposit cap
    pub fn bank_cap(mut self, cap: Usd8) -> Self {
        self.config.bank_cap = cap;
        self
    }

    /// Set the per-operation withdrawal limit
    pub fn withdraw_limit(mut self, limit: Usd8) -> Self {
        self.config.withdraw_limit = limit;
        self
    }

    /// Add a per-asset decimal override.
    ///
    /// A zero exponent means "unset" and is dropped rather than recorded.
    /// The native asset's precision is fixed at 18, so overrides for it are
    /// dropped too.
    pub fn decimal_override(mut self, asset: AssetId, decimals: AssetDecimals) -> Self {
        if !decimals.is_zero() && !asset.is_native() {
            self.config.decimal_overrides.insert(asset, decimals);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> LedgerConfig {
        self.config
    }
}
