//! Price feeds and the validation gateway
//!
//! This module provides a trait-based architecture for pricing assets.
//! Users implement the [`PriceFeed`] trait to bind any upstream oracle, and
//! the [`OracleGateway`] applies the validation every price must pass before
//! it may be used in accounting:
//!
//! 1. A feed must be bound for the asset — absence means the asset is
//!    unsupported and the operation fails closed.
//! 2. The reported price must be strictly positive.
//! 3. The reading must be no older than the heartbeat
//!    ([`PRICE_HEARTBEAT_SECS`]); a reading aged exactly the heartbeat is
//!    still accepted.
//!
//! Readings are queried live on every call. There is no retry and no
//! caching: a stale or broken feed fails the operation immediately rather
//! than serving a remembered price.
//!
//! # Example: Implementing PriceFeed
//!
//! ```rust,ignore
//! use vaultbook::{FeedError, PriceFeed, PriceReading};
//!
//! struct AggregatorFeed {
//!     client: AggregatorClient,
//! }
//!
//! impl PriceFeed for AggregatorFeed {
//!     fn latest_reading(&self) -> Result<PriceReading, FeedError> {
//!         let round = self
//!             .client
//!             .latest_round()
//!             .map_err(|e| FeedError::unavailable(e.to_string()))?;
//!         Ok(PriceReading::new(round.answer, round.decimals, round.updated_at))
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use alloy_primitives::U256;

use crate::clock::Clock;
use crate::config::constants::PRICE_HEARTBEAT_SECS;
use crate::errors::OracleError;
use crate::spans;
use crate::types::{AssetId, PriceReading};

/// Trait for sources of raw price observations
///
/// Implement this trait to bind an upstream oracle. The trait is object-safe
/// and synchronous; one binding exists per asset, replaceable only through
/// the ledger's administrative surface.
///
/// Implementations report honestly and validate nothing: positivity and
/// staleness checks belong to the [`OracleGateway`], and a feed that cannot
/// produce a reading returns [`FeedError`] rather than a fabricated value.
pub trait PriceFeed: Send + Sync {
    /// Return the most recent observation this feed has.
    fn latest_reading(&self) -> Result<PriceReading, FeedError>;
}

/// Errors a price feed can report
#[derive(Debug, Clone, thiserror::Error)]
pub enum FeedError {
    /// The feed could not produce a reading.
    ///
    /// Covers transport failures, decode failures, and upstream outages.
    #[error("Feed unavailable: {details}")]
    Unavailable {
        /// What went wrong
        details: String,
    },
}

impl FeedError {
    /// Create an `Unavailable` error with details.
    pub fn unavailable(details: impl Into<String>) -> Self {
        FeedError::Unavailable {
            details: details.into(),
        }
    }
}

/// A price that has passed every validation gate.
///
/// The price is unsigned here: positivity was already enforced, so
/// downstream conversion arithmetic never has to reason about signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPrice {
    /// Strictly positive price in `10^-decimals` USD units
    pub price: U256,
    /// Number of fractional decimals in `price`
    pub decimals: u8,
    /// Unix timestamp (seconds) of the reading
    pub updated_at: u64,
}

/// Per-asset feed bindings plus the validation gate.
///
/// The gateway owns the asset-to-feed map and a [`Clock`]. It is the only
/// path through which prices reach accounting.
pub struct OracleGateway {
    feeds: HashMap<AssetId, Arc<dyn PriceFeed>>,
    clock: Arc<dyn Clock>,
}

impl OracleGateway {
    /// Create a gateway with no feed bindings.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            feeds: HashMap::new(),
            clock,
        }
    }

    /// Bind or replace the feed for an asset.
    ///
    /// Returns the previous binding, if any.
    pub fn set_feed(
        &mut self,
        asset: AssetId,
        feed: Arc<dyn PriceFeed>,
    ) -> Option<Arc<dyn PriceFeed>> {
        self.feeds.insert(asset, feed)
    }

    /// Whether a feed is bound for the asset.
    pub fn has_feed(&self, asset: AssetId) -> bool {
        self.feeds.contains_key(&asset)
    }

    /// Query the asset's feed and validate the reading.
    ///
    /// Fails with [`OracleError::PriceFeedNotSet`] when no feed is bound,
    /// [`OracleError::FeedUnavailable`] when the feed errors,
    /// [`OracleError::CompromisedPrice`] for a non-positive answer, and
    /// [`OracleError::StalePrice`] when the reading is older than the
    /// heartbeat. A reading timestamped in the future counts as age zero.
    pub fn validated_price(&self, asset: AssetId) -> Result<ValidatedPrice, OracleError> {
        let span = spans::validated_price(asset);
        let _guard = span.enter();

        let feed = self
            .feeds
            .get(&asset)
            .ok_or(OracleError::PriceFeedNotSet { asset })?;

        let reading = feed
            .latest_reading()
            .map_err(|source| OracleError::FeedUnavailable { asset, source })?;

        if !reading.is_positive() {
            return Err(OracleError::CompromisedPrice {
                asset,
                price: reading.price,
            });
        }

        let now = self.clock.unix_now();
        let age_secs = now.saturating_sub(reading.updated_at);
        if age_secs > PRICE_HEARTBEAT_SECS {
            return Err(OracleError::StalePrice {
                asset,
                age_secs,
                heartbeat_secs: PRICE_HEARTBEAT_SECS,
            });
        }

        tracing::debug!(
            asset = %asset,
            price = %reading.price,
            decimals = reading.decimals,
            age_secs,
            "price validated"
        );

        Ok(ValidatedPrice {
            price: U256::from(reading.price.unsigned_abs()),
            decimals: reading.decimals,
            updated_at: reading.updated_at,
        })
    }
}
