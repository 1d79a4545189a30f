//! Error types for oracle price validation.
//!
//! This module provides error types for the validation performed by
//! [`OracleGateway`](crate::OracleGateway) before a price may be used
//! in accounting.

use crate::oracle::FeedError;
use crate::types::AssetId;

/// Errors that can occur while obtaining a validated price.
///
/// Every variant means the price was rejected and no conversion happened.
/// None of these are retryable as-is: a missing feed needs configuration, a
/// compromised or stale feed needs the upstream oracle to recover.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// No price feed has been configured for the asset.
    ///
    /// Feed absence declares the asset unsupported; deposits and withdrawals
    /// of such an asset fail closed rather than assume a price.
    #[error("No price feed configured for asset {asset}")]
    PriceFeedNotSet {
        /// The asset without a feed binding
        asset: AssetId,
    },

    /// The feed reported a non-positive price.
    ///
    /// Real aggregators report signed answers; zero or negative values mean
    /// the feed is broken or manipulated and must never reach accounting.
    #[error("Price feed for {asset} reported non-positive price {price}")]
    CompromisedPrice {
        /// The asset whose feed misbehaved
        asset: AssetId,
        /// The rejected raw answer
        price: i128,
    },

    /// The feed's latest reading is older than the accepted heartbeat.
    ///
    /// A reading aged exactly the heartbeat is still accepted; one second
    /// past it is rejected.
    #[error("Price for {asset} is stale: {age_secs}s old, heartbeat is {heartbeat_secs}s")]
    StalePrice {
        /// The asset whose reading went stale
        asset: AssetId,
        /// Seconds since the feed's last update
        age_secs: u64,
        /// The staleness bound that was exceeded
        heartbeat_secs: u64,
    },

    /// The feed itself failed to produce a reading.
    #[error("Price feed for {asset} unavailable")]
    FeedUnavailable {
        /// The asset whose feed failed
        asset: AssetId,
        /// The underlying feed error
        #[source]
        source: FeedError,
    },
}
