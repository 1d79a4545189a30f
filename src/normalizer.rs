//! Decimal precision resolution
//!
//! Every USD conversion needs the asset's decimal precision. The
//! [`DecimalNormalizer`] resolves it through a fixed priority order:
//!
//! 1. The native asset is always 18 decimals, not configurable.
//! 2. A configured nonzero override wins over everything else.
//! 3. Otherwise the asset's metadata source is queried.
//! 4. If metadata is absent or fails, the resolver falls back to 18.
//!
//! Resolution is deliberately infallible: a metadata failure degrades to the
//! fallback instead of blocking operations. The trade-off is the classic
//! footgun this module logs loudly about — a token whose true precision is
//! not 18 and has no override will be silently mis-priced by the fallback.

use std::collections::HashMap;
use std::sync::Arc;

use alloy_primitives::Address;

use crate::types::{AssetDecimals, AssetId};

/// Trait for querying an asset's decimal precision from its metadata
///
/// Implementations typically wrap a token contract's `decimals()` accessor.
/// The trait is synchronous and object-safe. Returning an error is normal
/// operation for assets without metadata; the resolver handles it.
pub trait AssetMetadata: Send + Sync {
    /// Report the token's decimal precision.
    fn decimals(&self, token: Address) -> Result<AssetDecimals, MetadataError>;
}

/// Errors an asset metadata source can report
#[derive(Debug, Clone, thiserror::Error)]
pub enum MetadataError {
    /// The asset does not expose decimals metadata.
    #[error("Asset {asset} does not expose decimals metadata")]
    Unsupported {
        /// The asset without metadata
        asset: Address,
    },

    /// The metadata query itself failed.
    #[error("Metadata query failed for {asset}: {details}")]
    QueryFailed {
        /// The asset being queried
        asset: Address,
        /// What went wrong
        details: String,
    },
}

impl MetadataError {
    /// Create a `QueryFailed` error with details.
    pub fn query_failed(asset: Address, details: impl Into<String>) -> Self {
        MetadataError::QueryFailed {
            asset,
            details: details.into(),
        }
    }
}

/// [`AssetMetadata`] that knows nothing.
///
/// Every query reports [`MetadataError::Unsupported`], so resolution relies
/// entirely on overrides and the fallback. Useful for deployments where
/// overrides are maintained by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetadata;

impl AssetMetadata for NoMetadata {
    fn decimals(&self, token: Address) -> Result<AssetDecimals, MetadataError> {
        Err(MetadataError::Unsupported { asset: token })
    }
}

/// Resolves the decimal precision used for an asset's conversions.
pub struct DecimalNormalizer {
    overrides: HashMap<AssetId, AssetDecimals>,
    metadata: Arc<dyn AssetMetadata>,
}

impl DecimalNormalizer {
    /// Create a normalizer with no overrides.
    pub fn new(metadata: Arc<dyn AssetMetadata>) -> Self {
        Self {
            overrides: HashMap::new(),
            metadata,
        }
    }

    /// Record or clear a per-asset override.
    ///
    /// A zero exponent means "unset": it clears any existing override so
    /// resolution falls through to metadata again.
    pub fn set_override(&mut self, asset: AssetId, decimals: AssetDecimals) {
        if decimals.is_zero() {
            self.overrides.remove(&asset);
        } else {
            self.overrides.insert(asset, decimals);
        }
    }

    /// The currently configured override for an asset, if any.
    pub fn override_for(&self, asset: AssetId) -> Option<AssetDecimals> {
        self.overrides.get(&asset).copied()
    }

    /// All overrides currently in force, for snapshotting.
    pub fn overrides(&self) -> &HashMap<AssetId, AssetDecimals> {
        &self.overrides
    }

    /// Resolve the asset's decimal precision.
    ///
    /// Never fails: native is fixed at 18, overrides win, metadata is
    /// consulted next, and anything else falls back to
    /// [`AssetDecimals::DEFAULT`] with a warning.
    pub fn resolve(&self, asset: AssetId) -> AssetDecimals {
        if asset.is_native() {
            return AssetDecimals::NATIVE;
        }

        if let Some(decimals) = self.overrides.get(&asset) {
            return *decimals;
        }

        match self.metadata.decimals(asset.as_address()) {
            Ok(decimals) => {
                if !decimals.is_reasonable() {
                    tracing::warn!(
                        asset = %asset,
                        decimals = decimals.as_u8(),
                        "metadata reports unusually large decimal precision"
                    );
                }
                decimals
            }
            Err(error) => {
                tracing::warn!(
                    asset = %asset,
                    error = %error,
                    fallback = AssetDecimals::DEFAULT.as_u8(),
                    "decimals metadata unavailable, using fallback precision"
                );
                AssetDecimals::DEFAULT
            }
        }
    }
}
