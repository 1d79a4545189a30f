//! Fixed protocol constants.
//!
//! These values are part of the accounting contract: changing any of them
//! changes the meaning of recorded state, so they are compile-time constants
//! rather than configuration.

/// Fractional decimals of the USD fixed-point unit ([`Usd8`](crate::Usd8))
pub const USD_DECIMALS: u8 = 8;

/// Decimal precision of the chain-native asset (wei-style, not configurable)
pub const NATIVE_DECIMALS: u8 = 18;

/// Fallback token precision when neither an override nor metadata is available.
///
/// A token whose true precision differs from 18 and has no configured
/// override will be mis-priced under this fallback; the resolver logs a
/// warning whenever it is applied.
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Maximum accepted age of a price reading, in seconds.
///
/// A reading exactly this old is still fresh; one second older is stale.
pub const PRICE_HEARTBEAT_SECS: u64 = 3600;
