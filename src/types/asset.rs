//! Asset identifier type

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Opaque identifier for an asset held by the ledger.
///
/// Assets are identified by an address-shaped value. The zero address is
/// reserved as the sentinel for the chain-native asset ([`AssetId::NATIVE`]);
/// every other value identifies a token contract.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use vaultbook::AssetId;
///
/// let native = AssetId::NATIVE;
/// assert!(native.is_native());
///
/// let token = AssetId::new(address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"));
/// assert!(!token.is_native());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(Address);

impl AssetId {
    /// The chain-native asset (zero-address sentinel)
    pub const NATIVE: Self = Self(Address::ZERO);

    /// Create an asset identifier from an address
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Get the inner address value
    pub const fn as_address(&self) -> Address {
        self.0
    }

    /// Whether this is the native-asset sentinel
    pub fn is_native(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Address> for AssetId {
    fn from(value: Address) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_native() {
            write!(f, "native")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
