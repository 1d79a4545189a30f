// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across vaultbook.
//!
//! This module provides newtype wrappers for the domain's core units
//! to prevent mixing incompatible quantities.
//!
//! # Type Relationships
//!
//! ```text
//! AssetAmount (U256, asset-native units)
//!     |
//!     | × ValidatedPrice, ÷ 10^AssetDecimals
//!     ↓
//! Usd8 (U256, USD with 8 fractional decimals)
//! ```
//!
//! [`AssetId`] keys every balance and configuration map; the zero address
//! is reserved for the chain-native asset. [`PriceReading`] is the raw,
//! unvalidated observation an oracle feed reports.

mod amount;
mod asset;
mod decimals;
mod price;
mod usd;

pub use amount::AssetAmount;
pub use asset::AssetId;
pub use decimals::AssetDecimals;
pub use price::PriceReading;
pub use usd::Usd8;
