//! OpenTelemetry span creation helpers for vaultbook operations.
//!
//! This module provides span creation functions following an orthogonal design pattern
//! where telemetry concerns are separated from business logic. Instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation has
//! a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&mut self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use alloy_primitives::Address;
use tracing::Span;

use crate::types::{AssetAmount, AssetId};

/// Create span for a deposit operation.
///
/// This is a main public API entry point for ledger mutations.
///
/// Parent: None (root span for this operation)
/// Children: convert_to_usd span
#[inline]
pub(crate) fn deposit(asset: AssetId, owner: Address, amount: AssetAmount) -> Span {
    tracing::info_span!(
        "vaultbook.deposit",
        asset = %asset,
        owner = %owner,
        amount = %amount,
    )
}

/// Create span for a withdrawal operation.
///
/// This is a main public API entry point for ledger mutations.
///
/// Parent: None (root span for this operation)
/// Children: convert_to_usd span
#[inline]
pub(crate) fn withdraw(asset: AssetId, owner: Address, amount: AssetAmount) -> Span {
    tracing::info_span!(
        "vaultbook.withdraw",
        asset = %asset,
        owner = %owner,
        amount = %amount,
    )
}

/// Create span for converting a raw asset amount to USD.
///
/// Parent: deposit or withdraw span (or root when called directly)
/// Children: validated_price span
#[inline]
pub(crate) fn convert_to_usd(asset: AssetId, amount: AssetAmount) -> Span {
    tracing::debug_span!(
        "vaultbook.convert_to_usd",
        asset = %asset,
        amount = %amount,
    )
}

/// Create span for reading and validating an asset's oracle price.
///
/// Parent: convert_to_usd span
/// Children: None (feeds are synchronous reads)
#[inline]
pub(crate) fn validated_price(asset: AssetId) -> Span {
    tracing::debug_span!("vaultbook.validated_price", asset = %asset,)
}
