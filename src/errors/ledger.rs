//! Error types for ledger operations.
//!
//! This module provides the error type for the four mutating balance
//! operations and the administrative operations on
//! [`Ledger`](crate::Ledger). Policy and conversion failures nest here so a
//! single `Result<_, LedgerError>` covers a whole operation.

use alloy_primitives::Address;

use super::{ConversionError, PolicyError};
use crate::custody::CustodyError;
use crate::types::{AssetAmount, AssetId};

/// Errors that can occur during ledger operations.
///
/// Any error means the operation had no observable effect: no balance,
/// total, counter, or event changed.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The operation amount was zero.
    #[error("Amount must be nonzero")]
    ZeroAmount,

    /// An address argument was invalid for the operation.
    ///
    /// Raised for a zero owner address, for token operations aimed at the
    /// native-asset sentinel, and for attempts to override the native
    /// asset's fixed precision.
    #[error("Invalid address: {context}")]
    InvalidAddress {
        /// What was wrong with the address
        context: String,
    },

    /// The owner's balance cannot cover the requested withdrawal.
    #[error("Insufficient balance: have {balance}, requested {requested}")]
    InsufficientBalance {
        /// The owner's current balance in the asset
        balance: AssetAmount,
        /// The amount the withdrawal asked for
        requested: AssetAmount,
    },

    /// The custody layer failed to move the asset.
    ///
    /// For deposits this means the pull never happened; for withdrawals it
    /// means the payout failed. Either way no accounting was recorded.
    #[error("Transfer of {amount} units of {asset} failed for {owner}")]
    TransferFailed {
        /// The asset that failed to move
        asset: AssetId,
        /// The counterparty of the transfer
        owner: Address,
        /// The amount that failed to move
        amount: AssetAmount,
        /// The underlying custody error
        #[source]
        source: CustodyError,
    },

    /// An accounting total would exceed 256 bits.
    #[error("Accounting overflow while {context}")]
    AccountingOverflow {
        /// Which total overflowed
        context: String,
    },

    /// The ledger is paused; mutating operations are rejected.
    #[error("Ledger is paused")]
    Paused,

    /// A mutating operation re-entered while another was in progress.
    #[error("Reentrant call rejected")]
    ReentrantCall,

    /// The caller lacks the administrative capability.
    #[error("Caller {caller} lacks administrative capability")]
    Unauthorized {
        /// The rejected caller
        caller: Address,
    },

    /// A policy limit was violated.
    #[error("Policy violation: {0}")]
    Policy(#[from] PolicyError),

    /// USD conversion failed.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

impl LedgerError {
    /// Create an `InvalidAddress` error with context.
    pub fn invalid_address(context: impl Into<String>) -> Self {
        LedgerError::InvalidAddress {
            context: context.into(),
        }
    }

    /// Create an `AccountingOverflow` error naming the affected total.
    pub fn accounting_overflow(context: impl Into<String>) -> Self {
        LedgerError::AccountingOverflow {
            context: context.into(),
        }
    }

    /// Create a `TransferFailed` error from a custody failure.
    pub fn transfer_failed(
        asset: AssetId,
        owner: Address,
        amount: AssetAmount,
        source: CustodyError,
    ) -> Self {
        LedgerError::TransferFailed {
            asset,
            owner,
            amount,
            source,
        }
    }
}
