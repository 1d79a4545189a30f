// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset custody boundary
//!
//! The ledger accounts for value; something else actually holds and moves
//! it. [`AssetCustody`] is that boundary: deposits pull the asset in before
//! anything is credited, withdrawals push it out before anything is
//! recorded. Each transfer is atomic by contract — on error, nothing moved.

use alloy_primitives::Address;

use crate::types::{AssetAmount, AssetId};

/// Trait for the settlement layer that physically moves assets
///
/// Synchronous and object-safe. Implementations must be atomic per call: a
/// returned error guarantees the transfer did not happen, so the ledger can
/// abort without compensation. Partial transfers are a contract violation.
pub trait AssetCustody: Send + Sync {
    /// Pull `amount` of `asset` from `from` into custody.
    fn transfer_in(
        &self,
        asset: AssetId,
        from: Address,
        amount: AssetAmount,
    ) -> Result<(), CustodyError>;

    /// Push `amount` of `asset` from custody out to `to`.
    fn transfer_out(
        &self,
        asset: AssetId,
        to: Address,
        amount: AssetAmount,
    ) -> Result<(), CustodyError>;
}

/// Errors the custody layer can report
#[derive(Debug, thiserror::Error)]
pub enum CustodyError {
    /// The transfer was refused by the custody layer or counterparty.
    #[error("Transfer rejected: {details}")]
    Rejected {
        /// Why the transfer was refused
        details: String,
    },

    /// The custody backend failed while executing the transfer.
    #[error("Custody backend failed")]
    Backend {
        /// The underlying backend error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CustodyError {
    /// Create a `Rejected` error with details.
    pub fn rejected(details: impl Into<String>) -> Self {
        CustodyError::Rejected {
            details: details.into(),
        }
    }

    /// Create a `Backend` error from any error type.
    pub fn backend(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        CustodyError::Backend {
            source: Box::new(source),
        }
    }
}

/// [`AssetCustody`] that accepts every transfer without moving anything.
///
/// For deployments where settlement happens out of band and the ledger is
/// the system of record only. Every call succeeds and is traced.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCustody;

impl AssetCustody for NoopCustody {
    fn transfer_in(
        &self,
        asset: AssetId,
        from: Address,
        amount: AssetAmount,
    ) -> Result<(), CustodyError> {
        tracing::trace!(asset = %asset, from = %from, amount = %amount, "noop transfer in");
        Ok(())
    }

    fn transfer_out(
        &self,
        asset: AssetId,
        to: Address,
        amount: AssetAmount,
    ) -> Result<(), CustodyError> {
        tracing::trace!(asset = %asset, to = %to, amount = %amount, "noop transfer out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_custody_accepts_transfers() {
        let custody = NoopCustody;
        let owner = Address::ZERO;
        assert!(custody
            .transfer_in(AssetId::NATIVE, owner, AssetAmount::from(1u64))
            .is_ok());
        assert!(custody
            .transfer_out(AssetId::NATIVE, owner, AssetAmount::from(1u64))
            .is_ok());
    }

    #[test]
    fn test_error_constructors() {
        let rejected = CustodyError::rejected("allowance too low");
        assert!(matches!(rejected, CustodyError::Rejected { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        let backend = CustodyError::backend(io);
        assert!(matches!(backend, CustodyError::Backend { .. }));
    }
}
