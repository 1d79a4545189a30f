//! Error types for the vaultbook library.
//!
//! This module provides strongly-typed errors for all public APIs. It follows
//! a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling (`LedgerError`,
//!   `OracleError`, etc.)
//! - **Unified error type** ([`VaultbookError`]) for convenience when you
//!   don't need to distinguish between error sources
//!
//! # Architecture
//!
//! Each major module has its own error type:
//! - [`LedgerError`] - Errors from deposit, withdrawal, and administrative operations
//! - [`OracleError`] - Errors from price validation (missing feed, compromised, stale)
//! - [`PolicyError`] - Bank-cap and withdraw-limit violations
//! - [`ConversionError`] - Errors from USD conversion (wraps [`OracleError`])
//! - [`SnapshotError`] - Errors from state snapshot persistence
//!
//! Every failure is local and immediate: an operation that returns an error
//! has made no observable state change, and retrying without changing inputs
//! or configuration will fail the same way.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust,ignore
//! use vaultbook::{Ledger, LedgerError, PolicyError};
//!
//! match ledger.deposit_native(owner, amount) {
//!     Ok(usd) => println!("deposited {}", usd),
//!     Err(LedgerError::Policy(PolicyError::BankCapExceeded { attempted, cap })) => {
//!         eprintln!("cap hit: {} > {}", attempted, cap);
//!     }
//!     Err(LedgerError::InsufficientBalance { balance, requested }) => {
//!         eprintln!("have {}, wanted {}", balance, requested);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust,ignore
//! use vaultbook::VaultbookError;
//!
//! fn settle() -> Result<(), VaultbookError> {
//!     // LedgerError and SnapshotError both convert via `?`
//!     let usd = ledger.withdraw_native(owner, amount)?;
//!     ledger.snapshot().save(&path)?;
//!     Ok(())
//! }
//! ```

mod convert;
mod ledger;
mod oracle;
mod policy;
mod snapshot;

pub use convert::ConversionError;
pub use ledger::LedgerError;
pub use oracle::OracleError;
pub use policy::PolicyError;
pub use snapshot::SnapshotError;

/// Unified error type for all vaultbook operations.
///
/// This enum wraps all module-specific error types, providing a convenient
/// way to handle errors when you don't need to distinguish between sources.
/// All module-specific error types convert automatically via `From`, so `?`
/// propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum VaultbookError {
    /// Error from ledger operations.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Error from oracle price validation.
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Policy limit violation.
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Error from USD conversion.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error from snapshot persistence.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}
