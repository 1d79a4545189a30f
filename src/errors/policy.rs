//! Error types for policy limit enforcement.

use crate::types::Usd8;

/// Policy violations raised by [`PolicyLimits`](crate::PolicyLimits).
///
/// Both limit checks carry the offending value and the bound so callers can
/// report exactly how far over the line an operation was.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// Accepting the deposit would push the bank-wide USD total past the cap.
    ///
    /// `attempted` is the prospective total (current total plus this
    /// deposit), not the deposit alone. A deposit that lands exactly on the
    /// cap is allowed.
    #[error("Bank cap exceeded: prospective total {attempted} is over the {cap} cap")]
    BankCapExceeded {
        /// Prospective bank-wide total after the deposit
        attempted: Usd8,
        /// The configured cap
        cap: Usd8,
    },

    /// A single withdrawal exceeds the per-operation USD limit.
    ///
    /// A withdrawal valued exactly at the limit is allowed.
    #[error("Withdrawal of {usd} exceeds the per-operation limit {limit}")]
    WithdrawExceedsLimit {
        /// USD value of the attempted withdrawal
        usd: Usd8,
        /// The configured limit
        limit: Usd8,
    },

    /// A limit was zero at construction time.
    ///
    /// Zero limits at assembly would make the ledger unusable from the
    /// start; runtime updates are allowed to set any value.
    #[error("{name} must be nonzero at construction")]
    ZeroLimit {
        /// Which limit was zero ("bank cap" or "withdraw limit")
        name: String,
    },
}

impl PolicyError {
    /// Create a `ZeroLimit` error naming the offending limit.
    pub fn zero_limit(name: impl Into<String>) -> Self {
        PolicyError::ZeroLimit { name: name.into() }
    }
}
