//! Policy limit enforcement
//!
//! Two USD-denominated limits bound the ledger's exposure: the bank cap
//! bounds the lifetime deposited total, and the withdraw limit bounds any
//! single withdrawal. Both checks are pure comparisons — they read no other
//! state and mutate nothing.

use serde::{Deserialize, Serialize};

use crate::errors::PolicyError;
use crate::types::Usd8;

/// The two USD limits the ledger enforces.
///
/// Construction requires both limits nonzero; runtime updates through the
/// setters accept any value, including values below already-accrued totals
/// (which freezes further deposits without touching balances).
///
/// # Examples
///
/// ```
/// use vaultbook::{PolicyLimits, Usd8};
///
/// let limits = PolicyLimits::new(
///     Usd8::from_dollars(100_000),
///     Usd8::from_dollars(50_000),
/// ).unwrap();
///
/// // A deposit landing exactly on the cap is allowed
/// assert!(limits.check_cap(Usd8::from_dollars(100_000)).is_ok());
/// assert!(limits.check_cap(Usd8::from_dollars(100_001)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyLimits {
    bank_cap: Usd8,
    withdraw_limit: Usd8,
}

impl PolicyLimits {
    /// Create limits, rejecting zero values.
    pub fn new(bank_cap: Usd8, withdraw_limit: Usd8) -> Result<Self, PolicyError> {
        if bank_cap.is_zero() {
            return Err(PolicyError::zero_limit("bank cap"));
        }
        if withdraw_limit.is_zero() {
            return Err(PolicyError::zero_limit("withdraw limit"));
        }
        Ok(Self {
            bank_cap,
            withdraw_limit,
        })
    }

    /// The bank-wide deposit cap.
    pub fn bank_cap(&self) -> Usd8 {
        self.bank_cap
    }

    /// The per-operation withdrawal limit.
    pub fn withdraw_limit(&self) -> Usd8 {
        self.withdraw_limit
    }

    /// Replace the bank cap. Any value is accepted at runtime.
    pub fn set_bank_cap(&mut self, cap: Usd8) {
        self.bank_cap = cap;
    }

    /// Replace the withdrawal limit. Any value is accepted at runtime.
    pub fn set_withdraw_limit(&mut self, limit: Usd8) {
        self.withdraw_limit = limit;
    }

    /// Check a prospective bank-wide total against the cap.
    ///
    /// `prospective_total` is the current deposited total plus the deposit
    /// under consideration. Exactly reaching the cap passes.
    pub fn check_cap(&self, prospective_total: Usd8) -> Result<(), PolicyError> {
        if prospective_total > self.bank_cap {
            return Err(PolicyError::BankCapExceeded {
                attempted: prospective_total,
                cap: self.bank_cap,
            });
        }
        Ok(())
    }

    /// Check a single withdrawal's USD value against the limit.
    ///
    /// Exactly reaching the limit passes.
    pub fn check_withdraw(&self, usd: Usd8) -> Result<(), PolicyError> {
        if usd > self.withdraw_limit {
            return Err(PolicyError::WithdrawExceedsLimit {
                usd,
                limit: self.withdraw_limit,
            });
        }
        Ok(())
    }
}
