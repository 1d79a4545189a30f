//! Ledger event definitions
//!
//! Every successful mutating operation appends exactly one event to the
//! ledger's ordered, append-only log. Events are the observable record of
//! what happened and in what order; failed operations never emit one.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::types::{AssetAmount, AssetDecimals, AssetId, Usd8};

/// One entry in the ledger's event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A deposit was credited.
    Deposit {
        /// Asset deposited
        asset: AssetId,
        /// Owner whose balance was credited
        owner: Address,
        /// Raw amount credited
        amount: AssetAmount,
        /// USD value recorded for the deposit
        usd: Usd8,
        /// Owner's balance in the asset after the deposit
        new_balance: AssetAmount,
    },

    /// A withdrawal was debited and paid out.
    Withdraw {
        /// Asset withdrawn
        asset: AssetId,
        /// Owner whose balance was debited
        owner: Address,
        /// Raw amount debited
        amount: AssetAmount,
        /// USD value recorded for the withdrawal
        usd: Usd8,
        /// Owner's balance in the asset after the withdrawal
        new_balance: AssetAmount,
    },

    /// An asset's price feed binding was replaced.
    PriceFeedSet {
        /// Asset whose feed was bound
        asset: AssetId,
    },

    /// An asset's decimal override was set or cleared.
    DecimalOverrideSet {
        /// Asset whose override changed
        asset: AssetId,
        /// The new override; a zero exponent means it was cleared
        decimals: AssetDecimals,
    },

    /// The bank-wide deposit cap was replaced.
    BankCapSet {
        /// The new cap
        cap: Usd8,
    },

    /// The per-operation withdrawal limit was replaced.
    WithdrawLimitSet {
        /// The new limit
        limit: Usd8,
    },

    /// Mutating operations were paused.
    Paused,

    /// Mutating operations were resumed.
    Unpaused,
}

impl std::fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerEvent::Deposit {
                asset,
                owner,
                amount,
                usd,
                ..
            } => {
                write!(f, "deposit {} of {} by {} ({})", amount, asset, owner, usd)
            }
            LedgerEvent::Withdraw {
                asset,
                owner,
                amount,
                usd,
                ..
            } => {
                write!(f, "withdraw {} of {} by {} ({})", amount, asset, owner, usd)
            }
            LedgerEvent::PriceFeedSet { asset } => write!(f, "price feed set for {}", asset),
            LedgerEvent::DecimalOverrideSet { asset, decimals } => {
                write!(f, "decimal override for {} set to {}", asset, decimals)
            }
            LedgerEvent::BankCapSet { cap } => write!(f, "bank cap set to {}", cap),
            LedgerEvent::WithdrawLimitSet { limit } => {
                write!(f, "withdraw limit set to {}", limit)
            }
            LedgerEvent::Paused => write!(f, "paused"),
            LedgerEvent::Unpaused => write!(f, "unpaused"),
        }
    }
}
