// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory accounting state
//!
//! [`LedgerStore`] holds every balance and counter the ledger tracks. It is
//! deliberately passive: all validation and checked arithmetic happen in the
//! ledger before a commit method is called, so commits are infallible and a
//! failed operation never leaves the store half-updated.

use std::collections::HashMap;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::types::{AssetAmount, AssetId, Usd8};

/// Operation counters, tracked globally and per owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCounters {
    /// Number of successful deposits
    pub deposits: u64,
    /// Number of successful withdrawals
    pub withdraws: u64,
}

/// Balances and aggregate counters for the ledger.
///
/// Balances are keyed by `(asset, owner)`, stored as a nested map so the
/// structure serializes to JSON directly. Deposit totals (`deposited_per_asset`,
/// `total_usd_deposited`) only ever grow: withdrawals debit balances but do
/// not reduce what has historically been deposited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStore {
    balances: HashMap<AssetId, HashMap<Address, AssetAmount>>,
    deposited_per_asset: HashMap<AssetId, AssetAmount>,
    total_usd_deposited: Usd8,
    total_usd_withdrawn: Usd8,
    op_counts: OpCounters,
    owner_op_counts: HashMap<Address, OpCounters>,
}

impl LedgerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            deposited_per_asset: HashMap::new(),
            total_usd_deposited: Usd8::ZERO,
            total_usd_withdrawn: Usd8::ZERO,
            op_counts: OpCounters::default(),
            owner_op_counts: HashMap::new(),
        }
    }

    /// Balance held by `owner` in `asset`.
    ///
    /// Owners that never deposited report zero; there is no distinction
    /// between an absent entry and a zero balance.
    pub fn balance_of(&self, asset: AssetId, owner: Address) -> AssetAmount {
        self.balances
            .get(&asset)
            .and_then(|owners| owners.get(&owner))
            .copied()
            .unwrap_or(AssetAmount::ZERO)
    }

    /// Cumulative raw amount ever deposited in `asset`.
    pub fn total_deposited(&self, asset: AssetId) -> AssetAmount {
        self.deposited_per_asset
            .get(&asset)
            .copied()
            .unwrap_or(AssetAmount::ZERO)
    }

    /// Cumulative USD value of all deposits.
    pub fn total_usd_deposited(&self) -> Usd8 {
        self.total_usd_deposited
    }

    /// Cumulative USD value of all withdrawals.
    pub fn total_usd_withdrawn(&self) -> Usd8 {
        self.total_usd_withdrawn
    }

    /// Global operation counters.
    pub fn op_counts(&self) -> OpCounters {
        self.op_counts
    }

    /// Operation counters for a single owner.
    pub fn owner_op_counts(&self, owner: Address) -> OpCounters {
        self.owner_op_counts.get(&owner).copied().unwrap_or_default()
    }

    /// Apply a fully validated deposit.
    ///
    /// All values are precomputed by the caller with checked arithmetic, so
    /// this only writes them. Counters saturate rather than wrap.
    pub(crate) fn commit_deposit(
        &mut self,
        asset: AssetId,
        owner: Address,
        new_balance: AssetAmount,
        new_asset_total: AssetAmount,
        new_usd_total: Usd8,
    ) {
        self.balances.entry(asset).or_default().insert(owner, new_balance);
        self.deposited_per_asset.insert(asset, new_asset_total);
        self.total_usd_deposited = new_usd_total;
        self.op_counts.deposits = self.op_counts.deposits.saturating_add(1);
        let owner_counts = self.owner_op_counts.entry(owner).or_default();
        owner_counts.deposits = owner_counts.deposits.saturating_add(1);
    }

    /// Apply a fully validated withdrawal.
    ///
    /// Deposit totals are untouched: they record what ever flowed in, not the
    /// current holdings.
    pub(crate) fn commit_withdraw(
        &mut self,
        asset: AssetId,
        owner: Address,
        new_balance: AssetAmount,
        new_usd_withdrawn: Usd8,
    ) {
        self.balances.entry(asset).or_default().insert(owner, new_balance);
        self.total_usd_withdrawn = new_usd_withdrawn;
        self.op_counts.withdraws = self.op_counts.withdraws.saturating_add(1);
        let owner_counts = self.owner_op_counts.entry(owner).or_default();
        owner_counts.withdraws = owner_counts.withdraws.saturating_add(1);
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const ALICE: Address = address!("1111111111111111111111111111111111111111");
    const BOB: Address = address!("2222222222222222222222222222222222222222");

    #[test]
    fn test_empty_store_reports_zeros() {
        let store = LedgerStore::new();
        assert_eq!(store.balance_of(AssetId::NATIVE, ALICE), AssetAmount::ZERO);
        assert_eq!(store.total_deposited(AssetId::NATIVE), AssetAmount::ZERO);
        assert_eq!(store.total_usd_deposited(), Usd8::ZERO);
        assert_eq!(store.total_usd_withdrawn(), Usd8::ZERO);
        assert_eq!(store.op_counts(), OpCounters::default());
        assert_eq!(store.owner_op_counts(ALICE), OpCounters::default());
    }

    #[test]
    fn test_commit_deposit_writes_all_values() {
        let mut store = LedgerStore::new();
        store.commit_deposit(
            AssetId::NATIVE,
            ALICE,
            AssetAmount::from(100u64),
            AssetAmount::from(100u64),
            Usd8::from_dollars(5),
        );

        assert_eq!(
            store.balance_of(AssetId::NATIVE, ALICE),
            AssetAmount::from(100u64)
        );
        assert_eq!(
            store.total_deposited(AssetId::NATIVE),
            AssetAmount::from(100u64)
        );
        assert_eq!(store.total_usd_deposited(), Usd8::from_dollars(5));
        assert_eq!(store.op_counts().deposits, 1);
        assert_eq!(store.owner_op_counts(ALICE).deposits, 1);
        assert_eq!(store.owner_op_counts(BOB).deposits, 0);
    }

    #[test]
    fn test_commit_withdraw_leaves_deposit_totals() {
        let mut store = LedgerStore::new();
        store.commit_deposit(
            AssetId::NATIVE,
            ALICE,
            AssetAmount::from(100u64),
            AssetAmount::from(100u64),
            Usd8::from_dollars(5),
        );
        store.commit_withdraw(
            AssetId::NATIVE,
            ALICE,
            AssetAmount::from(40u64),
            Usd8::from_dollars(3),
        );

        assert_eq!(
            store.balance_of(AssetId::NATIVE, ALICE),
            AssetAmount::from(40u64)
        );
        // Withdrawals never reduce what has been deposited
        assert_eq!(
            store.total_deposited(AssetId::NATIVE),
            AssetAmount::from(100u64)
        );
        assert_eq!(store.total_usd_deposited(), Usd8::from_dollars(5));
        assert_eq!(store.total_usd_withdrawn(), Usd8::from_dollars(3));
        assert_eq!(store.op_counts().deposits, 1);
        assert_eq!(store.op_counts().withdraws, 1);
    }

    #[test]
    fn test_owner_counters_are_independent() {
        let mut store = LedgerStore::new();
        store.commit_deposit(
            AssetId::NATIVE,
            ALICE,
            AssetAmount::from(1u64),
            AssetAmount::from(1u64),
            Usd8::from_dollars(1),
        );
        store.commit_deposit(
            AssetId::NATIVE,
            BOB,
            AssetAmount::from(2u64),
            AssetAmount::from(3u64),
            Usd8::from_dollars(2),
        );

        assert_eq!(store.owner_op_counts(ALICE).deposits, 1);
        assert_eq!(store.owner_op_counts(BOB).deposits, 1);
        assert_eq!(store.op_counts().deposits, 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut store = LedgerStore::new();
        store.commit_deposit(
            AssetId::NATIVE,
            ALICE,
            AssetAmount::from(100u64),
            AssetAmount::from(100u64),
            Usd8::from_dollars(5),
        );

        let json = serde_json::to_string(&store).unwrap();
        let back: LedgerStore = serde_json::from_str(&json).unwrap();
        assert_eq!(store, back);
    }
}
