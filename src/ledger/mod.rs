//! Custodial ledger with USD-denominated policy enforcement
//!
//! [`Ledger`] is the crate's main entry point. It accounts balances per
//! `(asset, owner)` pair, values every deposit and withdrawal in USD through
//! [`UsdConverter`], and enforces the bank cap and per-operation withdraw
//! limit before any funds move.
//!
//! Every mutating operation follows the same discipline:
//!
//! 1. **Plan** — validate arguments and compute every new total with checked
//!    arithmetic. Nothing is written yet.
//! 2. **Interact** — ask the custody layer to actually move the asset.
//! 3. **Commit** — write the precomputed values and append one event. This
//!    step is infallible, so an error anywhere earlier means the ledger is
//!    byte-for-byte unchanged.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use alloy_primitives::address;
//! use vaultbook::{
//!     AllowAll, AssetAmount, AssetId, Clock, DecimalNormalizer, FeedError, Ledger,
//!     LedgerConfigBuilder, NoMetadata, NoopCustody, OracleGateway, PauseFlag, PriceFeed,
//!     PriceReading, SystemClock, Usd8, UsdConverter,
//! };
//!
//! struct FixedFeed;
//!
//! impl PriceFeed for FixedFeed {
//!     fn latest_reading(&self) -> Result<PriceReading, FeedError> {
//!         // $2000.00000000, quoted with 8 decimals
//!         Ok(PriceReading::new(200_000_000_000, 8, SystemClock.unix_now()))
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut oracle = OracleGateway::new(Arc::new(SystemClock));
//! oracle.set_feed(AssetId::NATIVE, Arc::new(FixedFeed));
//! let converter = UsdConverter::new(DecimalNormalizer::new(Arc::new(NoMetadata)), oracle);
//!
//! let config = LedgerConfigBuilder::new()
//!     .bank_cap(Usd8::from_dollars(1_000_000))
//!     .withdraw_limit(Usd8::from_dollars(50_000))
//!     .build();
//!
//! let mut ledger = Ledger::new(
//!     config,
//!     converter,
//!     Arc::new(NoopCustody),
//!     Arc::new(PauseFlag::new()),
//!     Arc::new(AllowAll),
//! )?;
//!
//! let owner = address!("1111111111111111111111111111111111111111");
//! let one_native = AssetAmount::from(1_000_000_000_000_000_000u64);
//! let usd = ledger.deposit_native(owner, one_native)?;
//! assert_eq!(usd, Usd8::from_dollars(2000));
//! assert_eq!(ledger.balance_of(AssetId::NATIVE, owner), one_native);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use alloy_primitives::Address;
use tracing::{info, warn};

use crate::access::{AdminGate, PauseSwitch};
use crate::config::LedgerConfig;
use crate::convert::UsdConverter;
use crate::custody::AssetCustody;
use crate::errors::{ConversionError, LedgerError, PolicyError};
use crate::event::LedgerEvent;
use crate::oracle::PriceFeed;
use crate::policy::PolicyLimits;
use crate::spans;
use crate::types::{AssetAmount, AssetDecimals, AssetId, Usd8};

mod snapshot;
mod store;

pub use snapshot::{LedgerSnapshot, SNAPSHOT_VERSION};
pub use store::{LedgerStore, OpCounters};

/// Single-threaded custodial ledger.
///
/// All operations are synchronous and take `&mut self`; there is no interior
/// locking and no async. The reentrancy marker exists for the one hole the
/// borrow rules cannot close: a custody implementation that reaches the same
/// ledger again through shared-cell indirection.
pub struct Ledger {
    store: LedgerStore,
    limits: PolicyLimits,
    converter: UsdConverter,
    custody: Arc<dyn AssetCustody>,
    pause: Arc<dyn PauseSwitch>,
    admin: Arc<dyn AdminGate>,
    events: Vec<LedgerEvent>,
    entered: bool,
}

impl Ledger {
    /// Create a ledger from configuration and collaborators.
    ///
    /// This is the single place construction-time validation happens: the
    /// configured bank cap and withdraw limit must both be nonzero, and the
    /// config's decimal overrides are installed into the converter's
    /// normalizer.
    pub fn new(
        config: LedgerConfig,
        mut converter: UsdConverter,
        custody: Arc<dyn AssetCustody>,
        pause: Arc<dyn PauseSwitch>,
        admin: Arc<dyn AdminGate>,
    ) -> Result<Self, PolicyError> {
        let LedgerConfig {
            bank_cap,
            withdraw_limit,
            decimal_overrides,
        } = config;

        let limits = PolicyLimits::new(bank_cap, withdraw_limit)?;
        for (asset, decimals) in decimal_overrides {
            converter.normalizer_mut().set_override(asset, decimals);
        }

        Ok(Self {
            store: LedgerStore::new(),
            limits,
            converter,
            custody,
            pause,
            admin,
            events: Vec::new(),
            entered: false,
        })
    }

    /// Rebuild a ledger from a snapshot.
    ///
    /// The snapshot supplies the store, limits, decimal overrides, and event
    /// log. Live collaborators cannot be persisted, so the caller supplies
    /// them again; price feeds in particular must be re-bound through
    /// [`set_price_feed`](Self::set_price_feed) before priced operations
    /// succeed. Limits are restored as-is: unlike [`new`](Self::new), a zero
    /// limit here is a state the ledger legitimately reached through its own
    /// admin operations.
    pub fn from_snapshot(
        snapshot: LedgerSnapshot,
        mut converter: UsdConverter,
        custody: Arc<dyn AssetCustody>,
        pause: Arc<dyn PauseSwitch>,
        admin: Arc<dyn AdminGate>,
    ) -> Self {
        for (asset, decimals) in &snapshot.overrides {
            converter.normalizer_mut().set_override(*asset, *decimals);
        }

        Self {
            store: snapshot.store,
            limits: snapshot.limits,
            converter,
            custody,
            pause,
            admin,
            events: snapshot.events,
            entered: false,
        }
    }

    // ========== Mutating operations ==========

    /// Deposit the native asset for `owner`.
    ///
    /// Returns the USD value credited. On any error nothing changed: no
    /// balance, no total, no counter, no event.
    pub fn deposit_native(
        &mut self,
        owner: Address,
        amount: AssetAmount,
    ) -> Result<Usd8, LedgerError> {
        self.with_entry_guard(|this| {
            let span = spans::deposit(AssetId::NATIVE, owner, amount);
            let _guard = span.enter();
            this.ensure_active()?;
            this.credit(AssetId::NATIVE, owner, amount)
        })
    }

    /// Deposit a token for `owner`.
    ///
    /// The native-asset sentinel is not a token; aiming a token operation at
    /// it is an [`LedgerError::InvalidAddress`].
    pub fn deposit_token(
        &mut self,
        token: AssetId,
        owner: Address,
        amount: AssetAmount,
    ) -> Result<Usd8, LedgerError> {
        self.with_entry_guard(|this| {
            let span = spans::deposit(token, owner, amount);
            let _guard = span.enter();
            this.ensure_active()?;
            ensure_token(token)?;
            this.credit(token, owner, amount)
        })
    }

    /// Withdraw the native asset for `owner`.
    ///
    /// Returns the USD value debited. The owner's balance must cover the
    /// amount and the USD value must not exceed the per-operation withdraw
    /// limit.
    pub fn withdraw_native(
        &mut self,
        owner: Address,
        amount: AssetAmount,
    ) -> Result<Usd8, LedgerError> {
        self.with_entry_guard(|this| {
            let span = spans::withdraw(AssetId::NATIVE, owner, amount);
            let _guard = span.enter();
            this.ensure_active()?;
            this.debit(AssetId::NATIVE, owner, amount)
        })
    }

    /// Withdraw a token for `owner`.
    pub fn withdraw_token(
        &mut self,
        token: AssetId,
        owner: Address,
        amount: AssetAmount,
    ) -> Result<Usd8, LedgerError> {
        self.with_entry_guard(|this| {
            let span = spans::withdraw(token, owner, amount);
            let _guard = span.enter();
            this.ensure_active()?;
            ensure_token(token)?;
            this.debit(token, owner, amount)
        })
    }

    /// Shared deposit path. Runs inside the entry guard with the pause and
    /// sentinel checks already done.
    fn credit(
        &mut self,
        asset: AssetId,
        owner: Address,
        amount: AssetAmount,
    ) -> Result<Usd8, LedgerError> {
        ensure_owner(owner)?;
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }

        // Plan: every check and every new total, before funds move
        let usd = self.converter.to_usd8(asset, amount)?;
        let new_usd_deposited = self
            .store
            .total_usd_deposited()
            .checked_add(usd)
            .ok_or_else(|| LedgerError::accounting_overflow("raising total USD deposited"))?;
        self.limits.check_cap(new_usd_deposited)?;
        let new_balance = self
            .store
            .balance_of(asset, owner)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::accounting_overflow("crediting the owner balance"))?;
        let new_asset_total = self
            .store
            .total_deposited(asset)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::accounting_overflow("raising the asset deposit total"))?;

        // Interact: pull the funds into custody
        self.custody
            .transfer_in(asset, owner, amount)
            .map_err(|e| LedgerError::transfer_failed(asset, owner, amount, e))?;

        // Commit: infallible writes only
        self.store
            .commit_deposit(asset, owner, new_balance, new_asset_total, new_usd_deposited);
        self.events.push(LedgerEvent::Deposit {
            asset,
            owner,
            amount,
            usd,
            new_balance,
        });

        info!(asset = %asset, owner = %owner, amount = %amount, usd = %usd, "Deposit credited");
        Ok(usd)
    }

    /// Shared withdrawal path. Runs inside the entry guard with the pause
    /// and sentinel checks already done.
    fn debit(
        &mut self,
        asset: AssetId,
        owner: Address,
        amount: AssetAmount,
    ) -> Result<Usd8, LedgerError> {
        ensure_owner(owner)?;
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }

        let balance = self.store.balance_of(asset, owner);
        let new_balance = balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                balance,
                requested: amount,
            })?;
        let usd = self.converter.to_usd8(asset, amount)?;
        self.limits.check_withdraw(usd)?;
        let new_usd_withdrawn = self
            .store
            .total_usd_withdrawn()
            .checked_add(usd)
            .ok_or_else(|| LedgerError::accounting_overflow("raising total USD withdrawn"))?;

        // Interact: pay the funds out of custody
        self.custody
            .transfer_out(asset, owner, amount)
            .map_err(|e| LedgerError::transfer_failed(asset, owner, amount, e))?;

        // Commit: infallible writes only. Deposit totals are deliberately
        // untouched; they record inflow history, not current holdings.
        self.store
            .commit_withdraw(asset, owner, new_balance, new_usd_withdrawn);
        self.events.push(LedgerEvent::Withdraw {
            asset,
            owner,
            amount,
            usd,
            new_balance,
        });

        info!(asset = %asset, owner = %owner, amount = %amount, usd = %usd, "Withdrawal paid out");
        Ok(usd)
    }

    // ========== Administrative operations ==========

    /// Bind or replace the price feed for an asset.
    pub fn set_price_feed(
        &mut self,
        caller: Address,
        asset: AssetId,
        feed: Arc<dyn PriceFeed>,
    ) -> Result<(), LedgerError> {
        self.ensure_admin(caller)?;
        self.converter.oracle_mut().set_feed(asset, feed);
        self.events.push(LedgerEvent::PriceFeedSet { asset });
        info!(asset = %asset, caller = %caller, "Price feed bound");
        Ok(())
    }

    /// Set or clear a decimal override for a token.
    ///
    /// A zero exponent clears the override. The native asset's precision is
    /// fixed at 18 and cannot be overridden.
    pub fn set_decimal_override(
        &mut self,
        caller: Address,
        asset: AssetId,
        decimals: AssetDecimals,
    ) -> Result<(), LedgerError> {
        self.ensure_admin(caller)?;
        if asset.is_native() {
            return Err(LedgerError::invalid_address(
                "the native asset's precision is fixed and cannot be overridden",
            ));
        }
        self.converter.normalizer_mut().set_override(asset, decimals);
        self.events.push(LedgerEvent::DecimalOverrideSet { asset, decimals });
        info!(asset = %asset, decimals = %decimals, caller = %caller, "Decimal override set");
        Ok(())
    }

    /// Replace the bank-wide deposit cap.
    ///
    /// Unlike construction, a zero cap is accepted here: it closes the bank
    /// to further deposits without touching existing balances.
    pub fn set_bank_cap(&mut self, caller: Address, cap: Usd8) -> Result<(), LedgerError> {
        self.ensure_admin(caller)?;
        self.limits.set_bank_cap(cap);
        self.events.push(LedgerEvent::BankCapSet { cap });
        info!(cap = %cap, caller = %caller, "Bank cap set");
        Ok(())
    }

    /// Replace the per-operation withdraw limit.
    pub fn set_withdraw_limit(&mut self, caller: Address, limit: Usd8) -> Result<(), LedgerError> {
        self.ensure_admin(caller)?;
        self.limits.set_withdraw_limit(limit);
        self.events.push(LedgerEvent::WithdrawLimitSet { limit });
        info!(limit = %limit, caller = %caller, "Withdraw limit set");
        Ok(())
    }

    /// Pause all mutating operations. Idempotent: pausing an already paused
    /// ledger emits no second event.
    pub fn pause(&mut self, caller: Address) -> Result<(), LedgerError> {
        self.ensure_admin(caller)?;
        if !self.pause.is_paused() {
            self.pause.set_paused(true);
            self.events.push(LedgerEvent::Paused);
            warn!(caller = %caller, "Ledger paused");
        }
        Ok(())
    }

    /// Resume mutating operations. Idempotent like [`pause`](Self::pause).
    pub fn unpause(&mut self, caller: Address) -> Result<(), LedgerError> {
        self.ensure_admin(caller)?;
        if self.pause.is_paused() {
            self.pause.set_paused(false);
            self.events.push(LedgerEvent::Unpaused);
            info!(caller = %caller, "Ledger unpaused");
        }
        Ok(())
    }

    // ========== Queries ==========

    /// Balance held by `owner` in `asset`.
    pub fn balance_of(&self, asset: AssetId, owner: Address) -> AssetAmount {
        self.store.balance_of(asset, owner)
    }

    /// Cumulative raw amount ever deposited in `asset`.
    pub fn total_deposited(&self, asset: AssetId) -> AssetAmount {
        self.store.total_deposited(asset)
    }

    /// Cumulative USD value of all deposits.
    pub fn total_usd_deposited(&self) -> Usd8 {
        self.store.total_usd_deposited()
    }

    /// Cumulative USD value of all withdrawals.
    pub fn total_usd_withdrawn(&self) -> Usd8 {
        self.store.total_usd_withdrawn()
    }

    /// Global operation counters.
    pub fn op_counts(&self) -> OpCounters {
        self.store.op_counts()
    }

    /// Operation counters for one owner.
    pub fn owner_op_counts(&self, owner: Address) -> OpCounters {
        self.store.owner_op_counts(owner)
    }

    /// The policy limits currently in force.
    pub fn limits(&self) -> PolicyLimits {
        self.limits
    }

    /// Whether mutating operations are currently paused.
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// The ordered event log, oldest first.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// The converter in use, for decimal and feed inspection.
    pub fn converter(&self) -> &UsdConverter {
        &self.converter
    }

    /// Value `amount` of `asset` in USD without touching any state.
    pub fn to_usd8(&self, asset: AssetId, amount: AssetAmount) -> Result<Usd8, ConversionError> {
        self.converter.to_usd8(asset, amount)
    }

    /// Capture the current state as a snapshot.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::new(
            self.store.clone(),
            self.limits,
            self.converter.normalizer().overrides().clone(),
            self.events.clone(),
        )
    }

    // ========== Internals ==========

    /// Run `op` with the reentrancy marker held.
    ///
    /// The borrow rules already prevent overlapping calls through a plain
    /// `&mut Ledger`; the marker also rejects reentry that arrives through
    /// shared-cell indirection, such as a custody hook holding its own
    /// handle to the ledger.
    fn with_entry_guard<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, LedgerError>,
    ) -> Result<T, LedgerError> {
        if self.entered {
            return Err(LedgerError::ReentrantCall);
        }
        self.entered = true;
        let result = op(self);
        self.entered = false;
        result
    }

    fn ensure_active(&self) -> Result<(), LedgerError> {
        if self.pause.is_paused() {
            Err(LedgerError::Paused)
        } else {
            Ok(())
        }
    }

    fn ensure_admin(&self, caller: Address) -> Result<(), LedgerError> {
        if self.admin.is_admin(caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized { caller })
        }
    }
}

fn ensure_owner(owner: Address) -> Result<(), LedgerError> {
    if owner.is_zero() {
        Err(LedgerError::invalid_address("zero owner address"))
    } else {
        Ok(())
    }
}

fn ensure_token(token: AssetId) -> Result<(), LedgerError> {
    if token.is_native() {
        Err(LedgerError::invalid_address(
            "token operation aimed at the native asset sentinel",
        ))
    } else {
        Ok(())
    }
}
