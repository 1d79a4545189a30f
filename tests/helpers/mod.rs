// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for vaultbook integration tests
//!
//! Provides controllable implementations of the ledger's collaborator traits
//! so flows can be exercised without real price feeds, wall clocks, or asset
//! backends.

// Not every test binary exercises every helper
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use alloy_primitives::{address, Address, U256};
use vaultbook::{
    AllowList, AssetAmount, AssetCustody, AssetId, Clock, CustodyError, DecimalNormalizer,
    FeedError, Ledger, LedgerConfigBuilder, NoMetadata, OracleGateway, PauseFlag, PriceFeed,
    PriceReading, Usd8, UsdConverter,
};

/// Installs a fmt subscriber so runs with `--nocapture` show ledger logs.
///
/// Only the first call in a test binary installs; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fixed reference instant for deterministic staleness checks
pub const TEST_NOW: u64 = 1_700_000_000;

/// The bench's native price: $2000.00000000 quoted with 8 decimals
pub const NATIVE_PRICE: i128 = 200_000_000_000;

pub const ADMIN: Address = address!("00000000000000000000000000000000000000ad");
pub const ALICE: Address = address!("1111111111111111111111111111111111111111");
pub const BOB: Address = address!("2222222222222222222222222222222222222222");

/// A token address for 6-decimal token tests
pub const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

/// Clock whose reported time tests can move.
pub struct FixedClock(AtomicU64);

impl FixedClock {
    pub fn at(now: u64) -> Self {
        Self(AtomicU64::new(now))
    }

    pub fn set(&self, now: u64) {
        self.0.store(now, Ordering::Relaxed);
    }

    pub fn advance(&self, secs: u64) {
        self.0.fetch_add(secs, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn unix_now(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Price feed whose reading tests can replace mid-flow.
pub struct MockFeed {
    reading: Mutex<Result<PriceReading, FeedError>>,
}

impl MockFeed {
    pub fn with_reading(reading: PriceReading) -> Self {
        Self {
            reading: Mutex::new(Ok(reading)),
        }
    }

    pub fn set_reading(&self, reading: PriceReading) {
        *self.reading.lock().unwrap() = Ok(reading);
    }

    pub fn set_error(&self, error: FeedError) {
        *self.reading.lock().unwrap() = Err(error);
    }
}

impl PriceFeed for MockFeed {
    fn latest_reading(&self) -> Result<PriceReading, FeedError> {
        self.reading.lock().unwrap().clone()
    }
}

/// A custody call observed by [`MockCustody`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustodyCall {
    In {
        asset: AssetId,
        owner: Address,
        amount: AssetAmount,
    },
    Out {
        asset: AssetId,
        owner: Address,
        amount: AssetAmount,
    },
}

/// Custody double that records successful transfers and can be told to fail.
#[derive(Default)]
pub struct MockCustody {
    fail_in: AtomicBool,
    fail_out: AtomicBool,
    calls: Mutex<Vec<CustodyCall>>,
}

impl MockCustody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_transfers_in(&self) {
        self.fail_in.store(true, Ordering::Relaxed);
    }

    pub fn fail_transfers_out(&self) {
        self.fail_out.store(true, Ordering::Relaxed);
    }

    /// Successful transfers, in order.
    pub fn calls(&self) -> Vec<CustodyCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl AssetCustody for MockCustody {
    fn transfer_in(
        &self,
        asset: AssetId,
        from: Address,
        amount: AssetAmount,
    ) -> Result<(), CustodyError> {
        if self.fail_in.load(Ordering::Relaxed) {
            return Err(CustodyError::rejected("transfer-in disabled by test"));
        }
        self.calls.lock().unwrap().push(CustodyCall::In {
            asset,
            owner: from,
            amount,
        });
        Ok(())
    }

    fn transfer_out(
        &self,
        asset: AssetId,
        to: Address,
        amount: AssetAmount,
    ) -> Result<(), CustodyError> {
        if self.fail_out.load(Ordering::Relaxed) {
            return Err(CustodyError::rejected("transfer-out disabled by test"));
        }
        self.calls.lock().unwrap().push(CustodyCall::Out {
            asset,
            owner: to,
            amount,
        });
        Ok(())
    }
}

/// An assembled ledger plus handles to the doubles behind it.
pub struct TestBench {
    pub ledger: Ledger,
    pub custody: Arc<MockCustody>,
    pub native_feed: Arc<MockFeed>,
    pub clock: Arc<FixedClock>,
}

/// Converter with `feed` bound for the native asset.
pub fn native_converter(clock: Arc<FixedClock>, feed: Arc<MockFeed>) -> UsdConverter {
    let mut oracle = OracleGateway::new(clock);
    oracle.set_feed(AssetId::NATIVE, feed);
    UsdConverter::new(DecimalNormalizer::new(Arc::new(NoMetadata)), oracle)
}

/// Converter with no feeds bound at all.
pub fn bare_converter(clock: Arc<FixedClock>) -> UsdConverter {
    UsdConverter::new(
        DecimalNormalizer::new(Arc::new(NoMetadata)),
        OracleGateway::new(clock),
    )
}

/// Ledger with a $2000 native price, a $100,000 bank cap, and a $50,000
/// per-operation withdraw limit. `ADMIN` holds the admin capability.
pub fn bench() -> TestBench {
    let clock = Arc::new(FixedClock::at(TEST_NOW));
    let native_feed = Arc::new(MockFeed::with_reading(PriceReading::new(
        NATIVE_PRICE,
        8,
        TEST_NOW,
    )));

    let converter = native_converter(clock.clone(), native_feed.clone());
    let custody = Arc::new(MockCustody::new());
    let config = LedgerConfigBuilder::new()
        .bank_cap(Usd8::from_dollars(100_000))
        .withdraw_limit(Usd8::from_dollars(50_000))
        .build();

    let ledger = Ledger::new(
        config,
        converter,
        custody.clone(),
        Arc::new(PauseFlag::new()),
        Arc::new(AllowList::new([ADMIN])),
    )
    .expect("bench config is valid");

    TestBench {
        ledger,
        custody,
        native_feed,
        clock,
    }
}

/// `n` whole native units (18 decimals).
pub fn native_units(n: u64) -> AssetAmount {
    AssetAmount::new(U256::from(n) * U256::from(10u64).pow(U256::from(18u64)))
}

/// The native amount worth `dollars` at the bench's $2000 price.
///
/// Only meaningful against [`bench`]'s feed: $1 of native is exactly
/// `5 * 10^14` base units there.
pub fn native_for_usd(dollars: u64) -> AssetAmount {
    AssetAmount::new(U256::from(dollars) * U256::from(500_000_000_000_000u64))
}
