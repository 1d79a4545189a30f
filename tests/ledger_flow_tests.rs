//! End-to-end ledger flow tests
//!
//! These tests drive the assembled ledger through deposits, withdrawals,
//! policy rejections, and custody failures, and verify the all-or-nothing
//! contract: a failed operation leaves balances, totals, counters, and the
//! event log untouched.

mod helpers;

use alloy_primitives::Address;
use helpers::{
    bench, native_for_usd, native_units, CustodyCall, MockFeed, ADMIN, ALICE, BOB, TEST_NOW, USDC,
};
use std::sync::Arc;
use vaultbook::{
    AssetAmount, AssetDecimals, AssetId, ConversionError, LedgerError, LedgerEvent, OracleError,
    PolicyError, PriceReading, Usd8,
};

#[test]
fn test_deposit_round_trip() {
    helpers::init_tracing();
    let mut bench = bench();
    let amount = native_units(1);

    let usd = bench.ledger.deposit_native(ALICE, amount).unwrap();

    assert_eq!(usd, Usd8::from_dollars(2000));
    assert_eq!(bench.ledger.balance_of(AssetId::NATIVE, ALICE), amount);
    assert_eq!(bench.ledger.total_deposited(AssetId::NATIVE), amount);
    assert_eq!(bench.ledger.total_usd_deposited(), Usd8::from_dollars(2000));
    assert_eq!(bench.ledger.op_counts().deposits, 1);
    assert_eq!(bench.ledger.owner_op_counts(ALICE).deposits, 1);
    assert_eq!(
        bench.custody.calls(),
        vec![CustodyCall::In {
            asset: AssetId::NATIVE,
            owner: ALICE,
            amount,
        }]
    );
    assert_eq!(
        bench.ledger.events(),
        &[LedgerEvent::Deposit {
            asset: AssetId::NATIVE,
            owner: ALICE,
            amount,
            usd: Usd8::from_dollars(2000),
            new_balance: amount,
        }]
    );
}

#[test]
fn test_bank_cap_blocks_past_the_line() {
    let mut bench = bench();

    // $2000 already deposited against a $100,000 cap
    bench.ledger.deposit_native(ALICE, native_units(1)).unwrap();

    // $98,001 more would land at $100,001
    let result = bench.ledger.deposit_native(BOB, native_for_usd(98_001));
    match result {
        Err(LedgerError::Policy(PolicyError::BankCapExceeded { attempted, cap })) => {
            assert_eq!(attempted, Usd8::from_dollars(100_001));
            assert_eq!(cap, Usd8::from_dollars(100_000));
        }
        other => panic!("expected BankCapExceeded, got {:?}", other),
    }

    // Filling the cap exactly is allowed
    bench
        .ledger
        .deposit_native(BOB, native_for_usd(98_000))
        .unwrap();
    assert_eq!(
        bench.ledger.total_usd_deposited(),
        Usd8::from_dollars(100_000)
    );
}

#[test]
fn test_cap_rejection_never_reaches_custody() {
    let mut bench = bench();
    bench.ledger.deposit_native(ALICE, native_units(1)).unwrap();

    let before = bench.custody.calls();
    let result = bench.ledger.deposit_native(BOB, native_for_usd(98_001));

    assert!(matches!(result, Err(LedgerError::Policy(_))));
    assert_eq!(bench.custody.calls(), before, "no transfer may be attempted");
    assert_eq!(bench.ledger.balance_of(AssetId::NATIVE, BOB), AssetAmount::ZERO);
    assert_eq!(bench.ledger.events().len(), 1);
    assert_eq!(bench.ledger.op_counts().deposits, 1);
}

#[test]
fn test_deposit_transfer_failure_is_atomic() {
    let bench2 = bench();
    let mut ledger = bench2.ledger;
    bench2.custody.fail_transfers_in();

    let result = ledger.deposit_native(ALICE, native_units(1));

    assert!(matches!(result, Err(LedgerError::TransferFailed { .. })));
    assert_eq!(ledger.balance_of(AssetId::NATIVE, ALICE), AssetAmount::ZERO);
    assert_eq!(ledger.total_usd_deposited(), Usd8::ZERO);
    assert_eq!(ledger.op_counts().deposits, 0);
    assert!(ledger.events().is_empty());
}

#[test]
fn test_withdraw_transfer_failure_is_atomic() {
    let bench2 = bench();
    let mut ledger = bench2.ledger;
    ledger.deposit_native(ALICE, native_units(2)).unwrap();
    bench2.custody.fail_transfers_out();

    let result = ledger.withdraw_native(ALICE, native_units(1));

    assert!(matches!(result, Err(LedgerError::TransferFailed { .. })));
    assert_eq!(ledger.balance_of(AssetId::NATIVE, ALICE), native_units(2));
    assert_eq!(ledger.total_usd_withdrawn(), Usd8::ZERO);
    assert_eq!(ledger.op_counts().withdraws, 0);
    assert_eq!(ledger.events().len(), 1, "only the deposit is on record");
}

#[test]
fn test_withdraw_round_trip() {
    helpers::init_tracing();
    let mut bench = bench();
    bench.ledger.deposit_native(ALICE, native_units(10)).unwrap();

    let usd = bench.ledger.withdraw_native(ALICE, native_units(2)).unwrap();

    assert_eq!(usd, Usd8::from_dollars(4000));
    assert_eq!(bench.ledger.balance_of(AssetId::NATIVE, ALICE), native_units(8));
    assert_eq!(bench.ledger.total_usd_withdrawn(), Usd8::from_dollars(4000));
    // Deposit totals record inflow history and never shrink
    assert_eq!(bench.ledger.total_deposited(AssetId::NATIVE), native_units(10));
    assert_eq!(
        bench.ledger.total_usd_deposited(),
        Usd8::from_dollars(20_000)
    );
    assert_eq!(bench.ledger.op_counts().withdraws, 1);
    assert_eq!(
        bench.custody.calls(),
        vec![
            CustodyCall::In {
                asset: AssetId::NATIVE,
                owner: ALICE,
                amount: native_units(10),
            },
            CustodyCall::Out {
                asset: AssetId::NATIVE,
                owner: ALICE,
                amount: native_units(2),
            },
        ]
    );
}

#[test]
fn test_withdraw_limit_boundary_is_inclusive() {
    let mut bench = bench();
    bench
        .ledger
        .deposit_native(ALICE, native_for_usd(99_000))
        .unwrap();

    // One dollar over the $50,000 limit
    let result = bench.ledger.withdraw_native(ALICE, native_for_usd(50_001));
    match result {
        Err(LedgerError::Policy(PolicyError::WithdrawExceedsLimit { usd, limit })) => {
            assert_eq!(usd, Usd8::from_dollars(50_001));
            assert_eq!(limit, Usd8::from_dollars(50_000));
        }
        other => panic!("expected WithdrawExceedsLimit, got {:?}", other),
    }

    // Exactly at the limit passes
    let usd = bench
        .ledger
        .withdraw_native(ALICE, native_for_usd(50_000))
        .unwrap();
    assert_eq!(usd, Usd8::from_dollars(50_000));
}

#[test]
fn test_withdrawals_never_free_cap_headroom() {
    let mut bench = bench();
    bench
        .ledger
        .deposit_native(ALICE, native_for_usd(60_000))
        .unwrap();
    bench
        .ledger
        .withdraw_native(ALICE, native_for_usd(40_000))
        .unwrap();

    // $60,000 of the cap is consumed forever, so $41,000 more must fail
    let result = bench.ledger.deposit_native(ALICE, native_for_usd(41_000));
    assert!(matches!(
        result,
        Err(LedgerError::Policy(PolicyError::BankCapExceeded { .. }))
    ));

    // $40,000 more lands exactly on the cap
    bench
        .ledger
        .deposit_native(ALICE, native_for_usd(40_000))
        .unwrap();
    assert_eq!(
        bench.ledger.total_usd_deposited(),
        Usd8::from_dollars(100_000)
    );
}

#[test]
fn test_token_flow_with_override_and_feed() {
    let mut bench = bench();
    let token = AssetId::new(USDC);

    // Bind a $1.00000000 feed and a 6-decimal override for the token
    let feed = Arc::new(MockFeed::with_reading(PriceReading::new(
        100_000_000,
        8,
        TEST_NOW,
    )));
    bench.ledger.set_price_feed(ADMIN, token, feed).unwrap();
    bench
        .ledger
        .set_decimal_override(ADMIN, token, AssetDecimals::new(6))
        .unwrap();

    // 1.000000 tokens at $1
    let usd = bench
        .ledger
        .deposit_token(token, ALICE, AssetAmount::from(1_000_000u64))
        .unwrap();

    assert_eq!(usd, Usd8::from_dollars(1));
    assert_eq!(
        bench.ledger.balance_of(token, ALICE),
        AssetAmount::from(1_000_000u64)
    );
    assert_eq!(
        bench.ledger.total_deposited(token),
        AssetAmount::from(1_000_000u64)
    );
    // Token and native totals are tracked independently
    assert_eq!(bench.ledger.total_deposited(AssetId::NATIVE), AssetAmount::ZERO);
}

#[test]
fn test_unpriced_token_fails_closed() {
    let mut bench = bench();
    let token = AssetId::new(USDC);

    let result = bench
        .ledger
        .deposit_token(token, ALICE, AssetAmount::from(1_000_000u64));

    assert!(matches!(
        result,
        Err(LedgerError::Conversion(ConversionError::Oracle(
            OracleError::PriceFeedNotSet { .. }
        )))
    ));
    assert_eq!(bench.ledger.balance_of(token, ALICE), AssetAmount::ZERO);
    assert!(bench.custody.calls().is_empty());
}

#[test]
fn test_stale_price_blocks_flow_until_feed_updates() {
    let mut bench = bench();

    // Reading is now one second past the heartbeat
    bench.clock.advance(3601);
    let result = bench.ledger.deposit_native(ALICE, native_units(1));
    assert!(matches!(
        result,
        Err(LedgerError::Conversion(ConversionError::Oracle(
            OracleError::StalePrice {
                age_secs: 3601,
                heartbeat_secs: 3600,
                ..
            }
        )))
    ));

    // A fresh reading unblocks the same operation
    bench
        .native_feed
        .set_reading(PriceReading::new(helpers::NATIVE_PRICE, 8, TEST_NOW + 3601));
    bench.ledger.deposit_native(ALICE, native_units(1)).unwrap();
}

#[test]
fn test_pause_gates_all_four_operations() {
    let mut bench = bench();
    bench.ledger.deposit_native(ALICE, native_units(2)).unwrap();
    bench.ledger.pause(ADMIN).unwrap();

    let token = AssetId::new(USDC);
    let amount = AssetAmount::from(1u64);
    assert!(matches!(
        bench.ledger.deposit_native(ALICE, amount),
        Err(LedgerError::Paused)
    ));
    assert!(matches!(
        bench.ledger.deposit_token(token, ALICE, amount),
        Err(LedgerError::Paused)
    ));
    assert!(matches!(
        bench.ledger.withdraw_native(ALICE, amount),
        Err(LedgerError::Paused)
    ));
    assert!(matches!(
        bench.ledger.withdraw_token(token, ALICE, amount),
        Err(LedgerError::Paused)
    ));

    // Admin operations stay available while paused
    bench
        .ledger
        .set_bank_cap(ADMIN, Usd8::from_dollars(200_000))
        .unwrap();

    bench.ledger.unpause(ADMIN).unwrap();
    bench.ledger.withdraw_native(ALICE, native_units(1)).unwrap();
}

#[test]
fn test_admin_capability_is_enforced_per_operation() {
    let mut bench = bench();
    let token = AssetId::new(USDC);
    let feed = Arc::new(MockFeed::with_reading(PriceReading::new(
        100_000_000,
        8,
        TEST_NOW,
    )));

    assert!(matches!(
        bench.ledger.set_price_feed(ALICE, token, feed),
        Err(LedgerError::Unauthorized { caller }) if caller == ALICE
    ));
    assert!(matches!(
        bench
            .ledger
            .set_decimal_override(ALICE, token, AssetDecimals::new(6)),
        Err(LedgerError::Unauthorized { .. })
    ));
    assert!(matches!(
        bench.ledger.set_withdraw_limit(ALICE, Usd8::from_dollars(1)),
        Err(LedgerError::Unauthorized { .. })
    ));
    assert!(matches!(
        bench.ledger.pause(ALICE),
        Err(LedgerError::Unauthorized { .. })
    ));
    assert!(bench.ledger.events().is_empty());
}

#[test]
fn test_event_log_preserves_operation_order() {
    let mut bench = bench();
    let one = native_units(1);

    bench.ledger.deposit_native(ALICE, one).unwrap();
    bench
        .ledger
        .set_withdraw_limit(ADMIN, Usd8::from_dollars(10_000))
        .unwrap();
    bench.ledger.withdraw_native(ALICE, one).unwrap();
    bench.ledger.pause(ADMIN).unwrap();

    let kinds: Vec<&'static str> = bench
        .ledger
        .events()
        .iter()
        .map(|event| match event {
            LedgerEvent::Deposit { .. } => "deposit",
            LedgerEvent::Withdraw { .. } => "withdraw",
            LedgerEvent::WithdrawLimitSet { .. } => "withdraw_limit_set",
            LedgerEvent::Paused => "paused",
            other => panic!("unexpected event {:?}", other),
        })
        .collect();

    assert_eq!(
        kinds,
        vec!["deposit", "withdraw_limit_set", "withdraw", "paused"]
    );
}

#[test]
fn test_per_owner_accounting_is_isolated() {
    let mut bench = bench();
    bench.ledger.deposit_native(ALICE, native_units(3)).unwrap();
    bench.ledger.deposit_native(BOB, native_units(5)).unwrap();
    bench.ledger.withdraw_native(BOB, native_units(1)).unwrap();

    assert_eq!(bench.ledger.balance_of(AssetId::NATIVE, ALICE), native_units(3));
    assert_eq!(bench.ledger.balance_of(AssetId::NATIVE, BOB), native_units(4));
    assert_eq!(bench.ledger.owner_op_counts(ALICE).deposits, 1);
    assert_eq!(bench.ledger.owner_op_counts(ALICE).withdraws, 0);
    assert_eq!(bench.ledger.owner_op_counts(BOB).deposits, 1);
    assert_eq!(bench.ledger.owner_op_counts(BOB).withdraws, 1);
    assert_eq!(bench.ledger.op_counts().deposits, 2);
    assert_eq!(bench.ledger.op_counts().withdraws, 1);
    // Aggregate inflow covers both owners
    assert_eq!(
        bench.ledger.total_deposited(AssetId::NATIVE),
        native_units(8)
    );
}

#[test]
fn test_insufficient_balance_cannot_borrow_across_owners() {
    let mut bench = bench();
    bench.ledger.deposit_native(ALICE, native_units(5)).unwrap();
    bench.ledger.deposit_native(BOB, native_units(5)).unwrap();

    // The pool holds 10 units, but BOB only owns 5
    let result = bench.ledger.withdraw_native(BOB, native_units(6));
    assert!(matches!(
        result,
        Err(LedgerError::InsufficientBalance { .. })
    ));
    assert_eq!(bench.ledger.balance_of(AssetId::NATIVE, BOB), native_units(5));
}

#[test]
fn test_zero_owner_address_is_rejected_everywhere() {
    let mut bench = bench();
    let amount = native_units(1);

    assert!(matches!(
        bench.ledger.deposit_native(Address::ZERO, amount),
        Err(LedgerError::InvalidAddress { .. })
    ));
    assert!(matches!(
        bench.ledger.withdraw_native(Address::ZERO, amount),
        Err(LedgerError::InvalidAddress { .. })
    ));
    assert!(bench.ledger.events().is_empty());
    assert!(bench.custody.calls().is_empty());
}
