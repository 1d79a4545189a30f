//! Custodial ledger accounting with oracle-backed USD conversion.
//!
//! Vaultbook tracks per-owner balances for a native asset and arbitrary
//! tokens, values every movement in 8-decimal USD through validated price
//! feeds, and enforces a bank-wide deposit cap and a per-operation withdraw
//! limit. All operations are synchronous, single-threaded, and atomic: an
//! operation either fully happens or leaves no trace.
//!
//! Start with [`Ledger`] for the assembled system, or use the pieces
//! directly: [`DecimalNormalizer`] for precision resolution,
//! [`OracleGateway`] for price validation, and [`UsdConverter`] for the
//! integer conversion arithmetic.

pub mod access;
pub mod clock;
pub mod config;
pub mod convert;
pub mod custody;
pub mod errors;
pub mod event;
pub mod ledger;
pub mod normalizer;
pub mod oracle;
pub mod policy;
mod spans;
pub mod types;

pub use access::*;
pub use clock::*;
pub use config::*;
pub use convert::*;
pub use custody::*;
pub use errors::*;
pub use event::*;
pub use ledger::*;
pub use normalizer::*;
pub use oracle::*;
pub use policy::*;
pub use types::*;
