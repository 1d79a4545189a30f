//! Administrative capability and pause controls
//!
//! The ledger does not implement a role system. It asks two injected
//! collaborators: [`AdminGate`] answers "may this caller administer?", and
//! [`PauseSwitch`] holds the operational kill switch. How admin rights are
//! granted, rotated, or revoked lives entirely behind the gate.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use alloy_primitives::Address;

/// Capability check for administrative operations
pub trait AdminGate: Send + Sync {
    /// Whether the caller may perform administrative operations.
    fn is_admin(&self, caller: Address) -> bool;
}

/// Pause state for mutating ledger operations
///
/// Interior mutability by design: the ledger shares the switch and flips it
/// through a shared reference.
pub trait PauseSwitch: Send + Sync {
    /// Whether mutating operations are currently rejected.
    fn is_paused(&self) -> bool;

    /// Set the pause state.
    fn set_paused(&self, paused: bool);
}

/// [`PauseSwitch`] backed by an atomic flag, starting unpaused.
#[derive(Debug, Default)]
pub struct PauseFlag(AtomicBool);

impl PauseFlag {
    /// Create an unpaused flag.
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }
}

impl PauseSwitch for PauseFlag {
    fn is_paused(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.0.store(paused, Ordering::Relaxed);
    }
}

/// [`AdminGate`] backed by a fixed set of admin addresses.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    admins: HashSet<Address>,
}

impl AllowList {
    /// Create an allow list from the given admin addresses.
    pub fn new(admins: impl IntoIterator<Item = Address>) -> Self {
        Self {
            admins: admins.into_iter().collect(),
        }
    }
}

impl AdminGate for AllowList {
    fn is_admin(&self, caller: Address) -> bool {
        self.admins.contains(&caller)
    }
}

/// [`AdminGate`] that admits every caller. Test and single-operator use.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AdminGate for AllowAll {
    fn is_admin(&self, _caller: Address) -> bool {
        true
    }
}
