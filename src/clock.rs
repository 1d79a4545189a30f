//! Wall-clock abstraction for staleness checks.
//!
//! The oracle gateway's heartbeat check compares a feed's `updated_at`
//! against "now". Taking the clock as a trait keeps that boundary exact and
//! testable: production uses [`SystemClock`], tests pin a fixed instant and
//! step it across the heartbeat.

use chrono::Utc;

/// Source of the current unix time in seconds.
///
/// Synchronous and object-safe, like every collaborator seam in this crate.
pub trait Clock: Send + Sync {
    /// Current unix timestamp in seconds.
    fn unix_now(&self) -> u64;
}

/// Wall-clock [`Clock`] backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_now(&self) -> u64 {
        // timestamp() is negative only before 1970
        Utc::now().timestamp().max(0) as u64
    }
}
