// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Snapshot persistence for ledger state
//!
//! A snapshot captures everything a ledger needs to restart: the store, the
//! policy limits in force, and the event log. Saves go through a temp file
//! and an atomic rename so an interrupted write never clobbers the previous
//! snapshot, and loads fail closed on anything suspect.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::SnapshotError;
use crate::event::LedgerEvent;
use crate::policy::PolicyLimits;
use crate::types::{AssetDecimals, AssetId};

use super::store::LedgerStore;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized ledger state (versioned).
///
/// Produced by [`Ledger::snapshot`](crate::ledger::Ledger::snapshot) and
/// consumed by [`Ledger::from_snapshot`](crate::ledger::Ledger::from_snapshot).
/// The version field guards against reading a file written by an
/// incompatible format: we refuse rather than guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    version: u32,
    pub(crate) store: LedgerStore,
    pub(crate) limits: PolicyLimits,
    pub(crate) overrides: HashMap<AssetId, AssetDecimals>,
    pub(crate) events: Vec<LedgerEvent>,
}

impl LedgerSnapshot {
    pub(crate) fn new(
        store: LedgerStore,
        limits: PolicyLimits,
        overrides: HashMap<AssetId, AssetDecimals>,
        events: Vec<LedgerEvent>,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            store,
            limits,
            overrides,
            events,
        }
    }

    /// Format version this snapshot was written with.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The recorded balances and counters.
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// The policy limits in force when the snapshot was taken.
    pub fn limits(&self) -> PolicyLimits {
        self.limits
    }

    /// The decimal overrides in force when the snapshot was taken.
    pub fn overrides(&self) -> &HashMap<AssetId, AssetDecimals> {
        &self.overrides
    }

    /// The event log up to the snapshot point.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Write the snapshot to `path` as pretty-printed JSON.
    ///
    /// The bytes land in a sibling `.tmp` file first and are renamed into
    /// place, so a crash mid-write leaves any previous snapshot intact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(self)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &json)
            .map_err(|e| SnapshotError::io(temp_path.display().to_string(), e))?;
        fs::rename(&temp_path, path)
            .map_err(|e| SnapshotError::io(path.display().to_string(), e))?;

        info!(
            path = %path.display(),
            events = self.events.len(),
            "Saved ledger snapshot"
        );
        Ok(())
    }

    /// Read a snapshot back from `path`.
    ///
    /// Fails closed: a missing file, unparseable JSON, or a version other
    /// than [`SNAPSHOT_VERSION`] is an error. Restarting a ledger from
    /// silently truncated state is never acceptable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| SnapshotError::io(path.display().to_string(), e))?;
        let snapshot: Self = serde_json::from_slice(&bytes)?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        debug!(
            path = %path.display(),
            events = snapshot.events.len(),
            "Loaded ledger snapshot"
        );
        Ok(snapshot)
    }
}
