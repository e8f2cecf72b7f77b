// src/domain/changes.rs

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::manifest::FlightManifest;
use crate::errors::MonitorError;

/// How a manifest compares against what was last seen for its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeClass {
    New,
    Updated,
    Unchanged,
}

impl ChangeClass {
    pub fn label(self) -> &'static str {
        match self {
            ChangeClass::New => "NEW",
            ChangeClass::Updated => "UPDATED",
            ChangeClass::Unchanged => "UNCHANGED",
        }
    }
}

/// Persisted per-key state used to recognize re-sent flights across runs.
///
/// `update_count` moves 0->1 on first sight and +1 on every content
/// change after that; it never decrements. `first_seen` is written once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeState {
    pub last_hash: String,
    pub update_count: i64,
    pub first_seen: NaiveDateTime,
    pub last_seen: NaiveDateTime,
}

/// Caller-owned persistence for [`ChangeState`]. The core reads through
/// it and writes updates back; durability and cross-run serialization
/// are the implementation's problem.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<ChangeState>, MonitorError>;
    fn put(&mut self, key: &str, state: &ChangeState) -> Result<(), MonitorError>;
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStateStore {
    entries: HashMap<String, ChangeState>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<ChangeState>, MonitorError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, state: &ChangeState) -> Result<(), MonitorError> {
        self.entries.insert(key.to_string(), state.clone());
        Ok(())
    }
}

/// The order-preserving, whitespace-trimmed projection of a manifest's
/// semantically meaningful fields. This is the hashing input: field
/// order inside each record is declaration order, shipment order is
/// document order, so the serialization is deterministic and two
/// manifests with the same shipments in a different order hash apart.
#[derive(Debug, Serialize)]
pub struct CanonicalManifest {
    flight: String,
    date: String,
    destination: String,
    shipments: Vec<CanonicalShipment>,
}

#[derive(Debug, Serialize)]
struct CanonicalShipment {
    awb: String,
    pieces: String,
    weight: String,
    description: String,
    reason: String,
}

pub fn canonicalize(manifest: &FlightManifest) -> CanonicalManifest {
    CanonicalManifest {
        flight: manifest.flight.trim().to_string(),
        date: manifest.date.trim().to_string(),
        destination: manifest.destination.trim().to_string(),
        shipments: manifest
            .shipments
            .iter()
            .map(|s| CanonicalShipment {
                awb: s.awb.trim().to_string(),
                pieces: s.pieces.trim().to_string(),
                weight: s.weight.trim().to_string(),
                description: s.description.trim().to_string(),
                reason: s.reason.trim().to_string(),
            })
            .collect(),
    }
}

/// SHA-256 hex digest over the canonical JSON form.
pub fn content_hash(canonical: &CanonicalManifest) -> String {
    // Serializing a tree of plain strings cannot fail.
    let bytes = serde_json::to_vec(canonical).unwrap_or_default();
    let digest = Sha256::digest(&bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Compare `new_hash` against the stored state for `key`, update the
/// store, and report what happened.
///
/// New: no prior state; count goes to 1. Updated: hash differs; hash is
/// replaced and the count incremented. Unchanged: only `last_seen` is
/// refreshed.
pub fn classify(
    store: &mut dyn StateStore,
    key: &str,
    new_hash: &str,
    now: NaiveDateTime,
) -> Result<(ChangeClass, ChangeState), MonitorError> {
    let (class, state) = match store.get(key)? {
        None => (
            ChangeClass::New,
            ChangeState {
                last_hash: new_hash.to_string(),
                update_count: 1,
                first_seen: now,
                last_seen: now,
            },
        ),
        Some(prev) if prev.last_hash == new_hash => (
            ChangeClass::Unchanged,
            ChangeState {
                last_seen: now,
                ..prev
            },
        ),
        Some(prev) => (
            ChangeClass::Updated,
            ChangeState {
                last_hash: new_hash.to_string(),
                update_count: prev.update_count + 1,
                first_seen: prev.first_seen,
                last_seen: now,
            },
        ),
    };
    store.put(key, &state)?;
    Ok((class, state))
}
