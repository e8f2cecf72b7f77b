// src/pipeline.rs
//
// Sole entry point for collaborators: raw text in, classified manifests
// out. Rendering, persistence of reports and notification all consume
// what this produces and never re-derive shift or change status.

use chrono::NaiveDateTime;

use crate::domain::changes::{canonicalize, classify, content_hash};
use crate::domain::{ChangeClass, ChangeState, FlightManifest, StateStore};
use crate::errors::MonitorError;
use crate::keying::derive_key;
use crate::parse::extract_manifests;
use crate::shift::{resolve_shift, Shift};

/// One manifest with everything downstream consumers need.
#[derive(Debug, Clone)]
pub struct ProcessedManifest {
    pub manifest: FlightManifest,
    pub key: String,
    pub shift: Shift,
    pub change: ChangeClass,
    pub state: ChangeState,
}

/// Parse `raw`, bucket and classify every extracted manifest against
/// the store. An empty result means no known layout matched — expected
/// for unrelated documents, and not an error.
pub fn run(
    raw: &str,
    now: NaiveDateTime,
    store: &mut dyn StateStore,
) -> Result<Vec<ProcessedManifest>, MonitorError> {
    process(extract_manifests(raw), now, store)
}

/// Classification stage, split out so callers can adjust manifests
/// (subject-line back-fill) between extraction and keying.
pub fn process(
    manifests: Vec<FlightManifest>,
    now: NaiveDateTime,
    store: &mut dyn StateStore,
) -> Result<Vec<ProcessedManifest>, MonitorError> {
    let shift = resolve_shift(now.time());
    let mut out = Vec::with_capacity(manifests.len());

    for manifest in manifests {
        let key = derive_key(&manifest.flight, &manifest.date, &manifest.destination);
        let hash = content_hash(&canonicalize(&manifest));
        let (change, state) = classify(store, &key, &hash, now)?;
        out.push(ProcessedManifest {
            manifest,
            key,
            shift,
            change,
            state,
        });
    }

    Ok(out)
}
