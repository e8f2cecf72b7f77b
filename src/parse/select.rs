// src/parse/select.rs

use crate::domain::FlightManifest;
use crate::parse::{columnar, freetext, horizontal};

/// Run every layout parser against the raw text and keep the best
/// result. All-empty is a valid outcome for a document in no known
/// layout, not an error.
pub fn extract_manifests(text: &str) -> Vec<FlightManifest> {
    select_best(vec![
        horizontal::parse(text),
        columnar::parse(text),
        freetext::parse(text),
    ])
}

/// Candidates arrive in priority order (horizontal, columnar, free
/// text — real-world frequency, not semantic preference). The score is
/// the shipment rows summed across a candidate's manifests, so one
/// manifest with many rows beats several empty-bodied ones. A
/// strictly-greater comparison keeps the earlier candidate on ties;
/// the one exception is an empty list tying a non-empty one, where the
/// non-empty result (flights without rows) is still worth returning.
pub(crate) fn select_best(candidates: Vec<Vec<FlightManifest>>) -> Vec<FlightManifest> {
    let mut best: Option<(usize, Vec<FlightManifest>)> = None;

    for candidate in candidates {
        let score: usize = candidate.iter().map(|m| m.shipments.len()).sum();
        let replace = match &best {
            None => true,
            Some((best_score, best_list)) => {
                score > *best_score
                    || (score == *best_score && best_list.is_empty() && !candidate.is_empty())
            }
        };
        if replace {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, list)| list).unwrap_or_default()
}
