// src/parse/columnar.rs
//
// Vertical columnar layout: one title row ("ITEM  DATE  FLIGHT  DEST
// STD/ETD  AWB  PCS ..."), then one row per shipment. Several flights
// can share the table; a row whose flight or date value changes starts
// the next manifest.

use crate::domain::{FlightManifest, ShipmentRecord, SourceLayout};
use crate::normalize;
use crate::parse::rows::{document_rows, Row};
use crate::parse::{accept_destination, is_header_token, plausible_awb};

pub fn parse(text: &str) -> Vec<FlightManifest> {
    let rows = document_rows(text);
    let Some((header_idx, columns)) = find_header(&rows) else {
        return Vec::new();
    };

    let mut manifests = Vec::new();
    let mut current: Option<FlightManifest> = None;

    for row in &rows[header_idx + 1..] {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        // Footer rows put totals under arbitrary columns, so any TOTAL
        // token disqualifies the whole row.
        if row
            .iter()
            .any(|c| c.trim().to_uppercase().starts_with("TOTAL"))
        {
            continue;
        }

        let flight = cell(row, columns.flight);
        let date = cell(row, columns.date);

        // Repeated header rows echo column titles into the flight
        // position.
        if is_header_token(&flight) {
            continue;
        }

        // Continuation rows leave flight/date blank; only a differing
        // non-blank value (or the very first one) opens a new manifest.
        let starts_new = match &current {
            None => !flight.is_empty() || !date.is_empty(),
            Some(m) => {
                (!flight.is_empty() && flight != m.flight)
                    || (!date.is_empty() && date != m.date)
            }
        };
        if starts_new {
            if let Some(done) = current.take() {
                if done.has_content() {
                    manifests.push(done);
                }
            }
            let mut next = FlightManifest::new(SourceLayout::Columnar);
            next.flight = flight;
            next.date = date;
            next.destination = accept_destination(&cell(row, columns.dest));
            next.std_etd = normalize::to_time_of_day(&cell(row, columns.std));
            current = Some(next);
        }

        let Some(manifest) = current.as_mut() else {
            continue;
        };

        let mut awb = cell(row, columns.awb);
        if !plausible_awb(&awb) {
            // Keep the row's other fields but never a row-index "AWB".
            awb.clear();
        }
        let shipment = ShipmentRecord {
            awb,
            pieces: cell(row, columns.pcs),
            weight: cell(row, columns.kgs),
            description: cell(row, columns.desc),
            reason: cell(row, columns.reason),
            uld: cell(row, columns.uld),
        };
        let any_field = !shipment.awb.is_empty()
            || !shipment.pieces.is_empty()
            || !shipment.weight.is_empty()
            || !shipment.description.is_empty()
            || !shipment.reason.is_empty()
            || !shipment.uld.is_empty();
        if any_field {
            manifest.shipments.push(shipment);
        }
    }

    if let Some(done) = current {
        if done.has_content() {
            manifests.push(done);
        }
    }
    manifests
}

#[derive(Default)]
struct Columns {
    date: Option<usize>,
    flight: Option<usize>,
    dest: Option<usize>,
    std: Option<usize>,
    awb: Option<usize>,
    pcs: Option<usize>,
    kgs: Option<usize>,
    desc: Option<usize>,
    reason: Option<usize>,
    uld: Option<usize>,
}

/// The title row is the first one whose cells match at least 3 of
/// {ITEM, DATE, FLIGHT, DEST}.
fn find_header(rows: &[Row]) -> Option<(usize, Columns)> {
    for (i, row) in rows.iter().enumerate() {
        let upper: Vec<String> = row.iter().map(|c| c.trim().to_uppercase()).collect();
        let mut score = 0;
        if upper.iter().any(|c| c == "ITEM") {
            score += 1;
        }
        if upper.iter().any(|c| c == "DATE") {
            score += 1;
        }
        if upper.iter().any(|c| c == "FLIGHT") {
            score += 1;
        }
        if upper.iter().any(|c| c.starts_with("DEST")) {
            score += 1;
        }
        if score >= 3 {
            return Some((i, resolve_columns(&upper)));
        }
    }
    None
}

/// Alias-tolerant column resolution: senders rename titles between
/// re-sends ("STD/ETD" vs "STD/ATD", "PCS" vs "Offloading Pieces
/// Verification"), so matching is by fragment.
fn resolve_columns(upper: &[String]) -> Columns {
    let mut columns = Columns::default();
    for (i, title) in upper.iter().enumerate() {
        if title == "DATE" {
            columns.date = Some(i);
        } else if title.contains("FLIGHT") {
            columns.flight = Some(i);
        } else if title.starts_with("DEST") {
            columns.dest = Some(i);
        } else if title.contains("STD") || title.contains("ETD") || title.contains("ATD") {
            columns.std = Some(i);
        } else if title.contains("AWB") {
            columns.awb = Some(i);
        } else if title.contains("PCS") || title.contains("PIECE") {
            columns.pcs = Some(i);
        } else if title.contains("KGS") || title.contains("WEIGHT") || title.contains("KG") {
            columns.kgs = Some(i);
        } else if title.contains("DESC") {
            columns.desc = Some(i);
        } else if title.contains("REASON") {
            columns.reason = Some(i);
        } else if title.contains("ULD") || title.contains("TROLLEY") {
            columns.uld = Some(i);
        }
    }
    columns
}

fn cell(row: &Row, idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i))
        .map(|c| c.trim().to_string())
        .unwrap_or_default()
}
