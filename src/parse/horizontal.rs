// src/parse/horizontal.rs
//
// Horizontal key/value layout: a label row carries the flight header
// inline ("FLIGHT  WY223  DATE  18.JUL  DESTINATION  COK"), followed by
// a shipment sub-header and one row per shipment, terminated by a TOTAL
// row or the next flight header.

use crate::domain::{FlightManifest, ShipmentRecord, SourceLayout};
use crate::normalize;
use crate::parse::rows::{document_rows, Row};
use crate::parse::{accept_destination, is_header_token, plausible_awb, uld_token};

pub fn parse(text: &str) -> Vec<FlightManifest> {
    let rows = document_rows(text);
    let mut manifests = Vec::new();

    let mut i = 0;
    while i < rows.len() {
        match flight_header(&rows[i]) {
            Some(header) => {
                let (manifest, consumed) = collect_flight(header, &rows[i + 1..]);
                if manifest.has_content() {
                    manifests.push(manifest);
                }
                i += 1 + consumed;
            }
            None => i += 1,
        }
    }
    manifests
}

struct HeaderInfo {
    flight: String,
    date: String,
    destination: String,
    std_etd: String,
}

/// Column positions of the shipment fields, as found in the sub-header.
/// The fallback ordering matches every known sender default.
struct ColumnMap {
    awb: usize,
    pcs: usize,
    kgs: usize,
    desc: usize,
    reason: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            awb: 0,
            pcs: 1,
            kgs: 2,
            desc: 3,
            reason: 4,
        }
    }
}

/// Recognize a label row: FLIGHT, DATE and DESTINATION/DEST all present
/// with a value in the adjacent cell. The columnar title row also
/// contains FLIGHT and DATE, but there the "value" after FLIGHT is the
/// next column title, so a header-word value rejects the row.
fn flight_header(row: &Row) -> Option<HeaderInfo> {
    let upper: Vec<String> = row
        .iter()
        .map(|c| c.trim().trim_end_matches(':').to_uppercase())
        .collect();

    let flight = label_value(row, &upper, &["FLIGHT", "FLIGHT NO", "FLT"])?;
    let date = label_value(row, &upper, &["DATE"])?;
    let destination = label_value(row, &upper, &["DESTINATION", "DEST"])?;
    if is_header_token(&flight) {
        return None;
    }

    let std_etd = label_value(row, &upper, &["STD/ETD", "STD/ATD", "STD", "ETD"])
        .map(|v| normalize::to_time_of_day(&v))
        .unwrap_or_default();

    Some(HeaderInfo {
        flight,
        date,
        destination: accept_destination(&destination),
        std_etd,
    })
}

fn label_value(row: &Row, upper: &[String], labels: &[&str]) -> Option<String> {
    let idx = upper.iter().position(|c| labels.contains(&c.as_str()))?;
    let value = row.get(idx + 1)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Consume rows after an accepted header until TOTAL (consumed; parsing
/// continues at the next flight) or a new flight header (left for the
/// caller). Returns the manifest and how many rows were consumed.
fn collect_flight(header: HeaderInfo, rest: &[Row]) -> (FlightManifest, usize) {
    let mut manifest = FlightManifest::new(SourceLayout::Horizontal);
    manifest.flight = header.flight;
    manifest.date = header.date;
    manifest.destination = header.destination;
    manifest.std_etd = header.std_etd;

    let mut columns = ColumnMap::default();
    let mut saw_subheader = false;
    let mut pending_uld: Option<String> = None;
    let mut consumed = 0;

    for row in rest {
        if flight_header(row).is_some() {
            break;
        }
        consumed += 1;

        if row
            .iter()
            .any(|c| c.trim().to_uppercase().starts_with("TOTAL"))
        {
            break;
        }

        if !saw_subheader {
            saw_subheader = true;
            if let Some(map) = subheader_columns(row) {
                columns = map;
                continue;
            }
            // No recognizable sub-header: default ordering, and this row
            // is already data.
        }

        // A line carrying nothing but a trolley/ULD id belongs to the
        // shipment above it, not to a new record.
        let filled: Vec<&str> = row
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();
        if filled.len() == 1 && uld_token(filled[0]) {
            match manifest.shipments.last_mut() {
                Some(last) if last.uld.is_empty() => last.uld = filled[0].to_string(),
                Some(_) => {}
                None => pending_uld = Some(filled[0].to_string()),
            }
            continue;
        }

        let awb = cell(row, columns.awb);
        if !plausible_awb(&awb) {
            continue;
        }

        manifest.shipments.push(ShipmentRecord {
            awb,
            pieces: cell(row, columns.pcs),
            weight: cell(row, columns.kgs),
            description: cell(row, columns.desc),
            reason: cell(row, columns.reason),
            uld: pending_uld.take().unwrap_or_default(),
        });
    }

    (manifest, consumed)
}

fn subheader_columns(row: &Row) -> Option<ColumnMap> {
    let upper: Vec<String> = row.iter().map(|c| c.trim().to_uppercase()).collect();
    if !upper.iter().any(|c| c.contains("AWB")) {
        return None;
    }

    let mut map = ColumnMap::default();
    for (i, text) in upper.iter().enumerate() {
        if text.contains("AWB") {
            map.awb = i;
        } else if text.contains("PCS") || text.contains("PIECE") {
            map.pcs = i;
        } else if text.contains("KGS") || text.contains("WEIGHT") || text.contains("KG") {
            map.kgs = i;
        } else if text.contains("DESC") {
            map.desc = i;
        } else if text.contains("REASON") {
            map.reason = i;
        }
    }
    Some(map)
}

fn cell(row: &Row, idx: usize) -> String {
    row.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
}
