// src/parse/freetext.rs
//
// Unstructured fixed-width layout: a title line names the flight
// ("OFFLOADED CARGO ON WY627/27FEB"), data lines follow with fields
// separated by runs of two or more spaces, and a trailing "CGO OFFLOAD
// DUE ..." line carries the reason for the whole block.

use regex::Regex;

use crate::domain::{FlightManifest, ShipmentRecord, SourceLayout};
use crate::parse::rows::visible_lines;
use crate::parse::{accept_destination, plausible_awb};

/// How far past a title line data may still appear. Blocks in the wild
/// are short; anything beyond this is prose again.
const LOOKAHEAD_LINES: usize = 15;

struct Patterns {
    title: Regex,
    data: Regex,
    reason: Regex,
}

impl Patterns {
    fn new() -> Option<Self> {
        Some(Self {
            title: Regex::new(r"(?i)OFFLOADED\s+CARGO\s+ON\s+([A-Za-z0-9]{2,6})\s*/\s*([^\s/]+)")
                .ok()?,
            // AWB (digits, possibly space-grouped), pieces, description,
            // one-letter class code, weight, destination. The >=2 space
            // separator is what tells a data line from prose.
            data: Regex::new(
                r"^\s*(\d(?:[\d ]*\d)?)\s{2,}(\d+)\s{2,}(\S.*?)\s{2,}([A-Za-z])\s{2,}(\d[\d.,]*)\s{2,}([A-Za-z]{3})\s*$",
            )
            .ok()?,
            reason: Regex::new(r"(?i)\bCGO\s+OFFLOAD(?:ED)?\s+DUE\s+(?:TO\s+)?(.+)").ok()?,
        })
    }
}

pub fn parse(text: &str) -> Vec<FlightManifest> {
    let Some(patterns) = Patterns::new() else {
        return Vec::new();
    };
    let lines = visible_lines(text);
    let mut manifests = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let Some(title) = patterns.title.captures(&lines[i]) else {
            i += 1;
            continue;
        };

        let mut manifest = FlightManifest::new(SourceLayout::FreeText);
        manifest.flight = title[1].to_uppercase();
        manifest.date = title[2].to_uppercase();

        let mut consumed = 0;
        for line in lines[i + 1..].iter().take(LOOKAHEAD_LINES) {
            if patterns.title.is_match(line) {
                break;
            }
            consumed += 1;

            if let Some(data) = patterns.data.captures(line) {
                let awb = data[1].trim().to_string();
                if !plausible_awb(&awb) {
                    continue;
                }
                if manifest.destination.is_empty() {
                    manifest.destination = accept_destination(&data[6]);
                }
                manifest.shipments.push(ShipmentRecord {
                    awb,
                    pieces: data[2].to_string(),
                    weight: data[5].to_string(),
                    description: data[3].trim().to_string(),
                    reason: String::new(),
                    uld: String::new(),
                });
            } else if let Some(reason) = patterns.reason.captures(line) {
                // Back-fill onto everything collected so far; a reason
                // set earlier is never overwritten.
                let reason = reason[1].trim().to_string();
                for shipment in manifest
                    .shipments
                    .iter_mut()
                    .filter(|s| s.reason.is_empty())
                {
                    shipment.reason = reason.clone();
                }
            }
        }

        if manifest.has_content() {
            manifests.push(manifest);
        }
        i += 1 + consumed;
    }

    manifests
}
