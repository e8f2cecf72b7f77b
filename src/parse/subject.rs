// src/parse/subject.rs
//
// Mail subjects repeat the flight header ("OFFLOADED CGO ON WY681 /
// 18NOV23 MCT-RUH") and are sometimes the only place a field survives
// a mangled body, so they can back-fill blanks on parsed manifests.

use regex::Regex;

use crate::domain::FlightManifest;
use crate::parse::accept_destination;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SubjectHeader {
    pub flight: String,
    pub date: String,
    pub destination: String,
}

/// Mine a subject line for flight number, date token and destination.
/// Missing pieces stay blank.
pub fn header_from_subject(subject: &str) -> SubjectHeader {
    let upper = subject.to_uppercase();
    let mut header = SubjectHeader::default();

    if let Ok(re) = Regex::new(r"\b(?:WY|EK|QR|EY|SV|MS|TK|AI|SQ)\d{2,4}\b") {
        if let Some(m) = re.find(&upper) {
            header.flight = m.as_str().to_string();
        }
    }
    if let Ok(re) = Regex::new(r"\b(\d{1,2}[A-Z]{3}\d{0,4})\b") {
        if let Some(c) = re.captures(&upper) {
            header.date = c[1].to_string();
        }
    }
    // Route suffix: the leg after the dash ("MCT-RUH") is the
    // destination, provided it is not a header word.
    if let Ok(re) = Regex::new(r"-([A-Z]{3})\b") {
        if let Some(c) = re.captures(&upper) {
            header.destination = accept_destination(&c[1]);
        }
    }

    header
}

/// Fill blank header fields on parsed manifests from the subject.
/// Values extracted from the body always win.
pub fn backfill(manifests: &mut [FlightManifest], header: &SubjectHeader) {
    for manifest in manifests {
        if manifest.flight.trim().is_empty() {
            manifest.flight = header.flight.clone();
        }
        if manifest.date.trim().is_empty() {
            manifest.date = header.date.clone();
        }
        if manifest.destination.trim().is_empty() {
            manifest.destination = header.destination.clone();
        }
    }
}
