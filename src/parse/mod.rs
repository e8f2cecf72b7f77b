pub mod columnar;
pub mod freetext;
pub mod horizontal;
pub mod rows;
pub mod select;
pub mod subject;

pub use select::extract_manifests;

/// Table-header words that can never be real field values. Used to tell
/// a horizontal label row ("FLIGHT WY223 ...") apart from a columnar
/// title row ("ITEM DATE FLIGHT DEST ..."), and to drop header echoes
/// that slip into data rows.
pub(crate) const HEADER_TOKENS: &[&str] = &[
    "ITEM",
    "AWB",
    "PCS",
    "KGS",
    "CMS",
    "ULD",
    "DESC",
    "DESCRIPTION",
    "REASON",
    "FLIGHT",
    "DATE",
    "DEST",
    "DESTINATION",
    "STD/ETD",
    "STD/ATD",
    "TOTAL",
];

/// Three-letter tokens that look like destination codes but are column
/// titles in every known layout.
pub(crate) const DEST_DENYLIST: &[&str] = &["AWB", "PCS", "KGS", "ULD", "CMS"];

/// Prefixes of trolley / unit-load-device identifiers ("AKE12345WY").
pub(crate) const ULD_PREFIXES: &[&str] = &["AKE", "AKH", "PAG", "PLA", "PMC", "RKN", "ULD"];

pub(crate) fn is_header_token(value: &str) -> bool {
    let v = value.trim().to_uppercase();
    HEADER_TOKENS.iter().any(|t| *t == v)
}

/// Accept a destination value only if it is a 3-letter code and not a
/// denylisted column title; otherwise the manifest keeps a blank.
pub(crate) fn accept_destination(value: &str) -> String {
    let v = value.trim().to_uppercase();
    if v.len() == 3
        && v.chars().all(|c| c.is_ascii_alphabetic())
        && !DEST_DENYLIST.contains(&v.as_str())
    {
        v
    } else {
        String::new()
    }
}

/// A waybill value is plausible when it has at least one alphanumeric
/// character and is not a bare 1-2 digit row index.
pub(crate) fn plausible_awb(raw: &str) -> bool {
    let t = raw.trim();
    if t.is_empty() || !t.chars().any(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    if t.len() <= 2 && t.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    !is_header_token(t)
}

/// Does a lone cell value look like a trolley / ULD identifier?
pub(crate) fn uld_token(value: &str) -> bool {
    let v = value.trim().to_uppercase();
    !v.is_empty() && ULD_PREFIXES.iter().any(|p| v.starts_with(p))
}
