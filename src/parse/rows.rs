// src/parse/rows.rs
//
// Turns raw notification text into row/cell structure the layout
// parsers share. Sources are either HTML mail bodies (real <table>
// markup) or plain text where columns are separated by runs of spaces.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// One row of a document as trimmed cell strings.
pub type Row = Vec<String>;

/// Extract row/cell structure from a document. HTML input yields the
/// cells of every `<tr>`; plain text yields each line split on runs of
/// two or more spaces (single spaces stay inside a cell).
pub fn document_rows(text: &str) -> Vec<Row> {
    if has_table_markup(text) {
        html_rows(text)
    } else {
        text_rows(text)
    }
}

/// Markup-stripped visible text lines, for the free-text layout. Script
/// and style bodies are removed, block-level closers become line breaks.
pub fn visible_lines(text: &str) -> Vec<String> {
    let plain = if text.contains('<') && text.contains('>') {
        strip_markup(text)
    } else {
        text.to_string()
    };
    plain
        .lines()
        .map(|l| l.trim_end().to_string())
        .filter(|l| !l.trim().is_empty())
        .collect()
}

fn has_table_markup(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("<table") || lower.contains("<tr")
}

fn html_rows(text: &str) -> Vec<Row> {
    let document = Html::parse_document(text);
    let (row_sel, cell_sel) = match (Selector::parse("tr"), Selector::parse("th, td")) {
        (Ok(r), Ok(c)) => (r, c),
        _ => return Vec::new(),
    };

    document
        .select(&row_sel)
        .map(|row| row.select(&cell_sel).map(|c| cell_text(&c)).collect())
        .filter(|r: &Row| !r.is_empty())
        .collect()
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn text_rows(text: &str) -> Vec<Row> {
    let separator = match Regex::new(r"\t+| {2,}") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    text.lines()
        .map(|line| {
            separator
                .split(line.trim())
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect()
        })
        .filter(|r: &Row| !r.is_empty())
        .collect()
}

fn strip_markup(text: &str) -> String {
    let mut out = text.to_string();

    // Drop script/style bodies wholesale, then force line structure at
    // block boundaries before removing the remaining tags.
    for pattern in [
        r"(?is)<script[^>]*>.*?</script>",
        r"(?is)<style[^>]*>.*?</style>",
    ] {
        if let Ok(re) = Regex::new(pattern) {
            out = re.replace_all(&out, "").into_owned();
        }
    }
    if let Ok(re) = Regex::new(r"(?i)<br\s*/?>|</(?:tr|p|div|li|h[1-6]|table)>") {
        out = re.replace_all(&out, "\n").into_owned();
    }
    if let Ok(re) = Regex::new(r"(?s)<[^>]+>") {
        out = re.replace_all(&out, "").into_owned();
    }

    out.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
