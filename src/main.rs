use std::fs;
use std::io::Read;

use crate::config::MonitorConfig;
use crate::db::{Database, SqliteStateStore};
use crate::domain::ChangeClass;
use crate::errors::MonitorError;
use crate::parse::subject::{backfill, header_from_subject};

mod config;
mod db;
mod domain;
mod errors;
mod keying;
mod normalize;
mod parse;
mod pipeline;
mod shift;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = match MonitorConfig::from_args(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ {e}");
            eprintln!("usage: offload_monitor [FILE|-] [--subject S] [--db PATH] [--out DIR] [--now 2026-08-23T14:30]");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run(config: &MonitorConfig) -> Result<(), MonitorError> {
    let raw = read_input(config)?;

    let db = Database::new(config.state_db.to_string_lossy());
    db.init()?;
    let mut store = SqliteStateStore::new(db);

    let mut manifests = parse::extract_manifests(&raw);
    if let Some(subject) = &config.subject {
        backfill(&mut manifests, &header_from_subject(subject));
    }

    if manifests.is_empty() {
        println!("📭 No offload data found in input — nothing to do.");
        return Ok(());
    }

    let outcomes = pipeline::process(manifests, config.now, &mut store)?;

    fs::create_dir_all(&config.out_dir)
        .map_err(|e| MonitorError::Io(format!("create {}: {e}", config.out_dir.display())))?;

    for outcome in &outcomes {
        let manifest = &outcome.manifest;
        println!(
            "✈️  {} → {} | {} shipment(s) | [{}] {} | {}",
            dash(&manifest.flight),
            dash(&manifest.destination),
            manifest.shipments.len(),
            outcome.shift.id(),
            outcome.shift.label(),
            outcome.change.label(),
        );

        // Unchanged re-sends already have a report on disk.
        if outcome.change == ChangeClass::Unchanged {
            continue;
        }

        let path = config.out_dir.join(format!("{}.html", outcome.key));
        let report = templates::offload_report(outcome, config.now);
        fs::write(&path, report.into_string())
            .map_err(|e| MonitorError::Io(format!("write {}: {e}", path.display())))?;
        println!("   📝 report written to {}", path.display());
    }

    Ok(())
}

fn read_input(config: &MonitorConfig) -> Result<String, MonitorError> {
    match &config.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| MonitorError::Io(format!("read {}: {e}", path.display()))),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| MonitorError::Io(format!("read stdin: {e}")))?;
            Ok(buf)
        }
    }
}

fn dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
