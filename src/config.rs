// src/config.rs

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use crate::errors::MonitorError;

const DEFAULT_STATE_DB: &str = "offload_state.sqlite3";
const DEFAULT_OUT_DIR: &str = "reports";

/// Everything a run needs, built once here and passed down. The core
/// never reads ambient state: the reference time and the store both
/// travel as explicit values.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Notification document; `None` reads stdin.
    pub input: Option<PathBuf>,
    /// Original mail subject, used to back-fill blank header fields.
    pub subject: Option<String>,
    pub state_db: PathBuf,
    pub out_dir: PathBuf,
    /// Reference instant for shift bucketing and date-year resolution.
    /// Overridable to reproduce a past run byte-for-byte.
    pub now: NaiveDateTime,
}

impl MonitorConfig {
    pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Self, MonitorError> {
        let mut config = MonitorConfig {
            input: None,
            subject: None,
            state_db: PathBuf::from(DEFAULT_STATE_DB),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            now: Local::now().naive_local(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--subject" => config.subject = Some(required(&mut args, "--subject")?),
                "--db" => config.state_db = PathBuf::from(required(&mut args, "--db")?),
                "--out" => config.out_dir = PathBuf::from(required(&mut args, "--out")?),
                "--now" => {
                    let raw = required(&mut args, "--now")?;
                    config.now = parse_now(&raw)?;
                }
                "-" => config.input = None,
                other if other.starts_with("--") => {
                    return Err(MonitorError::Config(format!("unknown flag {other}")));
                }
                path => config.input = Some(PathBuf::from(path)),
            }
        }

        Ok(config)
    }
}

fn required<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, MonitorError> {
    args.next()
        .ok_or_else(|| MonitorError::Config(format!("{flag} needs a value")))
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, MonitorError> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    Err(MonitorError::Config(format!(
        "cannot parse --now value '{raw}' (expected e.g. 2026-08-23T14:30)"
    )))
}
