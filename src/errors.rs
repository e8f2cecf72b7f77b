// errors.rs
use std::fmt;

/// Errors originating at the I/O boundary (configuration, input files,
/// state store). Parsing never produces one of these: a layout that does
/// not match simply yields an empty result.
#[derive(Debug)]
pub enum MonitorError {
    Config(String),
    Io(String),
    Db(String),
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Config(msg) => write!(f, "Configuration error: {msg}"),
            MonitorError::Io(msg) => write!(f, "I/O error: {msg}"),
            MonitorError::Db(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl std::error::Error for MonitorError {}
