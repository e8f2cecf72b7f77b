// src/shift.rs
//
// Buckets a timestamp into one of the three fixed operational windows.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

const SHIFT1_START_MIN: u32 = 6 * 60; // 06:00
const SHIFT2_START_MIN: u32 = 14 * 60 + 30; // 14:30
const SHIFT3_START_MIN: u32 = 21 * 60; // 21:00

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shift {
    First,
    Second,
    Third,
}

impl Shift {
    pub fn id(self) -> &'static str {
        match self {
            Shift::First => "S1",
            Shift::Second => "S2",
            Shift::Third => "S3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Shift::First => "Shift 1 (06:00 - 14:30)",
            Shift::Second => "Shift 2 (14:30 - 21:00)",
            Shift::Third => "Shift 3 (21:00 - 06:00)",
        }
    }
}

/// Resolve a local time to its shift.
///
/// The night window wraps past midnight, so its two-sided test has to
/// run first: a sequential low..high scan would misplace times between
/// 00:00 and 06:00. Anything the remaining tests leave over (possible
/// only if the boundary constants drift apart) lands in Shift 1.
pub fn resolve_shift(time: NaiveTime) -> Shift {
    let minutes = time.hour() * 60 + time.minute();

    if minutes >= SHIFT3_START_MIN || minutes < SHIFT1_START_MIN {
        return Shift::Third;
    }
    if minutes >= SHIFT2_START_MIN {
        return Shift::Second;
    }
    Shift::First
}
