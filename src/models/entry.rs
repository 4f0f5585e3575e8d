use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Unit a logged duration is expressed in. Durations under the
/// 60-minute boundary are written in minutes, everything else in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Minutes,
    Hours,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minutes" => Ok(Unit::Minutes),
            "hours" => Ok(Unit::Hours),
            other => Err(format!("unknown duration unit '{}'", other)),
        }
    }
}

/// One logged task as it appears in the work log, a single entry block.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime, // ⇔ "Date: YYYY-MM-DD HH:MM:SS" line
    pub description: String,      // ⇔ "Description: ..." line (upper-cased)
    pub duration: f64,            // ⇔ "Time logged: <value> <unit>" line
    pub unit: Unit,
}

impl LogEntry {
    /// Hour-equivalent of the entry, used when summing durations.
    pub fn hours(&self) -> f64 {
        crate::utils::time::hour_equivalent(self.duration, self.unit)
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }
}
