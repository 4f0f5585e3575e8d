//! Append-only work log. Every logged task is one fixed-format entry
//! block; the format is byte-stable so the edit-last and daily-summary
//! operations can reparse it:
//!
//! ```text
//! <blank line>
//! Date: 2026-02-12 10:41:07
//! Description: WRITE QUARTERLY REPORT
//! Time logged: 2.50 hours
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::entry::{LogEntry, Unit};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn date_line_re() -> Regex {
    Regex::new(r"^Date: (\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})$").unwrap()
}

fn description_line_re() -> Regex {
    Regex::new(r"^Description: (.*)$").unwrap()
}

fn duration_line_re() -> Regex {
    Regex::new(r"^Time logged: (\d+(?:\.\d+)?) (minutes|hours)$").unwrap()
}

/// A parsed entry block plus the file line its duration sits on, so the
/// edit-last operation can rewrite that single line in place.
struct Block {
    duration_line: usize,
    entry: LogEntry,
}

pub struct LogBook {
    path: PathBuf,
}

impl LogBook {
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry block, creating the file if absent.
    pub fn append_entry(
        &self,
        description: &str,
        duration: f64,
        unit: Unit,
        timestamp: NaiveDateTime,
    ) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(
            file,
            "\nDate: {}\nDescription: {}\nTime logged: {:.2} {}\n",
            timestamp.format(TIMESTAMP_FORMAT),
            description.to_uppercase(),
            duration,
            unit
        )?;
        Ok(())
    }

    /// Truncate the log and write the identification banner. The banner
    /// lines never match an entry block, so the parsers skip them.
    pub fn write_header(&self, username: &str, email: &str, client_id: &str) -> AppResult<()> {
        let mut out = format!("TASKLOG v{}\nTime log\n", env!("CARGO_PKG_VERSION"));
        if !username.is_empty() {
            out.push_str(&format!("User: {}\n", username));
        }
        if !email.is_empty() {
            out.push_str(&format!("Email: {}\n", email));
        }
        if client_id != "N/A" && !client_id.is_empty() {
            out.push_str(&format!("Client: {}\n", client_id));
        }
        fs::write(&self.path, out)?;
        Ok(())
    }

    fn read_lines(&self) -> AppResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Scan for complete Date/Description/Time-logged triplets, in file
    /// order. Anything else (banner lines, torn blocks) is skipped.
    fn blocks(lines: &[String]) -> Vec<Block> {
        let date_re = date_line_re();
        let desc_re = description_line_re();
        let dur_re = duration_line_re();

        let mut out = Vec::new();
        for i in 0..lines.len() {
            let Some(date_caps) = date_re.captures(&lines[i]) else {
                continue;
            };
            if i + 2 >= lines.len() {
                continue;
            }
            let Some(desc_caps) = desc_re.captures(&lines[i + 1]) else {
                continue;
            };
            let Some(dur_caps) = dur_re.captures(&lines[i + 2]) else {
                continue;
            };

            let Ok(timestamp) = NaiveDateTime::parse_from_str(&date_caps[1], TIMESTAMP_FORMAT)
            else {
                continue;
            };
            let Ok(duration) = dur_caps[1].parse::<f64>() else {
                continue;
            };
            let Ok(unit) = dur_caps[2].parse::<Unit>() else {
                continue;
            };

            out.push(Block {
                duration_line: i + 2,
                entry: LogEntry {
                    timestamp,
                    description: desc_caps[1].to_string(),
                    duration,
                    unit,
                },
            });
        }
        out
    }

    /// The most recently appended complete entry, if any.
    pub fn read_last_entry(&self) -> AppResult<Option<LogEntry>> {
        let lines = self.read_lines()?;
        Ok(Self::blocks(&lines).pop().map(|b| b.entry))
    }

    /// All entries whose timestamp falls on `date`, oldest first.
    pub fn entries_for_date(&self, date: NaiveDate) -> AppResult<Vec<LogEntry>> {
        let lines = self.read_lines()?;
        Ok(Self::blocks(&lines)
            .into_iter()
            .map(|b| b.entry)
            .filter(|e| e.timestamp.date() == date)
            .collect())
    }

    /// Replace only the duration line of the final entry block. The new
    /// duration is expressed in hours, matching the edit prompt.
    pub fn rewrite_last_duration(&self, new_hours: f64) -> AppResult<()> {
        let mut lines = self.read_lines()?;
        let Some(block) = Self::blocks(&lines).pop() else {
            return Err(AppError::MalformedLog(
                "the log has no complete entry to rewrite".to_string(),
            ));
        };
        lines[block.duration_line] = format!("Time logged: {:.2} hours", new_hours);

        let mut content = lines.join("\n");
        content.push('\n');
        let tmp = self.path.with_extension("txt.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
