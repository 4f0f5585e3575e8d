//! State record persistence: one JSON document holding identity fields,
//! the hour counters and the crash-recovery session fields.

use crate::errors::AppResult;
use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILE: &str = "tl_data.json";
pub const DEFAULT_LOG_FILE: &str = "tl_log.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateRecord {
    pub client_id: String,
    pub username: String,
    pub email: String,
    pub remaining_hours: f64,
    pub tracked_hours: f64,
    /// Epoch seconds of the last persisted task start; -1 means "none".
    pub saved_start_time: f64,
    /// True iff a task was started and never logged/closed. Drives the
    /// recovery prompt on the next launch.
    pub unterminated_task: bool,
    pub log_file_path: String,
    pub data_file_path: String,
    pub display_total_hours: bool,
    pub display_remaining_hours: bool,
}

impl Default for StateRecord {
    fn default() -> Self {
        Self {
            client_id: "N/A".to_string(),
            username: String::new(),
            email: String::new(),
            remaining_hours: 0.0,
            tracked_hours: 0.0,
            saved_start_time: -1.0,
            unterminated_task: false,
            log_file_path: DEFAULT_LOG_FILE.to_string(),
            data_file_path: DATA_FILE.to_string(),
            display_total_hours: true,
            display_remaining_hours: false,
        }
    }
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(DATA_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state record, falling back to defaults when the file is
    /// missing or unusable. This is the documented recovery policy, not
    /// error suppression: an existing-but-malformed file is reported.
    pub fn load(&self) -> StateRecord {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => state,
                Err(e) => {
                    messages::warning(format!(
                        "Data file {} is malformed ({}); starting from defaults.",
                        self.path.display(),
                        e
                    ));
                    StateRecord::default()
                }
            },
            Err(_) => StateRecord::default(),
        }
    }

    /// Persist the full record. The JSON goes to a temporary file in the
    /// same directory and is renamed over the target, so no partial-write
    /// state is ever observable in the data file.
    pub fn save(&self, state: &StateRecord) -> AppResult<()> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
