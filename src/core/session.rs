//! Task-session lifecycle: the Idle/Running state machine, crash
//! recovery from the persisted start time, and the counter updates
//! performed when a task is logged.
//!
//! Transitions take the current wall clock as a parameter; only the
//! entry timestamp written to the log uses the ambient clock.

use crate::errors::AppResult;
use crate::models::entry::Unit;
use crate::store::log::LogBook;
use crate::store::state::{StateRecord, StateStore};
use crate::utils::time::{hour_equivalent, round2, split_duration};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Snapshot handed back after a task is logged, used for console output.
pub struct LoggedTask {
    pub description: String,
    pub duration: f64,
    pub unit: Unit,
    pub tracked_hours: f64,
    pub remaining_hours: f64,
}

/// Owned context threaded through the interpreter: the state record, the
/// two stores bound to the resolved data directory, and the in-memory
/// fields of the running task.
pub struct Session {
    pub state: StateRecord,
    dir: PathBuf,
    store: StateStore,
    log: LogBook,
    start_time: f64,
    current_task: String,
}

impl Session {
    /// Bind the stores to `dir` and load the state record (defaults when
    /// the data file is missing or unusable).
    pub fn open(dir: &Path) -> Self {
        let store = StateStore::new(dir);
        let state = store.load();
        let log = LogBook::new(dir, &state.log_file_path);
        Self {
            state,
            dir: dir.to_path_buf(),
            store,
            log,
            start_time: 0.0,
            current_task: String::new(),
        }
    }

    pub fn log_book(&self) -> &LogBook {
        &self.log
    }

    pub fn current_task(&self) -> &str {
        &self.current_task
    }

    /// Description skipped at the prompt becomes the "N/A" sentinel.
    pub fn set_current_task(&mut self, description: String) {
        self.current_task = if description.is_empty() {
            "N/A".to_string()
        } else {
            description
        };
    }

    /// Enter Running. With `resume` the elapsed time continues from the
    /// persisted start of the unterminated task; otherwise the task
    /// starts at `now`. Persists immediately: a crash right after this
    /// call must still allow recovery on the next launch.
    pub fn begin(&mut self, now: f64, resume: bool) -> AppResult<()> {
        self.start_time = if resume && self.state.saved_start_time > 0.0 {
            self.state.saved_start_time
        } else {
            now
        };
        self.state.saved_start_time = self.start_time;
        self.state.unterminated_task = true;
        self.store.save(&self.state)
    }

    /// Log the running task: append the entry, update both counters,
    /// return to Idle and persist. The caller immediately begins the
    /// next task; the tool is only fully stopped by explicit quit.
    pub fn log(&mut self, now: f64) -> AppResult<LoggedTask> {
        let (duration, unit) = split_duration(now - self.start_time);
        let hours = hour_equivalent(duration, unit);

        self.state.tracked_hours += hours;
        self.state.remaining_hours = (self.state.remaining_hours - hours).max(0.0);

        self.log
            .append_entry(&self.current_task, duration, unit, Local::now().naive_local())?;
        self.state.unterminated_task = false;
        self.store.save(&self.state)?;

        Ok(LoggedTask {
            description: self.current_task.to_uppercase(),
            duration,
            unit,
            tracked_hours: round2(self.state.tracked_hours),
            remaining_hours: round2(self.state.remaining_hours),
        })
    }

    /// Explicit quit: close the task flag and persist. The process exits
    /// with success status afterwards.
    pub fn finish(&mut self) -> AppResult<()> {
        self.state.unterminated_task = false;
        self.store.save(&self.state)
    }

    /// Elapsed duration of the running task; None while Idle.
    pub fn current_duration(&self, now: f64) -> Option<(f64, Unit)> {
        if self.start_time <= 0.0 {
            return None;
        }
        Some(split_duration(now - self.start_time))
    }

    pub fn update_remaining(&mut self, hours: f64) -> AppResult<()> {
        self.state.remaining_hours = hours.max(0.0);
        self.store.save(&self.state)
    }

    pub fn toggle_total_display(&mut self) -> AppResult<bool> {
        self.state.display_total_hours = !self.state.display_total_hours;
        self.store.save(&self.state)?;
        Ok(self.state.display_total_hours)
    }

    pub fn toggle_remaining_display(&mut self) -> AppResult<bool> {
        self.state.display_remaining_hours = !self.state.display_remaining_hours;
        self.store.save(&self.state)?;
        Ok(self.state.display_remaining_hours)
    }

    /// Replace the whole state with a freshly initialized record, persist
    /// it and start a new log file with the identification banner.
    pub fn reinitialize(&mut self, state: StateRecord) -> AppResult<()> {
        self.store.save(&state)?;
        let log = LogBook::new(&self.dir, &state.log_file_path);
        log.write_header(&state.username, &state.email, &state.client_id)?;
        self.state = state;
        self.log = log;
        self.start_time = 0.0;
        self.current_task.clear();
        Ok(())
    }
}
