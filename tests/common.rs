#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tl() -> Command {
    cargo_bin_cmd!("tasklog")
}

/// Create a unique test data directory inside the system temp dir and
/// reset any leftovers from a previous run
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tasklog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Read the persisted state record as loose JSON
pub fn read_state(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(dir.join("tl_data.json")).expect("read data file");
    serde_json::from_str(&content).expect("parse data file")
}

/// Seed the data file before launching the binary. Missing fields are
/// filled with defaults on load, so tests only list what they care about.
pub fn write_state(dir: &Path, state: &serde_json::Value) {
    fs::write(
        dir.join("tl_data.json"),
        serde_json::to_string_pretty(state).expect("serialize state"),
    )
    .expect("write data file");
}

pub fn read_log(dir: &Path) -> String {
    fs::read_to_string(dir.join("tl_log.txt")).unwrap_or_default()
}

/// Seed the default log file with raw content in the entry-block format
pub fn write_log(dir: &Path, content: &str) {
    fs::write(dir.join("tl_log.txt"), content).expect("write log file");
}

/// Epoch seconds, same resolution the binary uses
pub fn now_epoch() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
