use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;

mod common;
use common::{now_epoch, read_log, read_state, setup_test_dir, tl, write_log, write_state};

#[test]
fn test_quit_persists_closed_state() {
    let dir = setup_test_dir("quit_persists");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("first task\nquit\n")
        .assert()
        .success()
        .stdout(contains("tasklog stopped."));

    let state = read_state(&dir);
    assert_eq!(state["unterminated_task"], json!(false));
    assert!(state["saved_start_time"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_empty_line_logs_task_and_starts_next() {
    let dir = setup_test_dir("empty_line_logs");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("write docs\n\nnext task\nquit\n")
        .assert()
        .success()
        .stdout(contains("WRITE DOCS"))
        .stdout(contains("minutes"))
        .stdout(contains("Tracking new task."));

    let log = read_log(&dir);
    assert!(log.contains("Description: WRITE DOCS"));
    assert!(log.contains("minutes"));

    let state = read_state(&dir);
    assert_eq!(state["unterminated_task"], json!(false));
}

#[test]
fn test_unknown_command_prints_diagnostic_and_reprompts() {
    let dir = setup_test_dir("unknown_command");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nfoobar\nquit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command 'foobar'"))
        .stdout(contains("tasklog stopped."));
}

#[test]
fn test_help_lists_commands() {
    let dir = setup_test_dir("help_lists");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nhelp\nquit\n")
        .assert()
        .success()
        .stdout(contains("show-remaining"))
        .stdout(contains("edit-last-entry"))
        .stdout(contains("daily-summary"))
        .stdout(contains("toggle-remaining"));
}

#[test]
fn test_show_counters_from_seeded_state() {
    let dir = setup_test_dir("show_counters");
    write_state(
        &dir,
        &json!({ "remaining_hours": 12.5, "tracked_hours": 3.25 }),
    );

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nshow-remaining\nshow-tracked\nquit\n")
        .assert()
        .success()
        .stdout(contains("Total hours remaining: 12.50"))
        .stdout(contains("Total hours tracked: 3.25"));
}

#[test]
fn test_commands_match_case_insensitively() {
    let dir = setup_test_dir("case_insensitive");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nSHOW-TRACKED\nQuit\n")
        .assert()
        .success()
        .stdout(contains("Total hours tracked:"))
        .stdout(contains("tasklog stopped."));
}

#[test]
fn test_update_remaining_confirmed() {
    let dir = setup_test_dir("update_remaining_yes");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nupdate-remaining\n20\ny\nquit\n")
        .assert()
        .success()
        .stdout(contains("Remaining hours updated."));

    let state = read_state(&dir);
    assert!((state["remaining_hours"].as_f64().unwrap() - 20.0).abs() < 1e-9);
}

#[test]
fn test_update_remaining_declined_leaves_value() {
    let dir = setup_test_dir("update_remaining_no");
    write_state(&dir, &json!({ "remaining_hours": 5.0 }));

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nupdate-remaining\n20\nn\nquit\n")
        .assert()
        .success()
        .stdout(contains("Update canceled."));

    let state = read_state(&dir);
    assert!((state["remaining_hours"].as_f64().unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn test_update_remaining_reprompts_until_valid() {
    let dir = setup_test_dir("update_remaining_invalid");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nupdate-remaining\nabc\n-5\n20\ny\nquit\n")
        .assert()
        .success()
        .stdout(contains("Please enter a valid non-negative number."));

    let state = read_state(&dir);
    assert!((state["remaining_hours"].as_f64().unwrap() - 20.0).abs() < 1e-9);
}

#[test]
fn test_show_current_duration_while_running() {
    let dir = setup_test_dir("current_duration");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nshow-current-duration\nquit\n")
        .assert()
        .success()
        .stdout(contains("Current task duration:"));
}

#[test]
fn test_recovery_resume_uses_saved_start_time() {
    let dir = setup_test_dir("recovery_resume");
    // A task started two hours ago by a session that never closed it.
    write_state(
        &dir,
        &json!({
            "unterminated_task": true,
            "saved_start_time": now_epoch() - 7200.0,
        }),
    );

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("y\nrecovered work\n\nnext\nquit\n")
        .assert()
        .success()
        .stdout(contains("An unterminated task has been detected"))
        .stdout(contains("hours"));

    let log = read_log(&dir);
    assert!(log.contains("Description: RECOVERED WORK"));
    assert!(log.contains("hours"));

    // Elapsed time continued from the pre-crash start, about two hours.
    let tracked = read_state(&dir)["tracked_hours"].as_f64().unwrap();
    assert!((tracked - 2.0).abs() < 0.05, "tracked = {}", tracked);
}

#[test]
fn test_recovery_declined_starts_fresh() {
    let dir = setup_test_dir("recovery_declined");
    write_state(
        &dir,
        &json!({
            "unterminated_task": true,
            "saved_start_time": now_epoch() - 7200.0,
        }),
    );

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("n\nfresh work\n\nnext\nquit\n")
        .assert()
        .success()
        .stdout(contains("Using right now as the task start time."));

    // Fresh start: the two stale hours are gone.
    let tracked = read_state(&dir)["tracked_hours"].as_f64().unwrap();
    assert!(tracked < 0.1, "tracked = {}", tracked);
}

#[test]
fn test_closed_stdin_behaves_like_a_crash() {
    let dir = setup_test_dir("closed_stdin");

    // Input ends right after the task starts; no quit, no log.
    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("interrupted task\n")
        .assert()
        .success();

    let state = read_state(&dir);
    assert_eq!(state["unterminated_task"], serde_json::json!(true));
    let saved = state["saved_start_time"].as_f64().unwrap();
    assert!(saved > 0.0);

    // Next launch offers recovery and keeps the same start time.
    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("y\nresumed\nquit\n")
        .assert()
        .success()
        .stdout(contains("An unterminated task has been detected"));

    let resumed = read_state(&dir)["saved_start_time"].as_f64().unwrap();
    assert!((resumed - saved).abs() < 1e-6);
}

#[test]
fn test_edit_last_entry_confirmed() {
    let dir = setup_test_dir("edit_last_yes");
    write_log(
        &dir,
        "\nDate: 2026-08-08 09:00:00\nDescription: PREPARED TASK\nTime logged: 2.50 hours\n",
    );

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nedit-last-entry\n3.0\ny\nquit\n")
        .assert()
        .success()
        .stdout(contains("Last entry: PREPARED TASK - 2.50 hours"))
        .stdout(contains("Entry updated."));

    let log = read_log(&dir);
    assert!(log.contains("Time logged: 3.00 hours"));
    assert!(log.contains("Description: PREPARED TASK"));
    assert!(!log.contains("Time logged: 2.50 hours"));
}

#[test]
fn test_edit_last_entry_declined_leaves_log() {
    let dir = setup_test_dir("edit_last_no");
    write_log(
        &dir,
        "\nDate: 2026-08-08 09:00:00\nDescription: PREPARED TASK\nTime logged: 2.50 hours\n",
    );

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nedit-last-entry\n3.0\nn\nquit\n")
        .assert()
        .success()
        .stdout(contains("Edit canceled."));

    let log = read_log(&dir);
    assert!(log.contains("Time logged: 2.50 hours"));
}

#[test]
fn test_edit_last_entry_with_no_log() {
    let dir = setup_test_dir("edit_last_empty");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\nedit-last-entry\nquit\n")
        .assert()
        .success()
        .stdout(contains("No entries to edit."));
}

#[test]
fn test_daily_summary_filters_and_orders_by_date() {
    let dir = setup_test_dir("daily_summary");
    let today = chrono::Local::now().format("%Y-%m-%d");
    let log = format!(
        "\nDate: 2020-01-01 10:00:00\nDescription: ANCIENT WORK\nTime logged: 1.00 hours\n\
         \nDate: {today} 09:00:00\nDescription: FIRST\nTime logged: 30.00 minutes\n\
         \nDate: {today} 11:00:00\nDescription: SECOND\nTime logged: 1.50 hours\n\
         \nDate: {today} 14:00:00\nDescription: THIRD\nTime logged: 15.00 minutes\n"
    );
    write_log(&dir, &log);

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\ndaily-summary\nquit\n")
        .assert()
        .success()
        .stdout(contains("ANCIENT WORK").not())
        .stdout(
            predicates::str::is_match("(?s)FIRST.*SECOND.*THIRD").expect("Invalid regex"),
        )
        // 0.5 + 1.5 + 0.25 hour-equivalents
        .stdout(contains("Total time:"))
        .stdout(contains("2.25 hours"));
}

#[test]
fn test_daily_summary_without_entries() {
    let dir = setup_test_dir("daily_summary_empty");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\ndaily-summary\nquit\n")
        .assert()
        .success()
        .stdout(contains("No entries for today."));
}

#[test]
fn test_toggles_flip_and_persist() {
    let dir = setup_test_dir("toggles");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\ntoggle-tracked\ntoggle-remaining\nquit\n")
        .assert()
        .success()
        .stdout(contains("Display total hours set to false"))
        .stdout(contains("Display remaining hours set to true"));

    let state = read_state(&dir);
    assert_eq!(state["display_total_hours"], json!(false));
    assert_eq!(state["display_remaining_hours"], json!(true));
}

#[test]
fn test_initialize_confirmed_resets_everything() {
    let dir = setup_test_dir("initialize_yes");
    write_state(&dir, &json!({ "tracked_hours": 99.0 }));

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\ninitialize\ny\nAlice\nalice@example.com\nacme\n40\n")
        .assert()
        .success()
        .stdout(contains("Initialization successful."));

    let state = read_state(&dir);
    assert_eq!(state["username"], json!("Alice"));
    assert_eq!(state["email"], json!("alice@example.com"));
    assert_eq!(state["client_id"], json!("acme"));
    assert_eq!(state["log_file_path"], json!("tl_log_acme.txt"));
    assert!((state["remaining_hours"].as_f64().unwrap() - 40.0).abs() < 1e-9);
    assert!((state["tracked_hours"].as_f64().unwrap()).abs() < 1e-9);
    assert_eq!(state["display_remaining_hours"], json!(true));

    let log = std::fs::read_to_string(dir.join("tl_log_acme.txt")).expect("client log");
    assert!(log.contains("TASKLOG v"));
    assert!(log.contains("Client: acme"));
}

#[test]
fn test_initialize_declined_writes_nothing() {
    let dir = setup_test_dir("initialize_no");
    write_state(&dir, &json!({ "remaining_hours": 5.0, "tracked_hours": 2.0 }));

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("some task\ninitialize\nn\n")
        .assert()
        .success()
        .stdout(contains("Initialization cancelled."));

    // The seeded counters survive: nothing was reset or truncated.
    let state = read_state(&dir);
    assert!((state["remaining_hours"].as_f64().unwrap() - 5.0).abs() < 1e-9);
    assert!((state["tracked_hours"].as_f64().unwrap() - 2.0).abs() < 1e-9);
}

#[test]
fn test_splash_banner_identifies_user_and_client() {
    let dir = setup_test_dir("splash_banner");
    write_state(&dir, &json!({ "username": "Bob", "client_id": "initech" }));

    tl().args(["--dir", dir.to_str().unwrap()])
        .write_stdin("some task\nquit\n")
        .assert()
        .success()
        .stdout(contains("TASKLOG v"))
        .stdout(contains("User: Bob"))
        .stdout(contains("Client: initech"));
}

#[test]
fn test_description_prompt_takes_tokens_literally() {
    let dir = setup_test_dir("literal_description");

    // "help" at the description prompt is a description, not a command.
    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("help\n\nnext\nquit\n")
        .assert()
        .success()
        .stdout(contains("Tracking task: help"));

    let log = read_log(&dir);
    assert!(log.contains("Description: HELP"));
}

#[test]
fn test_skipped_description_becomes_sentinel() {
    let dir = setup_test_dir("sentinel_description");

    tl().args(["--dir", dir.to_str().unwrap(), "--test"])
        .write_stdin("\n\nnext\nquit\n")
        .assert()
        .success()
        .stdout(contains("Tracking task: N/A"));

    let log = read_log(&dir);
    assert!(log.contains("Description: N/A"));
}
