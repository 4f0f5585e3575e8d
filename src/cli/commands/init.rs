use crate::cli::input;
use crate::cli::repl::Outcome;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::store::state::StateRecord;
use crate::ui::messages;

/// Handle the `initialize` command
///
/// This resets:
///  - every preference and identity field to its default
///  - both hour counters
///  - the log file (truncated, fresh identification banner)
///
/// Declining the confirmation exits without writing anything; a
/// completed initialization also exits, asking for a restart.
pub fn handle(session: &mut Session) -> AppResult<Outcome> {
    let confirmed = input::confirm(
        "WARNING: this resets all preferences and erases all hour tracking information. Continue?",
    )?;
    if !confirmed {
        messages::info("Initialization cancelled.");
        return Ok(Outcome::Quit);
    }

    println!(
        "\nYou may press RETURN to skip any of the following questions. Everything entered stays in files local to the data directory.\n"
    );

    let username = input::read_line("Enter your name: ")?.unwrap_or_default();
    let email = input::read_line("Enter your email: ")?.unwrap_or_default();
    let client_id = input::read_line(
        "Add a client id if you want to track time for a specific client: ",
    )?
    .unwrap_or_default();
    let initial_hours = input::read_hours_or_skip(
        "Enter a total number of hours to count down from, i.e. '40' for a work week: ",
    )?;

    let mut state = StateRecord {
        username,
        email,
        ..Default::default()
    };
    // A client id gets its own log file, so per-client logs survive
    // re-initialization for a different client.
    if !client_id.is_empty() {
        state.log_file_path = format!("tl_log_{}.txt", client_id);
        state.client_id = client_id;
    }
    if let Some(hours) = initial_hours {
        state.remaining_hours = hours;
        state.display_remaining_hours = true;
    }

    session.reinitialize(state)?;

    println!("📄 Data file: {}", session.state.data_file_path);
    println!("🗒️  Log file : {}", session.state.log_file_path);
    messages::success("Initialization successful. Please restart tasklog.");
    Ok(Outcome::Quit)
}
