use crate::cli::input;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `edit-last-entry` command: rewrite the duration line of
/// the most recently appended entry block, confirmation-gated. Log file
/// problems are reported and leave the log untouched; they never end
/// the session.
pub fn handle(session: &mut Session) -> AppResult<()> {
    let last = match session.log_book().read_last_entry() {
        Ok(Some(entry)) => entry,
        Ok(None) => {
            messages::warning("No entries to edit.");
            return Ok(());
        }
        Err(e) => {
            messages::error(e);
            return Ok(());
        }
    };

    println!(
        "Last entry: {} - {:.2} {}",
        last.description, last.duration, last.unit
    );

    let Some(new_duration) = input::read_hours("Enter new duration in hours: ")? else {
        return Ok(());
    };

    if input::confirm("Save changes?")? {
        match session.log_book().rewrite_last_duration(new_duration) {
            Ok(()) => messages::success("Entry updated."),
            Err(e) => messages::error(e),
        }
    } else {
        messages::info("Edit canceled.");
    }
    Ok(())
}
