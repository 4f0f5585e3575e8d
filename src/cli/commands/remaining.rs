use crate::cli::input;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `show-remaining` command.
pub fn show(session: &Session) {
    println!(
        "Total hours remaining: {:.2}",
        session.state.remaining_hours
    );
}

/// Handle the `update-remaining` command. Confirmation-gated: any answer
/// other than an affirmative one leaves the stored value untouched.
pub fn update(session: &mut Session) -> AppResult<()> {
    let Some(new_hours) = input::read_hours("Please enter a new number for remaining hours: ")?
    else {
        return Ok(());
    };

    if input::confirm("Save?")? {
        session.update_remaining(new_hours)?;
        messages::success("Remaining hours updated.");
    } else {
        messages::info("Update canceled.");
    }
    Ok(())
}
