use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `toggle-tracked` command.
pub fn toggle_total(session: &mut Session) -> AppResult<()> {
    let shown = session.toggle_total_display()?;
    messages::info(format!("Display total hours set to {}", shown));
    Ok(())
}

/// Handle the `toggle-remaining` command.
pub fn toggle_remaining(session: &mut Session) -> AppResult<()> {
    let shown = session.toggle_remaining_display()?;
    messages::info(format!("Display remaining hours set to {}", shown));
    Ok(())
}
