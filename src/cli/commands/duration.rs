use crate::core::session::Session;
use crate::ui::messages;
use crate::utils::time::now_epoch;

/// Handle the `show-current-duration` command.
pub fn handle(session: &Session) {
    match session.current_duration(now_epoch()) {
        Some((duration, unit)) => {
            println!("Current task duration: {:.2} {}", duration, unit)
        }
        None => messages::warning("No task is currently running."),
    }
}
