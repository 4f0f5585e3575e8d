use crate::core::session::Session;

/// Handle the `show-tracked` command.
pub fn handle(session: &Session) {
    println!("Total hours tracked: {:.2}", session.state.tracked_hours);
}
