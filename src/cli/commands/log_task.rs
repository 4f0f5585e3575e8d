use crate::cli::repl::{self, Outcome};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time::now_epoch;

/// Handle the empty-line command: log the current task, print the
/// result, and immediately start tracking the next one.
pub fn handle(session: &mut Session) -> AppResult<Outcome> {
    let logged = session.log(now_epoch())?;

    println!("\n{}", logged.description);
    println!("Time logged: {:.2} {}", logged.duration, logged.unit);
    if session.state.display_remaining_hours {
        println!("Total hours remaining: {:.2}", logged.remaining_hours);
    }
    if session.state.display_total_hours {
        println!("Total hours tracked: {:.2}", logged.tracked_hours);
    }

    messages::info("Tracking new task.");
    repl::start_task(session)
}
