use crate::cli::repl::Outcome;
use crate::core::session::Session;
use crate::errors::AppResult;

/// Handle the `quit` command: persist with the task flag closed, then
/// let the loop terminate with a success status.
pub fn handle(session: &mut Session) -> AppResult<Outcome> {
    println!("\nSaving...");
    session.finish()?;
    println!("tasklog stopped.");
    Ok(Outcome::Quit)
}
