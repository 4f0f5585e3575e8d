//! Interactive read-eval loop: token parsing, dispatch, and the
//! start-task flow shared by startup and the continuous tracking model.

use crate::cli::commands;
use crate::cli::input;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time::now_epoch;

const COMMAND_PROMPT: &str = "Command (or RETURN to log task): ";

/// One recognized console command. The empty line is itself a command:
/// log the current task and start the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LogTask,
    Quit,
    Help,
    ShowRemaining,
    UpdateRemaining,
    ShowTracked,
    ShowCurrentDuration,
    EditLastEntry,
    DailySummary,
    ToggleTracked,
    ToggleRemaining,
    Initialize,
}

impl Command {
    /// Tokens are matched case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "" => Some(Self::LogTask),
            "quit" => Some(Self::Quit),
            "help" => Some(Self::Help),
            "show-remaining" => Some(Self::ShowRemaining),
            "update-remaining" => Some(Self::UpdateRemaining),
            "show-tracked" => Some(Self::ShowTracked),
            "show-current-duration" => Some(Self::ShowCurrentDuration),
            "edit-last-entry" => Some(Self::EditLastEntry),
            "daily-summary" => Some(Self::DailySummary),
            "toggle-tracked" => Some(Self::ToggleTracked),
            "toggle-remaining" => Some(Self::ToggleRemaining),
            "initialize" => Some(Self::Initialize),
            _ => None,
        }
    }
}

/// What the loop should do after a command handler ran.
pub enum Outcome {
    Continue,
    Quit,
}

pub fn splash(session: &Session) {
    let line = "=".repeat(40);
    println!("{}", line);
    println!("{:^40}", format!("TASKLOG v{}", env!("CARGO_PKG_VERSION")));
    println!("{}", line);
    println!("User: {}", session.state.username);
    println!("Client: {}", session.state.client_id);
    println!("\nType 'help' for available commands");
    println!("{}\n", line);
}

/// Enter Running: offer recovery when a previous session left a task
/// unterminated, then capture the next task's description. At the
/// description prompt any text is taken literally, never as a command.
pub fn start_task(session: &mut Session) -> AppResult<Outcome> {
    let resume = if session.state.unterminated_task {
        let resume = input::confirm(
            "An unterminated task has been detected. Use the last saved start time as your current task start time?",
        )?;
        if !resume {
            messages::info("Using right now as the task start time.");
        }
        resume
    } else {
        false
    };

    session.begin(now_epoch(), resume)?;

    let Some(description) = input::read_line("Enter task description: ")? else {
        return Ok(Outcome::Quit);
    };
    session.set_current_task(description);

    println!("\nTracking task: {}", session.current_task());
    println!("Press RETURN to log your current task and start a new one.\n");
    Ok(Outcome::Continue)
}

fn dispatch(cmd: Command, session: &mut Session) -> AppResult<Outcome> {
    match cmd {
        Command::LogTask => commands::log_task::handle(session),
        Command::Quit => commands::quit::handle(session),
        Command::Initialize => commands::init::handle(session),
        Command::Help => {
            commands::help::handle();
            Ok(Outcome::Continue)
        }
        Command::ShowRemaining => {
            commands::remaining::show(session);
            Ok(Outcome::Continue)
        }
        Command::UpdateRemaining => {
            commands::remaining::update(session)?;
            Ok(Outcome::Continue)
        }
        Command::ShowTracked => {
            commands::tracked::handle(session);
            Ok(Outcome::Continue)
        }
        Command::ShowCurrentDuration => {
            commands::duration::handle(session);
            Ok(Outcome::Continue)
        }
        Command::EditLastEntry => {
            commands::edit::handle(session)?;
            Ok(Outcome::Continue)
        }
        Command::DailySummary => {
            commands::summary::handle(session);
            Ok(Outcome::Continue)
        }
        Command::ToggleTracked => {
            commands::toggles::toggle_total(session)?;
            Ok(Outcome::Continue)
        }
        Command::ToggleRemaining => {
            commands::toggles::toggle_remaining(session)?;
            Ok(Outcome::Continue)
        }
    }
}

/// Run the interactive session until quit or end of input. The session
/// is already Running with a described task when the loop is entered.
pub fn run_loop(session: &mut Session) -> AppResult<()> {
    loop {
        let Some(line) = input::read_line(COMMAND_PROMPT)? else {
            // Closed stdin ends the loop without the quit path on
            // purpose: unterminated_task stays persisted, so the next
            // launch offers recovery exactly as after a crash.
            return Ok(());
        };

        match Command::from_token(&line) {
            Some(cmd) => {
                if let Outcome::Quit = dispatch(cmd, session)? {
                    return Ok(());
                }
            }
            None => println!(
                "Unknown command '{}'. Type 'help' for a list of commands.",
                line
            ),
        }
    }
}
