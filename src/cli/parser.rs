use clap::Parser;

/// Command-line interface definition for tasklog
/// Interactive CLI application to track task time and remaining hours
#[derive(Parser)]
#[command(
    name = "tasklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "An interactive time logging CLI: track tasks, count down remaining hours, append to a text work log",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the data and log files (useful for tests or custom setups)
    #[arg(long = "dir")]
    pub dir: Option<String>,

    /// Run in test mode (no startup banner)
    #[arg(long = "test", hide = true)]
    pub test: bool,
}
