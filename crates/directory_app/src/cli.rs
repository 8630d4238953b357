//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use directory_logging::LogDestination;

/// Terminal front end for the company / ESG article directory.
///
/// Reads interactions from stdin (type `help` for the list) and renders the
/// search panel, company profile and article feed after every change.
#[derive(Parser, Debug)]
#[command(name = "directory_app", version, about, long_about = None)]
pub struct Cli {
    /// Page to open, e.g. `http://127.0.0.1:5500/frontend/company/?company=Acme&page=2`.
    /// Defaults to the home page under `--origin`.
    pub url: Option<String>,

    /// Root URL of the backend API.
    #[arg(long, env = "DIRECTORY_API_URL", default_value = "http://127.0.0.1:6969")]
    pub api_url: String,

    /// Origin serving the front end pages; navigation resolves against it.
    #[arg(long, env = "DIRECTORY_ORIGIN", default_value = "http://127.0.0.1:5500")]
    pub origin: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log file used by `--log file` and `--log both`.
    #[arg(long, default_value = "directory.log")]
    pub log_file: PathBuf,

    /// Log debug messages too.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
