//! Command-line arguments.

use models::PageParams;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const API_KEY_ENV: &str = "UPTIME_API_KEY";
pub const APP_DIR_NAME: &str = "uptimectl";

#[derive(Parser)]
#[command(name = "uptimectl")]
#[command(about = "Inspect and manage uptime monitors from the command line")]
#[command(version)]
pub struct Cli {
    /// Account API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: String,

    /// Directory holding uptime.toml (defaults to the platform config dir)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Also write logs to uptimectl.log in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log requests and failures to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show account limits and monitor counts
    Account,

    /// List monitors
    Monitors(MonitorsArgs),

    /// List alert contacts
    AlertContacts(ListArgs),

    /// List maintenance windows
    Mwindows(ListArgs),

    /// List public status pages
    Psps(ListArgs),

    /// Pause a monitor
    Pause { id: i64 },

    /// Resume a paused monitor
    Resume { id: i64 },

    /// Clear a monitor's logs and statistics
    ResetMonitor { id: i64 },

    /// Delete a monitor
    DeleteMonitor { id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ListArgs {
    /// Only these ids, comma separated
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<i64>,

    #[arg(long, default_value_t = models::DEFAULT_OFFSET)]
    pub offset: u32,

    #[arg(long, default_value_t = models::DEFAULT_LIMIT)]
    pub limit: u32,
}

impl ListArgs {
    pub fn page(&self) -> PageParams {
        PageParams::new(self.offset, self.limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct MonitorsArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Match against friendly name and URL
    #[arg(long)]
    pub search: Option<String>,

    /// Custom uptime ratio periods in days, comma separated
    #[arg(long, value_delimiter = ',')]
    pub ratios: Vec<u32>,

    /// Include state change logs
    #[arg(long)]
    pub logs: bool,

    /// Include response times
    #[arg(long)]
    pub response_times: bool,

    /// Include SSL certificate details
    #[arg(long)]
    pub ssl: bool,
}
