use clap::Parser;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_NUMBER"));

pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

#[derive(Parser, Debug)]
#[command(name = "qualy", version = VERSION, about = "Motorsport qualifying results TUI")]
pub struct Cli {
    /// Season year, or "current"
    #[arg(default_value = "current")]
    pub season: String,

    /// Round number within the season, or "last"
    #[arg(default_value = "last")]
    pub round: String,

    /// Label shown in the screen header
    #[arg(short, long, default_value = "Qualifying")]
    pub label: String,

    /// Base URL of the Ergast-compatible results API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// Write debug logs to $XDG_STATE_HOME/qualy/debug.log
    #[arg(short, long)]
    pub verbose: bool,
}
