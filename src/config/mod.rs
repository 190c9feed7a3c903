pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "user-posts")]
#[command(about = "Render a user's posts and comments from a JSONPlaceholder-style API")]
pub struct CliConfig {
    /// Base URL of the remote API
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Value to select in the user menu (falls back to the default user)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Toggle the comments of these post ids after rendering
    #[arg(long, value_delimiter = ',')]
    pub toggle: Vec<u64>,

    /// Write the page HTML here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Read `select <id>`, `toggle <post id>`, `show`, `quit` from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Posts resolved at once; 0 or 1 means one at a time
    #[arg(long)]
    pub fetch_concurrency: Option<usize>,

    #[arg(long)]
    pub menu_id: Option<String>,

    #[arg(long)]
    pub default_user_id: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
