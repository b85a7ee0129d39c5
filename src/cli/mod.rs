//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod articles;
pub mod context;
pub mod login;
pub mod logout;
pub mod pdf;
pub mod status;
pub mod whoami;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Republik CLI - command-line companion for the Republik magazine
#[derive(Parser, Debug)]
#[command(name = "republik")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "REPUBLIK_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "REPUBLIK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "REPUBLIK_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "REPUBLIK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in by email and save the granted token
    #[command(after_help = "\
The Republik API sends a confirmation email to the given address. Confirm it
only if the verification phrase in the email matches the one printed here;
the command waits until the request is confirmed, denied, or expires.")]
    Login {
        /// Email address registered with the Republik (prompted if omitted)
        email: Option<String>,

        /// Seconds between status polls while waiting for confirmation
        #[arg(long, default_value_t = 5)]
        poll_interval: u64,
    },

    /// Show authentication and configuration status
    Status,

    /// Drop the saved session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Browse published articles
    #[command(subcommand)]
    Articles(ArticleCommands),

    /// Download the PDF rendition of an article
    Pdf {
        /// Article path as shown by `republik articles list`
        path: String,

        /// Destination file (defaults to the article name in the current directory)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
}

/// Article subcommands
#[derive(Subcommand, Debug)]
pub enum ArticleCommands {
    /// List recent articles from the feed
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            republik articles list                   # Latest articles\n  \
            republik articles list -n 25             # More of them\n  \
            republik articles list --since 2026-01-01\n  \
            republik articles list --format json | jq '.data[].path'"
    )]
    List {
        /// Number of articles to fetch
        #[arg(long, short = 'n', conflicts_with = "since")]
        first: Option<usize>,

        /// Only articles published on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,
    },
}
