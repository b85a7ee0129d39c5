//! Whoami command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::ContentApi;
use crate::error::Result;

/// Run the whoami command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::authenticated(opts)?;
    let viewer = ctx.client.me().await?;

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", crate::output::json::format_json(&viewer)?);
        }
        _ => {
            println!("Signed in as {}", viewer.email.bold());
            println!("  Account ID: {}", viewer.id);
        }
    }

    Ok(())
}
