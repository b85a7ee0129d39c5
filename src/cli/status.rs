//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Republik Configuration Status".bold());

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            let config_path = Config::resolve_path(opts.config_ref())?;
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            match &config.session {
                Some(session) => {
                    println!("{} Signed in as {}", "✓".green(), session.email.bold());
                    println!(
                        "  Token granted {}",
                        session.signed_in_at.format("%Y-%m-%d %H:%M UTC")
                    );
                }
                None => {
                    println!("{} Not signed in", "✗".red());
                    println!("  → Run 'republik login' to sign in");
                }
            }

            if let Some(ref url) = config.api_url {
                println!("{} Custom API URL: {}", "○".dimmed(), url.cyan());
            }

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!("Run {} to sign in.", "republik login".cyan());
            println!();
        }
    }

    Ok(())
}
