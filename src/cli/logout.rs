//! Logout command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the logout command.
///
/// Drops the stored session. The server needs no notification; the token
/// simply stops being used.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(_) => {
            println!("No saved session.");
            return Ok(());
        }
    };

    match config.session.take() {
        Some(session) => {
            config.save_at(opts.config_ref())?;
            println!("{} Signed out {}", "✓".green(), session.email.bold());
        }
        None => println!("No saved session."),
    }

    Ok(())
}
