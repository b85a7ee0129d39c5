//! Login command implementation
//!
//! Drives the sign-in handshake: request a token for the email address,
//! show the verification phrase, then wait while the user confirms the
//! emailed link. The session is saved only when the request is granted.

use std::time::Duration;

use chrono::Utc;
use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};
use indicatif::ProgressBar;

use crate::auth::{PollPolicy, SystemClock, TokenAcquirer, TokenResult};
use crate::cli::GlobalOptions;
use crate::cli::context::resolve_api_url;
use crate::client::{RepublikClient, TokenChallenge};
use crate::config::{Config, Session};
use crate::error::{AuthError, Result};

/// Run the login command
pub async fn run(email: Option<String>, poll_interval: u64, opts: &GlobalOptions) -> Result<()> {
    // An existing config is kept; only the session is replaced on success
    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();

    let email = match email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email address registered with the Republik")
            .interact_text()?,
    };

    let client = RepublikClient::with_url(None, resolve_api_url(opts, &config))?;
    let acquirer = TokenAcquirer::new(
        client,
        SystemClock,
        PollPolicy {
            interval: Duration::from_secs(poll_interval),
        },
    );

    println!("{}", "Requesting a sign-in token...".cyan());

    let mut spinner: Option<ProgressBar> = None;
    let result = acquirer
        .acquire(&email, |challenge| {
            print_challenge(&email, challenge);

            let pb = ProgressBar::new_spinner();
            pb.set_message("Waiting for confirmation...");
            pb.enable_steady_tick(Duration::from_millis(120));
            spinner = Some(pb);
        })
        .await;

    if let Some(pb) = spinner.take() {
        pb.finish_and_clear();
    }

    match result? {
        TokenResult::Granted { token } => {
            config.session = Some(Session {
                email: email.clone(),
                token,
                signed_in_at: Utc::now(),
            });
            config.save_at(opts.config_ref())?;

            println!("{} Signed in as {}", "✓".green(), email.bold());
            println!("\n{}", "You're all set! Try running:".bold());
            println!(
                "  {} - List the latest articles",
                "republik articles list".cyan()
            );
            println!(
                "  {} - Show the signed-in account",
                "republik whoami".cyan()
            );
            Ok(())
        }
        TokenResult::Denied => Err(AuthError::Denied.into()),
        TokenResult::Expired => Err(AuthError::Expired.into()),
    }
}

/// Prompt the user with the verification phrase and the expiry window
fn print_challenge(email: &str, challenge: &TokenChallenge) {
    println!();
    println!(
        "Check the inbox of {} and confirm the sign-in email.",
        email.bold()
    );
    println!("Confirm only if the verification phrase in the email reads:");
    println!();
    println!("    {}", challenge.phrase.bold().cyan());
    println!();

    let remaining = challenge.expires_at.signed_duration_since(Utc::now());
    println!(
        "The request expires in {} minutes.",
        remaining.num_minutes().max(0)
    );
}
