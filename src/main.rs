//! Republik CLI - command-line companion for the Republik magazine

use clap::Parser;

mod auth;
mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::{ArticleCommands, Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login {
            email,
            poll_interval,
        } => cli::login::run(email, poll_interval, &opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Logout => cli::logout::run(&opts),
        Commands::Whoami => cli::whoami::run(&opts).await,
        Commands::Articles(article_cmd) => match article_cmd {
            ArticleCommands::List { first, since } => {
                cli::articles::list(first, since, &opts).await
            }
        },
        Commands::Pdf { path, output } => cli::pdf::run(path, output, &opts).await,
    }
}
