//! PDF download command implementation

use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use indicatif::ProgressBar;

use crate::cli::GlobalOptions;
use crate::client::CdnClient;
use crate::error::{Error, Result};

/// Run the pdf command.
///
/// PDFs are served from the public CDN, so no session is required. The CDN
/// base URL can be overridden with `REPUBLIK_CDN_URL` for testing.
pub async fn run(path: String, output: Option<String>, _opts: &GlobalOptions) -> Result<()> {
    let destination = match output {
        Some(output) => PathBuf::from(output),
        None => {
            let name = path
                .rsplit('/')
                .next()
                .filter(|name| !name.is_empty())
                .ok_or_else(|| Error::Other(format!("Cannot derive a file name from '{}'", path)))?;
            PathBuf::from(format!("{}.pdf", name))
        }
    };

    let cdn = CdnClient::with_url(std::env::var("REPUBLIK_CDN_URL").ok())?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Downloading {}...", path));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = cdn.download_pdf(&path, &destination).await;
    spinner.finish_and_clear();
    let written = result?;

    println!(
        "{} Saved {} ({} KiB)",
        "✓".green(),
        destination.display().to_string().bold(),
        written / 1024
    );

    Ok(())
}
