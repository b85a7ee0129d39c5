//! Command execution context
//!
//! Bundles config loading, session validation, and client construction for
//! the authenticated content commands.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::RepublikClient;
use crate::config::Config;
use crate::error::Result;

/// Context for authenticated command execution
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// API client carrying the saved bearer token
    pub client: RepublikClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, require a saved session, and build a client with it.
    ///
    /// Returns an error telling the user to run `republik login` when no
    /// session is saved.
    pub fn authenticated(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let token = config.require_session()?.token.clone();
        let client = RepublikClient::with_url(Some(token), resolve_api_url(opts, &config))?;

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }
}

/// Resolve the API base URL: flag/env wins over the config file; `None`
/// falls through to the production default.
pub fn resolve_api_url(opts: &GlobalOptions, config: &Config) -> Option<String> {
    opts.api_url_ref()
        .map(str::to_string)
        .or_else(|| config.api_url.clone())
}
