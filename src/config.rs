// src/config.rs
use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, NOTION_API_BASE_URL, NOTION_TOKEN_ENV};
use crate::error::AppError;
use crate::types::{ApiKey, ValidatedUrl};
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Which route table the process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DeploymentShape {
    /// Every relay route plus health under `/api`
    #[default]
    Router,
    /// Only `/api/databases/{id}/query`, behaving like a standalone function
    SingleRoute,
}

/// Parsed command-line input. Most options fall back to the environment.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Route table to serve
    #[arg(long, value_enum, default_value_t = DeploymentShape::Router)]
    pub shape: DeploymentShape,

    /// Notion integration token
    #[arg(long, env = NOTION_TOKEN_ENV, hide_env_values = true)]
    pub notion_token: Option<String>,

    /// Base URL of the Notion API (override for staging or local stubs)
    #[arg(long, env = "NOTION_API_URL", default_value = NOTION_API_BASE_URL)]
    pub notion_api_url: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// The upstream credential, loaded once and never mutated.
///
/// An absent token is a valid state: requests are still relayed and the
/// upstream answers them with an authentication error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    api_key: Option<ApiKey>,
}

impl Credentials {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self { api_key }
    }

    /// Builds credentials from a raw token; a blank or unusable value counts as absent.
    pub fn from_token(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|token| !token.trim().is_empty()) else {
            return Self::default();
        };
        match ApiKey::new(raw) {
            Ok(api_key) => Self::new(Some(api_key)),
            Err(e) => {
                log::warn!("Ignoring {}: {}", NOTION_TOKEN_ENV, e);
                Self::default()
            }
        }
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Resolved server configuration, validated and ready to start the relay.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub shape: DeploymentShape,
    pub notion_api_url: ValidatedUrl,
    pub credentials: Credentials,
}

impl ServerConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let credentials = Credentials::from_token(cli.notion_token.as_deref());
        Self::resolve_with(cli, credentials)
    }

    /// Resolves with an explicitly supplied credential.
    pub fn resolve_with(cli: CommandLineInput, credentials: Credentials) -> Result<Self, AppError> {
        let host: IpAddr = cli.host.trim().parse().map_err(|e| {
            AppError::InvalidConfiguration(format!("Invalid HOST '{}': {}", cli.host, e))
        })?;
        let notion_api_url = ValidatedUrl::parse(cli.notion_api_url.trim())?;

        Ok(ServerConfig {
            listen_addr: SocketAddr::new(host, cli.port),
            shape: cli.shape,
            notion_api_url,
            credentials,
        })
    }
}
