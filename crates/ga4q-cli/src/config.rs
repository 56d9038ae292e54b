//! Process settings
//!
//! Flags win over environment variables, which win over defaults. A `.env`
//! file in the working directory is loaded into the environment first.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use ga4q_core::errors::{ExError, QueryError};
use ga4q_core::filter::MAX_FILTER_DEPTH;
use ga4q_core::logging_facility::Profile;
use ga4q_core_types::Sensitive;
use serde_json::{json, Value};

pub const ENV_CLIENT_ID: &str = "GOOGLE_OAUTH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "GOOGLE_OAUTH_CLIENT_SECRET";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    Stdio,
    Sse,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Stdio => "stdio",
            Transport::Sse => "sse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    pub fn profile(&self) -> Profile {
        match self {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

/// Global flags shared by every command
#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    /// Path of the stored OAuth token
    #[arg(long, global = true, env = "GA4Q_TOKEN_PATH", default_value = "token.json")]
    pub token_path: PathBuf,

    /// Host for the SSE transport
    #[arg(long, global = true, env = "GA4Q_HOST", default_value = "localhost")]
    pub host: String,

    /// Port for the SSE transport
    #[arg(long, global = true, env = "GA4Q_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Tool transport
    #[arg(long, global = true, env = "GA4Q_TRANSPORT", value_enum, default_value_t = Transport::Sse)]
    pub transport: Transport,

    /// OAuth client id
    #[arg(long, global = true, env = ENV_CLIENT_ID)]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[arg(long, global = true, env = ENV_CLIENT_SECRET, hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, env = "GA4Q_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Maximum filter nesting depth
    #[arg(long, global = true, env = "GA4Q_MAX_FILTER_DEPTH", default_value_t = MAX_FILTER_DEPTH)]
    pub max_filter_depth: usize,
}

/// Effective settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub token_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub transport: Transport,
    pub client_id: Option<String>,
    pub client_secret: Option<Sensitive<String>>,
    pub log_format: LogFormat,
    pub max_filter_depth: usize,
}

impl From<SettingsArgs> for Settings {
    fn from(args: SettingsArgs) -> Self {
        Self {
            token_path: args.token_path,
            host: args.host,
            port: args.port,
            transport: args.transport,
            client_id: args.client_id.filter(|id| !id.trim().is_empty()),
            client_secret: args
                .client_secret
                .map(Sensitive::new)
                .filter(|secret| !secret.is_blank()),
            log_format: args.log_format,
            max_filter_depth: args.max_filter_depth,
        }
    }
}

impl Settings {
    /// OAuth client credentials, required before any live backend call.
    ///
    /// # Errors
    ///
    /// `Configuration` naming whichever variables are missing.
    #[allow(clippy::result_large_err)]
    pub fn require_credentials(&self) -> Result<(&str, &Sensitive<String>), ExError> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Ok((id.as_str(), secret)),
            (id, secret) => {
                let missing: Vec<&str> = [
                    id.is_none().then_some(ENV_CLIENT_ID),
                    secret.is_none().then_some(ENV_CLIENT_SECRET),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(QueryError::Configuration {
                    reason: format!(
                        "OAuth client credentials missing; set {} or pass --client-id/--client-secret",
                        missing.join(" and ")
                    ),
                }
                .into())
            }
        }
    }

    /// Settings as JSON, with the secret redacted.
    pub fn to_json(&self) -> Value {
        json!({
            "token_path": self.token_path.display().to_string(),
            "host": self.host,
            "port": self.port,
            "transport": self.transport.as_str(),
            "client_id": self.client_id,
            "client_secret": self.client_secret.as_ref().map(|s| s.to_string()),
            "log_format": match self.log_format {
                LogFormat::Pretty => "pretty",
                LogFormat::Json => "json",
            },
            "max_filter_depth": self.max_filter_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ga4q_core::errors::ExErrorKind;

    fn settings(client_id: Option<&str>, client_secret: Option<&str>) -> Settings {
        Settings::from(SettingsArgs {
            token_path: PathBuf::from("token.json"),
            host: "localhost".to_string(),
            port: 8000,
            transport: Transport::Sse,
            client_id: client_id.map(str::to_string),
            client_secret: client_secret.map(str::to_string),
            log_format: LogFormat::Pretty,
            max_filter_depth: MAX_FILTER_DEPTH,
        })
    }

    #[test]
    fn test_require_credentials_ok() {
        let s = settings(Some("id"), Some("secret"));
        let (id, secret) = s.require_credentials().unwrap();
        assert_eq!(id, "id");
        assert_eq!(secret.expose(), "secret");
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        let err = settings(Some("id"), None).require_credentials().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Configuration);
        assert!(err.message().contains(ENV_CLIENT_SECRET));
        assert!(!err.message().contains(ENV_CLIENT_ID));
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let err = settings(Some(" "), Some("")).require_credentials().unwrap_err();
        assert!(err.message().contains(ENV_CLIENT_ID));
        assert!(err.message().contains(ENV_CLIENT_SECRET));
    }

    #[test]
    fn test_to_json_redacts_secret() {
        let json = settings(Some("id"), Some("GOCSPX-real")).to_json();
        assert_eq!(json["client_secret"], "***REDACTED***");
        assert!(!json.to_string().contains("GOCSPX-real"));
        assert_eq!(json["transport"], "sse");
    }
}
