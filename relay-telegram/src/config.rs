//! Relay configuration: bot token, operator id, database, log file and optional API URL.
//! Loaded from env: BOT_TOKEN, ADMIN_ID, DATABASE_URL, LOG_FILE, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use std::env;

use relay_core::{RelayError, Result};
use secrecy::{ExposeSecret, SecretString};
use tracing::error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:messages.db";
pub const DEFAULT_LOG_FILE: &str = "logs/anon-relay.log";

/// Everything needed at startup. Built once and passed down explicitly.
#[derive(Debug)]
pub struct RelayConfig {
    pub bot_token: SecretString,
    /// User id of the single operator.
    pub operator_id: i64,
    pub database_url: String,
    pub log_file: String,
    pub telegram_api_url: Option<String>,
}

impl RelayConfig {
    /// Loads from env. `token` and `operator_id`, when given (e.g. from the CLI), override
    /// BOT_TOKEN and ADMIN_ID. Missing or invalid token/operator is a [`RelayError::Config`].
    pub fn load(token: Option<String>, operator_id: Option<i64>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| RelayError::Config("BOT_TOKEN not set".into()))?,
        };
        let operator_id = match operator_id {
            Some(id) => id,
            None => parse_operator_id(
                &env::var("ADMIN_ID").map_err(|_| RelayError::Config("ADMIN_ID not set".into()))?,
            )?,
        };
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        let config = Self {
            bot_token: SecretString::from(bot_token),
            operator_id,
            database_url,
            log_file,
            telegram_api_url,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds config with the given token and operator; other fields take defaults.
    pub fn with_credentials(bot_token: String, operator_id: i64) -> Self {
        Self {
            bot_token: SecretString::from(bot_token),
            operator_id,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            telegram_api_url: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot_token.expose_secret().trim().is_empty() {
            return Err(RelayError::Config("BOT_TOKEN is empty".into()));
        }
        if self.operator_id == 0 {
            return Err(RelayError::Config("ADMIN_ID must be non-zero".into()));
        }
        Ok(())
    }

    /// teloxide Bot for this config; an unparsable API URL falls back to the default endpoint.
    pub fn build_bot(&self) -> teloxide::Bot {
        let bot = teloxide::Bot::new(self.bot_token.expose_secret());
        match self.telegram_api_url.as_deref() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    }
}

fn parse_operator_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| RelayError::Config(format!("ADMIN_ID must be an integer, got {:?}", raw)))
}
