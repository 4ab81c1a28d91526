use std::str::FromStr;
use std::time::Duration;

use crate::stats::{BoardId, Credentials, PlatformFamily, StatsError, DEFAULT_MIN_SUCCESSES};

pub const DEFAULT_API_BASE_URL: &str = "https://api.r6data.eu/api";

/// Runtime settings, read from `R6_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub credentials: Option<Credentials>,
    pub platform_family: PlatformFamily,
    pub board: BoardId,
    pub min_successful_players: usize,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            credentials: None,
            platform_family: PlatformFamily::Pc,
            board: BoardId::Ranked,
            min_successful_players: DEFAULT_MIN_SUCCESSES,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, StatsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StatsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup("R6_API_URL") {
            config.api_base_url = url;
        }

        config.credentials = match (lookup("R6_EMAIL"), lookup("R6_PASSWORD")) {
            (Some(email), Some(password)) => Some(Credentials::new(email, password)),
            (None, None) => None,
            _ => {
                return Err(StatsError::Config(
                    "R6_EMAIL and R6_PASSWORD must be set together".to_string(),
                ))
            }
        };

        if let Some(family) = lookup("R6_PLATFORM_FAMILY") {
            config.platform_family = PlatformFamily::from_str(&family).map_err(|_| {
                StatsError::Config(format!(
                    "Invalid R6_PLATFORM_FAMILY '{}'. Must be pc or console",
                    family
                ))
            })?;
        }

        if let Some(board) = lookup("R6_BOARD_ID") {
            config.board =
                BoardId::parse(&board).map_err(|err| StatsError::Config(err.to_string()))?;
        }

        if let Some(min) = lookup("R6_MIN_PLAYERS") {
            config.min_successful_players = parse_number("R6_MIN_PLAYERS", &min)?;
        }

        if let Some(secs) = lookup("R6_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(parse_number("R6_TIMEOUT_SECS", &secs)?);
        }

        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, StatsError> {
    value
        .trim()
        .parse()
        .map_err(|_| StatsError::Config(format!("{} must be a number, got '{}'", key, value)))
}
