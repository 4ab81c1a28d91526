use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::stats::{
    BoardId, Credentials, PlatformFamily, PlayerIdentity, RawStatsDocument, StatsError,
    StatsProvider,
};

/// HTTP client for the r6data `/stats` endpoint.
#[derive(Debug, Clone)]
pub struct R6DataClient {
    http: Client,
    base_url: String,
    credentials: Option<Credentials>,
    platform_family: PlatformFamily,
}

impl R6DataClient {
    pub fn new(config: &Config) -> Result<Self, StatsError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| StatsError::Config(format!("Failed to build HTTP client: {}", err)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials.clone(),
            platform_family: config.platform_family,
        })
    }

    fn stats_url(&self) -> String {
        format!("{}/stats", self.base_url)
    }

    fn query_params(
        &self,
        player: &PlayerIdentity,
        board: BoardId,
    ) -> Result<Vec<(&'static str, String)>, StatsError> {
        let credentials = player
            .credentials
            .as_ref()
            .or(self.credentials.as_ref())
            .ok_or_else(|| StatsError::Validation("Email and password are required".to_string()))?;

        Ok(vec![
            ("type", "stats".to_string()),
            ("email", credentials.email.clone()),
            ("password", credentials.password.clone()),
            ("nameOnPlatform", player.name_on_platform.clone()),
            ("platformType", player.platform_type.to_string()),
            ("platform_families", self.platform_family.to_string()),
            ("board_id", board.to_string()),
        ])
    }
}

#[async_trait]
impl StatsProvider for R6DataClient {
    #[instrument(skip(self, player), fields(player = %player.name_on_platform))]
    async fn fetch_stats(
        &self,
        player: &PlayerIdentity,
        board: BoardId,
    ) -> Result<RawStatsDocument, StatsError> {
        let params = self.query_params(player, board)?;

        let response = self
            .http
            .get(self.stats_url())
            .query(&params)
            .send()
            .await
            .map_err(|err| StatsError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(StatsError::Transport("Authentication error".to_string()));
        }
        if !status.is_success() {
            return Err(StatsError::Transport(format!(
                "Stats request failed with status {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| StatsError::Transport(format!("Invalid stats payload: {}", err)))?;
        debug!(%status, "Received stats document");

        Ok(RawStatsDocument::from(body))
    }
}
