use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{BoardId, PlayerIdentity, RawStatsDocument};
use super::StatsError;

/// Source of raw per-player statistics documents.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn fetch_stats(
        &self,
        player: &PlayerIdentity,
        board: BoardId,
    ) -> Result<RawStatsDocument, StatsError>;
}

#[derive(Debug, Clone)]
enum StoredResponse {
    Document(RawStatsDocument),
    Failure(String),
}

/// Serves canned documents keyed by player name.
#[derive(Debug, Default)]
pub struct InMemoryStatsProvider {
    responses: Arc<RwLock<HashMap<String, StoredResponse>>>,
    requests: Arc<RwLock<Vec<(String, BoardId)>>>,
}

impl InMemoryStatsProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn insert_document(&self, player: &str, document: RawStatsDocument) {
        self.responses
            .write()
            .await
            .insert(player.to_string(), StoredResponse::Document(document));
    }

    /// Makes every fetch for `player` fail with a transport error.
    pub async fn insert_failure(&self, player: &str, message: &str) {
        self.responses
            .write()
            .await
            .insert(player.to_string(), StoredResponse::Failure(message.to_string()));
    }

    pub async fn requests(&self) -> Vec<(String, BoardId)> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl StatsProvider for InMemoryStatsProvider {
    async fn fetch_stats(
        &self,
        player: &PlayerIdentity,
        board: BoardId,
    ) -> Result<RawStatsDocument, StatsError> {
        self.requests
            .write()
            .await
            .push((player.name_on_platform.clone(), board));

        let responses = self.responses.read().await;
        match responses.get(&player.name_on_platform) {
            Some(StoredResponse::Document(document)) => Ok(document.clone()),
            Some(StoredResponse::Failure(message)) => Err(StatsError::Transport(message.clone())),
            None => Err(StatsError::Transport(format!(
                "No stats found for player {}",
                player.name_on_platform
            ))),
        }
    }
}
