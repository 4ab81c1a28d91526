use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;

use super::{
    comparison::ComparisonEngine,
    extractor::extract,
    models::{BoardId, PlatformFamily, PlayerIdentity, PlayerMetrics, PlayerRecord},
    provider::StatsProvider,
    ranking::{RankingEngine, DEFAULT_MIN_SUCCESSES},
    reports::{PlayerComparison, PlayerRanking, PlayerSnapshot, QueryContext},
    StatsError,
};

/// Fetches documents through the injected provider and feeds both engines.
pub struct StatsService {
    provider: Arc<dyn StatsProvider>,
    comparison: ComparisonEngine,
    ranking: RankingEngine,
    platform_family: PlatformFamily,
}

impl StatsService {
    pub fn builder(provider: Arc<dyn StatsProvider>) -> StatsServiceBuilder {
        StatsServiceBuilder::new(provider)
    }

    /// Compares two players head to head on one board.
    ///
    /// Both players are mandatory: a failed fetch or missing board data for
    /// either one is reported as `InsufficientData` naming that player.
    #[instrument(skip(self, player1, player2), fields(player1 = %player1.name_on_platform, player2 = %player2.name_on_platform))]
    pub async fn compare_players(
        &self,
        player1: &PlayerIdentity,
        player2: &PlayerIdentity,
        board: BoardId,
    ) -> Result<PlayerComparison, StatsError> {
        player1.validate()?;
        player2.validate()?;

        let (first, second) = tokio::join!(
            self.fetch_metrics(player1, board),
            self.fetch_metrics(player2, board)
        );
        let stats1 = first?;
        let stats2 = second?;

        let comparison = self.comparison.compare(&stats1, &stats2);
        info!(
            winner = %comparison.winner,
            competitiveness = %comparison.competitiveness,
            "Compared players"
        );

        Ok(PlayerComparison {
            player1: PlayerSnapshot {
                name: player1.name_on_platform.clone(),
                platform: player1.platform_type,
                stats: stats1,
            },
            player2: PlayerSnapshot {
                name: player2.name_on_platform.clone(),
                platform: player2.platform_type,
                stats: stats2,
            },
            comparison,
            context: self.context(board),
        })
    }

    /// Ranks any number of players per field, tolerating individual failures.
    #[instrument(skip(self, players, fields), fields(players = players.len()))]
    pub async fn rank_players(
        &self,
        players: &[PlayerIdentity],
        board: BoardId,
        fields: Option<&[String]>,
    ) -> Result<PlayerRanking, StatsError> {
        if players.len() < 2 {
            return Err(StatsError::Validation(
                "At least 2 players are required for comparison".to_string(),
            ));
        }
        for (index, player) in players.iter().enumerate() {
            player.validate().map_err(|_| {
                StatsError::Validation(format!(
                    "Player {} is missing required field nameOnPlatform",
                    index + 1
                ))
            })?;
        }

        let records = join_all(players.iter().map(|player| self.fetch_record(player, board)))
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        let report = self.ranking.rank(&records, fields)?;

        Ok(PlayerRanking {
            report,
            context: self.context(board),
        })
    }

    async fn fetch_metrics(
        &self,
        player: &PlayerIdentity,
        board: BoardId,
    ) -> Result<PlayerMetrics, StatsError> {
        match self.fetch_record(player, board).await?.outcome {
            Ok(metrics) => Ok(metrics),
            Err(reason) => Err(StatsError::InsufficientData {
                player: player.name_on_platform.clone(),
                board,
                reason,
            }),
        }
    }

    /// Only transport errors become per-player failures; validation and
    /// configuration errors abort the whole request.
    async fn fetch_record(
        &self,
        player: &PlayerIdentity,
        board: BoardId,
    ) -> Result<PlayerRecord, StatsError> {
        let name = player.name_on_platform.clone();
        match self.provider.fetch_stats(player, board).await {
            Ok(document) => {
                debug!(player = %name, %board, "Fetched stats document");
                Ok(PlayerRecord::from_extraction(name, extract(&document, board)))
            }
            Err(StatsError::Transport(message)) => {
                warn!(player = %name, %board, %message, "Failed to fetch stats");
                Ok(PlayerRecord::transport_failure(name, message))
            }
            Err(err) => Err(err),
        }
    }

    fn context(&self, board: BoardId) -> QueryContext {
        QueryContext {
            platform_family: self.platform_family,
            board,
            generated_at: Utc::now(),
        }
    }
}

pub struct StatsServiceBuilder {
    provider: Arc<dyn StatsProvider>,
    platform_family: PlatformFamily,
    min_successful_players: usize,
}

impl StatsServiceBuilder {
    fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self {
            provider,
            platform_family: PlatformFamily::Pc,
            min_successful_players: DEFAULT_MIN_SUCCESSES,
        }
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.platform_family = config.platform_family;
        self.min_successful_players = config.min_successful_players;
        self
    }

    pub fn with_platform_family(mut self, platform_family: PlatformFamily) -> Self {
        self.platform_family = platform_family;
        self
    }

    pub fn with_min_successful_players(mut self, min_successful_players: usize) -> Self {
        self.min_successful_players = min_successful_players;
        self
    }

    pub fn build(self) -> StatsService {
        StatsService {
            provider: self.provider,
            comparison: ComparisonEngine::new(),
            ranking: RankingEngine::new(self.min_successful_players),
            platform_family: self.platform_family,
        }
    }
}
