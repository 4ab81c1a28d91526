use tracing::{info, warn};

use super::models::{PlayerMetrics, PlayerRecord};
use super::reports::{FieldRanking, MultiPlayerReport, PlayerFailure, RankedEntry, ReportMetadata};
use super::StatsError;

pub const DEFAULT_MIN_SUCCESSES: usize = 2;

pub const DEFAULT_RANKING_FIELDS: [&str; 5] = ["kills", "deaths", "wins", "losses", "totalMatches"];

/// Request field names that differ from the metric keys they read.
const FIELD_ALIASES: [(&str, &str); 9] = [
    ("matches_played", "totalMatches"),
    ("total_matches", "totalMatches"),
    ("kd", "kdRatio"),
    ("kd_ratio", "kdRatio"),
    ("win_rate", "winRate"),
    ("max_rank", "maxRank"),
    ("rank_points", "rankPoints"),
    ("max_rank_points", "maxRankPoints"),
    ("matches", "totalMatches"),
];

pub fn resolve_field(field: &str) -> &str {
    FIELD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == field)
        .map(|(_, key)| *key)
        .unwrap_or(field)
}

fn field_value(metrics: &PlayerMetrics, field: &str) -> f64 {
    metrics.value_of(resolve_field(field)).unwrap_or_default()
}

/// Per-field leaderboards across any number of players.
#[derive(Debug, Clone, Copy)]
pub struct RankingEngine {
    min_successes: usize,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SUCCESSES)
    }
}

impl RankingEngine {
    pub fn new(min_successes: usize) -> Self {
        Self { min_successes }
    }

    pub fn min_successes(&self) -> usize {
        self.min_successes
    }

    /// Ranks every requested field, highest value first.
    ///
    /// Players with equal values keep their input order. Failed players are
    /// excluded from the numbers and listed under `failures`. Falls back to
    /// [`DEFAULT_RANKING_FIELDS`] when `fields` is `None`.
    pub fn rank(
        &self,
        records: &[PlayerRecord],
        fields: Option<&[String]>,
    ) -> Result<MultiPlayerReport, StatsError> {
        if records.is_empty() {
            return Err(StatsError::Validation(
                "At least one player record is required for ranking".to_string(),
            ));
        }

        let mut successes: Vec<(&str, &PlayerMetrics)> = Vec::new();
        let mut failures = Vec::new();
        for record in records {
            match &record.outcome {
                Ok(metrics) => successes.push((record.player.as_str(), metrics)),
                Err(reason) => {
                    warn!(player = %record.player, %reason, "Excluding player from ranking");
                    failures.push(PlayerFailure {
                        player: record.player.clone(),
                        reason: reason.clone(),
                    });
                }
            }
        }

        if successes.len() < self.min_successes {
            return Err(StatsError::InsufficientPlayers {
                successful: successes.len(),
                required: self.min_successes,
            });
        }

        let requested: Vec<&str> = match fields {
            Some(fields) => fields.iter().map(String::as_str).collect(),
            None => DEFAULT_RANKING_FIELDS.to_vec(),
        };

        let mut per_field: Vec<(String, FieldRanking)> = Vec::new();
        for field in requested {
            if per_field.iter().any(|(name, _)| name == field) {
                continue;
            }
            if let Some(ranking) = rank_field(&successes, field) {
                per_field.push((field.to_string(), ranking));
            }
        }

        let metadata = ReportMetadata {
            total_players: records.len(),
            successful_fetches: successes.len(),
            failed_fetches: failures.len(),
        };
        info!(
            total = metadata.total_players,
            successful = metadata.successful_fetches,
            failed = metadata.failed_fetches,
            fields = per_field.len(),
            "Ranked players"
        );

        Ok(MultiPlayerReport {
            per_field,
            metadata,
            failures,
        })
    }
}

fn rank_field(successes: &[(&str, &PlayerMetrics)], field: &str) -> Option<FieldRanking> {
    let mut rankings: Vec<RankedEntry> = successes
        .iter()
        .map(|(player, metrics)| RankedEntry {
            player: player.to_string(),
            value: field_value(metrics, field),
        })
        .collect();

    // sort_by is stable, so equal values keep input order
    rankings.sort_by(|a, b| b.value.total_cmp(&a.value));

    let highest = rankings.first()?.clone();
    let lowest = rankings.last()?.clone();
    let average = rankings.iter().map(|entry| entry.value).sum::<f64>() / rankings.len() as f64;

    Some(FieldRanking {
        rankings,
        highest,
        lowest,
        average,
    })
}
