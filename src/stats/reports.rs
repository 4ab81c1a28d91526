use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use super::models::{BoardId, FailureReason, PlatformFamily, PlatformType, PlayerMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player1,
    Player2,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Winner::Player1 => "player1",
                Winner::Player2 => "player2",
                Winner::Tie => "tie",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Competitiveness {
    #[serde(rename = "Very Close")]
    VeryClose,
    Close,
    Decisive,
}

impl Competitiveness {
    pub fn from_score_difference(difference: u32) -> Self {
        match difference {
            0..=2 => Competitiveness::VeryClose,
            3..=4 => Competitiveness::Close,
            _ => Competitiveness::Decisive,
        }
    }
}

impl fmt::Display for Competitiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Competitiveness::VeryClose => "Very Close",
                Competitiveness::Close => "Close",
                Competitiveness::Decisive => "Decisive",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub label: String,
    pub value1: f64,
    pub value2: f64,
    pub difference: f64,
    /// `None` when player 2's value is zero and no percentage is meaningful.
    pub percent_diff: Option<f64>,
    pub winner: Winner,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub player1: u32,
    pub player2: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Advantages {
    pub player1: Vec<String>,
    pub player2: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairwiseReport {
    /// Catalog order; serialized as a JSON object.
    #[serde(serialize_with = "keyed_entries")]
    pub per_metric: Vec<(String, MetricComparison)>,
    pub winner: Winner,
    pub scores: Scores,
    pub advantages: Advantages,
    pub competitiveness: Competitiveness,
    pub total_metrics_compared: u32,
    pub ties: u32,
    pub score_difference: u32,
}

impl PairwiseReport {
    pub fn metric(&self, key: &str) -> Option<&MetricComparison> {
        find_entry(&self.per_metric, key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub player: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRanking {
    pub rankings: Vec<RankedEntry>,
    pub highest: RankedEntry,
    pub lowest: RankedEntry,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub total_players: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerFailure {
    pub player: String,
    pub reason: FailureReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPlayerReport {
    /// Requested field order; serialized as a JSON object.
    #[serde(serialize_with = "keyed_entries")]
    pub per_field: Vec<(String, FieldRanking)>,
    pub metadata: ReportMetadata,
    pub failures: Vec<PlayerFailure>,
}

impl MultiPlayerReport {
    pub fn field(&self, name: &str) -> Option<&FieldRanking> {
        find_entry(&self.per_field, name)
    }
}

fn find_entry<'a, T>(entries: &'a [(String, T)], key: &str) -> Option<&'a T> {
    entries
        .iter()
        .find(|(entry_key, _)| entry_key == key)
        .map(|(_, value)| value)
}

fn keyed_entries<S, T>(entries: &[(String, T)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
}

/// Where and when a report was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryContext {
    pub platform_family: PlatformFamily,
    pub board: BoardId,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub platform: PlatformType,
    pub stats: PlayerMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerComparison {
    pub player1: PlayerSnapshot,
    pub player2: PlayerSnapshot,
    pub comparison: PairwiseReport,
    pub context: QueryContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRanking {
    pub report: MultiPlayerReport,
    pub context: QueryContext,
}
