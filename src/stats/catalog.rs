use serde::Serialize;
use std::cmp::Ordering;

use super::models::PlayerMetrics;
use super::reports::Winner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Direct,
    Derived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub direction: Direction,
    pub kind: MetricKind,
}

impl MetricDefinition {
    const fn direct(key: &'static str, label: &'static str, direction: Direction) -> Self {
        Self {
            key,
            label,
            direction,
            kind: MetricKind::Direct,
        }
    }

    const fn derived(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            direction: Direction::HigherIsBetter,
            kind: MetricKind::Derived,
        }
    }

    pub fn value(&self, metrics: &PlayerMetrics) -> f64 {
        metrics.value_of(self.key).unwrap_or_default()
    }

    /// Picks the player whose value is favorable for this metric.
    pub fn winner(&self, value1: f64, value2: f64) -> Winner {
        let favored = match value1.partial_cmp(&value2) {
            Some(Ordering::Greater) => Winner::Player1,
            Some(Ordering::Less) => Winner::Player2,
            _ => return Winner::Tie,
        };

        match (self.direction, favored) {
            (Direction::HigherIsBetter, winner) => winner,
            (Direction::LowerIsBetter, Winner::Player1) => Winner::Player2,
            (Direction::LowerIsBetter, _) => Winner::Player1,
        }
    }
}

/// Comparable metrics in iteration order: direct counts first, then derived ratios.
pub const METRIC_CATALOG: [MetricDefinition; 11] = [
    MetricDefinition::direct("kills", "Kills", Direction::HigherIsBetter),
    MetricDefinition::direct("deaths", "Deaths", Direction::LowerIsBetter),
    MetricDefinition::direct("wins", "Wins", Direction::HigherIsBetter),
    MetricDefinition::direct("losses", "Losses", Direction::LowerIsBetter),
    MetricDefinition::direct("abandons", "Abandons", Direction::LowerIsBetter),
    MetricDefinition::direct("rank", "Current Rank", Direction::HigherIsBetter),
    MetricDefinition::direct("maxRank", "Max Rank", Direction::HigherIsBetter),
    MetricDefinition::direct("rankPoints", "Rank Points", Direction::HigherIsBetter),
    MetricDefinition::direct("totalMatches", "Total Matches", Direction::HigherIsBetter),
    MetricDefinition::derived("kdRatio", "K/D Ratio"),
    MetricDefinition::derived("winRate", "Win Rate (%)"),
];

pub fn find_metric(key: &str) -> Option<&'static MetricDefinition> {
    METRIC_CATALOG.iter().find(|metric| metric.key == key)
}
