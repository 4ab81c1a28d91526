pub mod catalog;
pub mod comparison;
pub mod extractor;
pub mod provider;
pub mod ranking;
pub mod reports;
pub mod service;

mod errors;
pub mod models;

pub use catalog::{find_metric, Direction, MetricDefinition, MetricKind, METRIC_CATALOG};
pub use comparison::ComparisonEngine;
pub use errors::StatsError;
pub use extractor::extract;
pub use models::*;
pub use provider::{InMemoryStatsProvider, StatsProvider};
pub use ranking::{RankingEngine, DEFAULT_MIN_SUCCESSES, DEFAULT_RANKING_FIELDS};
pub use reports::*;
pub use service::{StatsService, StatsServiceBuilder};

/// Rounds to two decimal places, the precision every derived figure is reported at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
