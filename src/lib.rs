// Library crate for Rainbow Six Siege player statistics
// Normalizes upstream stats documents and builds comparison and ranking reports

pub mod config;
pub mod stats;
pub mod upstream;

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use stats::{
    extract, AbsentReason, BoardId, ComparisonEngine, ExtractionOutcome, FailureReason,
    InMemoryStatsProvider, MultiPlayerReport, PairwiseReport, PlatformFamily, PlatformType,
    PlayerIdentity, PlayerMetrics, PlayerRecord, RankingEngine, RawStatsDocument, StatsError,
    StatsProvider, StatsService, Winner, METRIC_CATALOG,
};
pub use upstream::R6DataClient;
