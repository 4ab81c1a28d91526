use serde_json::Value;
use tracing::debug;

use super::models::{AbsentReason, BoardId, ExtractionOutcome, PlayerMetrics, RawStatsDocument};

const PLATFORM_PROFILES: &str = "platform_families_full_profiles";
const BOARD_PROFILES: &str = "board_ids_full_profiles";
const FULL_PROFILES: &str = "full_profiles";

/// Walks a raw stats document down to the metrics of a single board.
///
/// Only the first platform-family profile is considered. Missing structure
/// yields an `Absent` outcome; missing numbers read as zero.
pub fn extract(doc: &RawStatsDocument, board: BoardId) -> ExtractionOutcome {
    let Some(platform_profile) = first_entry(doc.as_value(), PLATFORM_PROFILES) else {
        debug!(%board, "No platform profile in stats document");
        return ExtractionOutcome::Absent(AbsentReason::NoProfile);
    };

    let board_profile = platform_profile
        .get(BOARD_PROFILES)
        .and_then(Value::as_array)
        .and_then(|boards| {
            boards
                .iter()
                .find(|entry| entry.get("board_id").and_then(Value::as_str) == Some(board.as_ref()))
        });
    let Some(board_profile) = board_profile else {
        debug!(%board, "No board profile in stats document");
        return ExtractionOutcome::Absent(AbsentReason::NoBoard);
    };

    let Some(full_profile) = first_entry(board_profile, FULL_PROFILES) else {
        debug!(%board, "No full profile for board");
        return ExtractionOutcome::Absent(AbsentReason::NoFullProfile);
    };

    let profile = full_profile.get("profile");
    let season = full_profile.get("season_statistics");
    let outcomes = season.and_then(|s| s.get("match_outcomes"));

    let metrics = PlayerMetrics {
        rank: read_count(profile, "rank"),
        max_rank: read_count(profile, "max_rank"),
        rank_points: read_count(profile, "rank_points"),
        max_rank_points: read_count(profile, "max_rank_points"),
        kills: read_count(season, "kills"),
        deaths: read_count(season, "deaths"),
        wins: read_count(outcomes, "wins"),
        losses: read_count(outcomes, "losses"),
        abandons: read_count(outcomes, "abandons"),
        ..PlayerMetrics::default()
    }
    .with_derived_fields();

    ExtractionOutcome::Present(metrics)
}

fn first_entry<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.get(key)?.as_array()?.first()
}

/// Reads an integer count. Fractional values round to the nearest integer and
/// out-of-range values clamp to the `i64` bounds; NaN and non-numbers read as 0.
fn read_count(node: Option<&Value>, key: &str) -> i64 {
    node.and_then(|n| n.get(key))
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f.round() as i64)))
        .unwrap_or_default()
}
