use serde_json::{json, Value};

use siege_stats::RawStatsDocument;

// ============================================================================
// Raw upstream document builder
// ============================================================================

/// Builds documents shaped like the upstream `/stats` response.
pub struct StatsDocumentBuilder {
    board_id: String,
    profile: Value,
    kills: i64,
    deaths: i64,
    wins: i64,
    losses: i64,
    abandons: i64,
}

impl StatsDocumentBuilder {
    pub fn ranked() -> Self {
        Self::for_board("ranked")
    }

    pub fn for_board(board_id: &str) -> Self {
        Self {
            board_id: board_id.to_string(),
            profile: json!({ "rank": 0, "max_rank": 0, "rank_points": 0, "max_rank_points": 0 }),
            kills: 0,
            deaths: 0,
            wins: 0,
            losses: 0,
            abandons: 0,
        }
    }

    pub fn kills_deaths(mut self, kills: i64, deaths: i64) -> Self {
        self.kills = kills;
        self.deaths = deaths;
        self
    }

    pub fn outcomes(mut self, wins: i64, losses: i64, abandons: i64) -> Self {
        self.wins = wins;
        self.losses = losses;
        self.abandons = abandons;
        self
    }

    pub fn rank(mut self, rank: i64, max_rank: i64, rank_points: i64) -> Self {
        self.profile = json!({
            "rank": rank,
            "max_rank": max_rank,
            "rank_points": rank_points,
            "max_rank_points": rank_points
        });
        self
    }

    pub fn build(self) -> RawStatsDocument {
        RawStatsDocument(json!({
            "profiles": [],
            "platform_families_full_profiles": [{
                "platform_family": "pc",
                "board_ids_full_profiles": [{
                    "board_id": self.board_id,
                    "full_profiles": [{
                        "profile": self.profile,
                        "season_statistics": {
                            "kills": self.kills,
                            "deaths": self.deaths,
                            "match_outcomes": {
                                "wins": self.wins,
                                "losses": self.losses,
                                "abandons": self.abandons
                            }
                        }
                    }]
                }]
            }]
        }))
    }
}
