use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::{round2, StatsError};

/// Game mode bucket the upstream segments statistics by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BoardId {
    Casual,
    Event,
    Warmup,
    Standard,
    Ranked,
}

impl BoardId {
    /// Parses a board identifier, rejecting anything outside the known modes.
    pub fn parse(value: &str) -> Result<Self, StatsError> {
        BoardId::from_str(value).map_err(|_| {
            let known: Vec<String> = BoardId::iter().map(|b| b.to_string()).collect();
            StatsError::Validation(format!(
                "Invalid board_id '{}'. Must be one of: {}",
                value,
                known.join(", ")
            ))
        })
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlatformFamily {
    Pc,
    Console,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlatformType {
    Uplay,
    Psn,
    Xbl,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Who to fetch statistics for. Per-player credentials take precedence over
/// whatever default the provider was configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub name_on_platform: String,
    pub platform_type: PlatformType,
    pub credentials: Option<Credentials>,
}

impl PlayerIdentity {
    pub fn new(name_on_platform: impl Into<String>, platform_type: PlatformType) -> Self {
        Self {
            name_on_platform: name_on_platform.into(),
            platform_type,
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        if self.name_on_platform.trim().is_empty() {
            return Err(StatsError::Validation(
                "Player must have a non-empty nameOnPlatform".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses `name[:platform]`; the platform defaults to uplay.
impl FromStr for PlayerIdentity {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, platform) = match s.rsplit_once(':') {
            Some((name, platform)) => {
                let platform = PlatformType::from_str(platform).map_err(|_| {
                    StatsError::Validation(format!(
                        "Invalid platformType '{}'. Must be one of: uplay, psn, xbl",
                        platform
                    ))
                })?;
                (name, platform)
            }
            None => (s, PlatformType::Uplay),
        };

        let identity = PlayerIdentity::new(name, platform);
        identity.validate()?;
        Ok(identity)
    }
}

/// Unvalidated per-player document as returned by the upstream `/stats` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawStatsDocument(pub Value);

impl From<Value> for RawStatsDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl RawStatsDocument {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Flat, normalized statistics for one player on one board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMetrics {
    pub rank: i64,
    pub max_rank: i64,
    pub rank_points: i64,
    pub max_rank_points: i64,
    pub kills: i64,
    pub deaths: i64,
    pub wins: i64,
    pub losses: i64,
    pub abandons: i64,
    pub kd_ratio: f64,
    pub win_rate: f64,
    pub total_matches: i64,
}

impl PlayerMetrics {
    /// Recomputes `kd_ratio`, `win_rate` and `total_matches` from the raw counts.
    pub fn with_derived_fields(mut self) -> Self {
        self.kd_ratio = if self.deaths > 0 {
            round2(self.kills as f64 / self.deaths as f64)
        } else {
            self.kills as f64
        };

        let decided = self.wins.saturating_add(self.losses);
        self.win_rate = if decided > 0 {
            round2(self.wins as f64 / decided as f64 * 100.0)
        } else {
            0.0
        };

        self.total_matches = decided.saturating_add(self.abandons);
        self
    }

    /// Looks up a metric by its camelCase key.
    pub fn value_of(&self, key: &str) -> Option<f64> {
        let value = match key {
            "rank" => self.rank as f64,
            "maxRank" => self.max_rank as f64,
            "rankPoints" => self.rank_points as f64,
            "maxRankPoints" => self.max_rank_points as f64,
            "kills" => self.kills as f64,
            "deaths" => self.deaths as f64,
            "wins" => self.wins as f64,
            "losses" => self.losses as f64,
            "abandons" => self.abandons as f64,
            "kdRatio" => self.kd_ratio,
            "winRate" => self.win_rate,
            "totalMatches" => self.total_matches as f64,
            _ => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentReason {
    NoProfile,
    NoBoard,
    NoFullProfile,
}

impl fmt::Display for AbsentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AbsentReason::NoProfile => "no platform profile found",
                AbsentReason::NoBoard => "no data found for board",
                AbsentReason::NoFullProfile => "no full profile found",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Present(PlayerMetrics),
    Absent(AbsentReason),
}

impl ExtractionOutcome {
    pub fn metrics(&self) -> Option<&PlayerMetrics> {
        match self {
            ExtractionOutcome::Present(metrics) => Some(metrics),
            ExtractionOutcome::Absent(_) => None,
        }
    }

    pub fn into_result(self) -> Result<PlayerMetrics, AbsentReason> {
        match self {
            ExtractionOutcome::Present(metrics) => Ok(metrics),
            ExtractionOutcome::Absent(reason) => Err(reason),
        }
    }
}

/// Why a player contributed no metrics to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
    Absent(AbsentReason),
    Transport(String),
}

impl From<AbsentReason> for FailureReason {
    fn from(reason: AbsentReason) -> Self {
        FailureReason::Absent(reason)
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Absent(reason) => write!(f, "{}", reason),
            FailureReason::Transport(message) => write!(f, "fetch failed: {}", message),
        }
    }
}

/// One settled player in a batch: either normalized metrics or the reason there are none.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub player: String,
    pub outcome: Result<PlayerMetrics, FailureReason>,
}

impl PlayerRecord {
    pub fn from_extraction(player: impl Into<String>, outcome: ExtractionOutcome) -> Self {
        Self {
            player: player.into(),
            outcome: outcome.into_result().map_err(FailureReason::from),
        }
    }

    pub fn transport_failure(player: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            outcome: Err(FailureReason::Transport(message.into())),
        }
    }
}
