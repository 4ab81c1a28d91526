use thiserror::Error;

use super::models::{BoardId, FailureReason};

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Insufficient data for {player} on board {board}: {reason}")]
    InsufficientData {
        player: String,
        board: BoardId,
        reason: FailureReason,
    },

    #[error("Insufficient data: {successful} successful players, at least {required} required")]
    InsufficientPlayers { successful: usize, required: usize },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),
}
