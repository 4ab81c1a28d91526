use super::catalog::METRIC_CATALOG;
use super::models::PlayerMetrics;
use super::reports::{
    Advantages, Competitiveness, MetricComparison, PairwiseReport, Scores, Winner,
};
use super::round2;

/// Head-to-head comparison of two players over every catalog metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonEngine;

impl ComparisonEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn compare(&self, player1: &PlayerMetrics, player2: &PlayerMetrics) -> PairwiseReport {
        let mut per_metric = Vec::with_capacity(METRIC_CATALOG.len());
        let mut scores = Scores::default();
        let mut advantages = Advantages::default();
        let mut ties = 0;

        for metric in &METRIC_CATALOG {
            let value1 = metric.value(player1);
            let value2 = metric.value(player2);
            let difference = value1 - value2;
            let winner = metric.winner(value1, value2);

            match winner {
                Winner::Player1 => {
                    scores.player1 += 1;
                    advantages.player1.push(metric.label.to_string());
                }
                Winner::Player2 => {
                    scores.player2 += 1;
                    advantages.player2.push(metric.label.to_string());
                }
                Winner::Tie => ties += 1,
            }

            per_metric.push((
                metric.key.to_string(),
                MetricComparison {
                    label: metric.label.to_string(),
                    value1,
                    value2,
                    difference: round2(difference),
                    percent_diff: (value2 != 0.0).then(|| round2(difference / value2 * 100.0)),
                    winner,
                },
            ));
        }

        let winner = if scores.player1 > scores.player2 {
            Winner::Player1
        } else if scores.player2 > scores.player1 {
            Winner::Player2
        } else {
            Winner::Tie
        };
        let score_difference = scores.player1.abs_diff(scores.player2);

        PairwiseReport {
            per_metric,
            winner,
            scores,
            advantages,
            competitiveness: Competitiveness::from_score_difference(score_difference),
            total_metrics_compared: METRIC_CATALOG.len() as u32,
            ties,
            score_difference,
        }
    }
}
