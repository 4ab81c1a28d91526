mod utils;
use utils::{player, StatsDocumentBuilder, TestSetup};

use std::sync::Arc;

use siege_stats::{
    extract, AbsentReason, BoardId, ComparisonEngine, Config, ExtractionOutcome, FailureReason,
    PlayerRecord, R6DataClient, RankingEngine, StatsError, StatsService, Winner, METRIC_CATALOG,
};

#[tokio::test]
async fn equal_kd_ratio_is_a_tie() {
    let setup = TestSetup::with_documents(vec![
        ("X", StatsDocumentBuilder::ranked().kills_deaths(100, 50).build()),
        ("Y", StatsDocumentBuilder::ranked().kills_deaths(80, 40).build()),
    ])
    .await;

    let result = setup
        .service
        .compare_players(&player("X"), &player("Y"), BoardId::Ranked)
        .await
        .expect("both players have ranked data");

    let kd = result
        .comparison
        .metric("kdRatio")
        .expect("kdRatio is always compared");
    assert_eq!(kd.value1, 2.0);
    assert_eq!(kd.value2, 2.0);
    assert_eq!(kd.winner, Winner::Tie);
}

#[tokio::test]
async fn ranking_with_one_failed_fetch_averages_successes_only() {
    let setup = TestSetup::with_documents(vec![
        ("alpha", StatsDocumentBuilder::ranked().kills_deaths(120, 60).build()),
        ("charlie", StatsDocumentBuilder::ranked().kills_deaths(80, 40).build()),
    ])
    .await;
    setup.fail_fetch("bravo", "connection refused").await;

    let fields = vec!["kills".to_string()];
    let ranking = setup
        .service
        .rank_players(
            &[player("alpha"), player("bravo"), player("charlie")],
            BoardId::Ranked,
            Some(&fields),
        )
        .await
        .expect("two successes meet the default minimum");

    let report = ranking.report;
    let kills = report.field("kills").expect("kills was requested");
    assert_eq!(kills.rankings.len(), 2, "only successes are ranked");
    assert_eq!(kills.average, 100.0);
    assert_eq!(kills.highest.player, "alpha");
    assert_eq!(kills.lowest.player, "charlie");

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].player, "bravo");
    assert_eq!(report.metadata.total_players, 3);
    assert_eq!(report.metadata.successful_fetches, 2);
    assert_eq!(report.metadata.failed_fetches, 1);
}

#[tokio::test]
async fn comparison_fails_when_second_player_lacks_board() {
    let setup = TestSetup::with_documents(vec![
        ("alpha", StatsDocumentBuilder::ranked().kills_deaths(50, 25).build()),
        ("bravo", StatsDocumentBuilder::for_board("casual").kills_deaths(50, 25).build()),
    ])
    .await;

    let err = setup
        .service
        .compare_players(&player("alpha"), &player("bravo"), BoardId::Ranked)
        .await
        .expect_err("bravo has no ranked board");

    match &err {
        StatsError::InsufficientData {
            player,
            board,
            reason,
        } => {
            assert_eq!(player, "bravo");
            assert_eq!(*board, BoardId::Ranked);
            assert_eq!(*reason, FailureReason::Absent(AbsentReason::NoBoard));
        }
        other => panic!("Expected insufficient data, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("bravo"));
    assert!(message.contains("ranked"));
}

#[tokio::test]
async fn ranking_below_minimum_raises_instead_of_reporting() {
    let setup = TestSetup::with_documents(vec![(
        "alpha",
        StatsDocumentBuilder::ranked().kills_deaths(50, 25).build(),
    )])
    .await;
    setup.fail_fetch("bravo", "timed out").await;

    let result = setup
        .service
        .rank_players(&[player("alpha"), player("bravo")], BoardId::Ranked, None)
        .await;

    assert!(matches!(
        result,
        Err(StatsError::InsufficientPlayers {
            successful: 1,
            required: 2
        })
    ));
}

#[tokio::test]
async fn ranking_ties_keep_request_order() {
    let setup = TestSetup::with_documents(vec![
        ("first", StatsDocumentBuilder::ranked().outcomes(10, 5, 0).build()),
        ("second", StatsDocumentBuilder::ranked().outcomes(10, 5, 0).build()),
        ("third", StatsDocumentBuilder::ranked().outcomes(12, 5, 0).build()),
    ])
    .await;

    let ranking = setup
        .service
        .rank_players(
            &[player("second"), player("first"), player("third")],
            BoardId::Ranked,
            None,
        )
        .await
        .unwrap();

    let wins: Vec<&str> = ranking
        .report
        .field("wins")
        .unwrap()
        .rankings
        .iter()
        .map(|entry| entry.player.as_str())
        .collect();
    assert_eq!(wins, vec!["third", "second", "first"]);
}

#[test]
fn engines_compose_over_extracted_documents() {
    let strong = StatsDocumentBuilder::ranked()
        .kills_deaths(300, 100)
        .outcomes(40, 10, 0)
        .rank(30, 32, 4200)
        .build();
    let weak = StatsDocumentBuilder::ranked()
        .kills_deaths(100, 100)
        .outcomes(10, 40, 3)
        .rank(18, 20, 2300)
        .build();

    let strong_metrics = extract(&strong, BoardId::Ranked).into_result().unwrap();
    let weak_metrics = extract(&weak, BoardId::Ranked).into_result().unwrap();

    let report = ComparisonEngine::new().compare(&strong_metrics, &weak_metrics);
    assert_eq!(report.winner, Winner::Player1);
    assert_eq!(
        report.scores.player1 + report.scores.player2 + report.ties,
        METRIC_CATALOG.len() as u32
    );

    let records = vec![
        PlayerRecord::from_extraction("strong", ExtractionOutcome::Present(strong_metrics)),
        PlayerRecord::from_extraction("weak", extract(&weak, BoardId::Casual)),
        PlayerRecord::from_extraction("weak-ranked", ExtractionOutcome::Present(weak_metrics)),
    ];
    let fields = vec!["kd_ratio".to_string(), "winRate".to_string()];
    let ranking = RankingEngine::default()
        .rank(&records, Some(&fields))
        .unwrap();

    assert_eq!(ranking.field("kd_ratio").unwrap().highest.value, 3.0);
    assert_eq!(ranking.field("winRate").unwrap().lowest.value, 20.0);
    assert_eq!(
        ranking.failures[0].reason,
        FailureReason::Absent(AbsentReason::NoBoard)
    );
}

#[tokio::test]
async fn reports_serialize_for_presentation() {
    let setup = TestSetup::with_documents(vec![
        ("alpha", StatsDocumentBuilder::ranked().kills_deaths(10, 0).build()),
        ("bravo", StatsDocumentBuilder::ranked().build()),
    ])
    .await;

    let result = setup
        .service
        .compare_players(&player("alpha"), &player("bravo"), BoardId::Ranked)
        .await
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["player1"]["stats"]["kdRatio"], 10.0);
    assert!(json["comparison"]["perMetric"]["kills"]["percentDiff"].is_null());
    assert_eq!(json["context"]["board"], "ranked");
}

#[tokio::test]
async fn missing_credentials_abort_both_operations() {
    let client = Arc::new(R6DataClient::new(&Config::default()).expect("default config builds"));
    let service = StatsService::builder(client).build();

    let comparison = service
        .compare_players(&player("alpha"), &player("bravo"), BoardId::Ranked)
        .await;
    assert!(matches!(comparison, Err(StatsError::Validation(_))));

    let ranking = service
        .rank_players(
            &[player("alpha"), player("bravo"), player("charlie")],
            BoardId::Ranked,
            None,
        )
        .await;
    assert!(matches!(ranking, Err(StatsError::Validation(_))));
}
