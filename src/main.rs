use clap::Parser;
use siege_stats::{BoardId, Config, PlayerIdentity, R6DataClient, StatsService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "siege_stats")]
#[command(about = "Compare or rank Rainbow Six Siege players", long_about = None)]
struct Cli {
    /// Players as name[:platform], platform one of uplay, psn, xbl
    #[arg(required = true, num_args = 2..)]
    players: Vec<PlayerIdentity>,

    /// Board to read, overriding R6_BOARD_ID
    #[arg(long, value_parser = BoardId::parse)]
    board: Option<BoardId>,

    /// Comma-separated fields to rank when more than two players are given
    #[arg(long, value_delimiter = ',')]
    fields: Option<Vec<String>>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "siege_stats=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let board = cli.board.unwrap_or(config.board);
    let players = cli.players;

    info!(%board, players = players.len(), "Fetching player stats");

    let provider = Arc::new(R6DataClient::new(&config)?);
    let service = StatsService::builder(provider).with_config(&config).build();

    // Two players get a head-to-head report; more get per-field rankings
    let output = if players.len() == 2 {
        let comparison = service
            .compare_players(&players[0], &players[1], board)
            .await?;
        serde_json::to_string_pretty(&comparison)?
    } else {
        let ranking = service
            .rank_players(&players, board, cli.fields.as_deref())
            .await?;
        serde_json::to_string_pretty(&ranking)?
    };

    println!("{}", output);
    Ok(())
}
