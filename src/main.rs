use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use player_compare::calculate::{ComparisonView, PlayerDetailView};
use player_compare::config::AppConfig;
use player_compare::export::{export_snapshot, SystemClock};
use player_compare::models::{ComparisonSet, PlayerId, PlayerStatRecord};
use player_compare::share::deliver_export;
use player_compare::storage::{
    read_players, read_recent_form, select_players, DirFileSink, StorageConfig,
};

#[derive(Parser)]
#[command(name = "player-compare")]
#[command(about = "Football player stat comparison")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary and progress bars of one player
    Detail {
        /// Player id
        #[arg(long)]
        id: PlayerId,
    },

    /// Compare two or more players
    Compare {
        /// Player ids in display order (e.g. "7,11")
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<PlayerId>,
    },

    /// Export a comparison snapshot document
    Export {
        /// Player ids in display order (e.g. "7,11")
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<PlayerId>,

        /// Output directory (overrides the config file)
        #[arg(long)]
        out_dir: Option<String>,
    },

    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(Path::new(&cli.config))
        .with_context(|| format!("Failed to load config from {}", cli.config))?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = PathBuf::from(dir);
    }

    // Initialize tracing
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting player-compare v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Detail { id } => {
            let players = read_players(&storage)?;
            let player = players
                .iter()
                .find(|p| p.id == id)
                .with_context(|| format!("Player {} not found", id))?;
            let recent_form = read_recent_form(&storage, id)?;
            print_detail(&PlayerDetailView::build(player, recent_form));
        }
        Commands::Compare { ids } => {
            let set = load_comparison(&storage, &ids)?;
            print_comparison(&ComparisonView::build(&set));
        }
        Commands::Export { ids, out_dir } => {
            let set = load_comparison(&storage, &ids)?;
            let dir = out_dir.map(PathBuf::from).unwrap_or_else(|| config.export_dir.clone());
            let sink = DirFileSink::new(dir);

            let export = export_snapshot(&set, &SystemClock);
            deliver_export(&export, &sink)?;
            println!("Saved {}", sink.path_for(&export.filename).display());
        }
        Commands::Serve { host, port } => {
            let players = read_players(&storage)?;
            tracing::info!("Loaded {} player records", players.len());

            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = player_compare::api::state::AppState {
                players: Arc::new(players),
                storage: Arc::new(storage),
                config: Arc::new(config),
            };
            let app = player_compare::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

fn load_comparison(storage: &StorageConfig, ids: &[PlayerId]) -> Result<ComparisonSet> {
    let players: Vec<PlayerStatRecord> = read_players(storage)?;
    let selected = select_players(&players, ids)?;
    Ok(ComparisonSet::new(selected)?)
}

fn print_detail(view: &PlayerDetailView) {
    let player = &view.player;
    let summary = &view.summary;

    println!("\n=== {} ({}) ===", player.name, view.initials);
    println!("Team:             {}", player.team);
    println!("Position:         {} ({})", player.position, view.position_group);
    println!("Rating:           {:.1}", player.stats.rating);
    println!(
        "Goals:            {} ({:.2} per match)",
        summary.goals, summary.goals_per_match
    );
    println!(
        "Assists:          {} ({:.2} per match)",
        summary.assists, summary.assists_per_match
    );
    println!(
        "G+A:              {} ({:.2} per match)",
        summary.goal_contributions, summary.goal_contributions_per_match
    );
    println!(
        "Minutes:          {} ({:.0} per match)",
        summary.minutes, summary.minutes_per_match
    );

    println!();
    for bar in &view.bars {
        println!("{:<24} {:>8.1} {:>6.1}%", bar.label, bar.value, bar.percent);
    }

    if !view.recent_form.is_empty() {
        println!("\nRecent form:");
        for point in &view.recent_form {
            println!(
                "  Match {:>2}: rating {:.1}, {} goals, {} assists",
                point.match_number, point.rating, point.goals, point.assists
            );
        }
    }
}

fn print_comparison(view: &ComparisonView) {
    let names: Vec<&str> = view.players.iter().map(|p| p.name.as_str()).collect();
    println!("\n=== {} ===", names.join(" vs "));

    println!("\nBar chart:");
    for row in &view.bar_series {
        println!("  {:<20} {}", row.stat, format_values(&row.values));
    }

    println!("\nRadar (normalized):");
    for row in &view.radar_series {
        println!("  {:<20} {}", row.stat, format_values(&row.values));
    }

    println!("\nDetailed comparison:");
    for row in &view.table {
        println!(
            "  {:<26} {}  -> {}",
            row.label,
            format_values(&row.values),
            row.winner_label
        );
    }

    if let Some(rows) = &view.head_to_head {
        println!("\nHead to head:");
        for row in rows {
            println!(
                "  {} {:<22} {:>8.1} ({:>5.1}%)  {:>8.1} ({:>5.1}%)",
                row.icon, row.label, row.values[0], row.shares[0], row.values[1], row.shares[1]
            );
        }
    }
}

fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:>8.1}", v))
        .collect::<Vec<_>>()
        .join(" ")
}
