//! OctoFit Dashboard CLI
//!
//! Terminal consumer of the fetch lifecycle: fetches one or all of the
//! resource collections and renders them per the renderer contract
//! (error banner / table / empty-state message).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use octofit::fetch::{CollectionView, FetchController, FetchState};
use octofit::present;
use octofit::{ApiClient, Config, EndpointResolver, Resource};

#[derive(Parser)]
#[command(name = "octofit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OctoFit fitness dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (default: standard locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and display a collection
    Show {
        /// Resource name (activities, leaderboard, teams, users, workouts) or "all"
        #[arg(default_value = "all")]
        resource: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.deployment.api_url = Some(url.clone());
    }

    init_logging(&config);

    match cli.command {
        Commands::Show { resource } => {
            let resolver = EndpointResolver::new(&config.deployment);
            tracing::info!("API base: {}", resolver.base());

            let client = ApiClient::new(resolver, config.client.clone());
            let controller = FetchController::new(client);

            let resources: Vec<Resource> = if resource == "all" {
                Resource::ALL.to_vec()
            } else {
                vec![resource.parse()?]
            };

            let mut failures = 0;
            for resource in resources {
                let mut view = CollectionView::mount(&controller, resource);
                let state = view.settled().await;
                if !render(resource, &state, &cli.format) {
                    failures += 1;
                }
            }

            // One failed view never takes the others down with it.
            if failures > 0 {
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let content = octofit::config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("octofit={}", config.logging.level)),
    );

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Render one settled view. Returns false when the view failed.
fn render(resource: Resource, state: &FetchState, format: &str) -> bool {
    if let Some(message) = state.error_message() {
        eprintln!("Error loading {}: {}", resource, message);
        return false;
    }

    let records = state.records();

    if format == "json" {
        match serde_json::to_string_pretty(records) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                eprintln!("Error loading {}: {}", resource, e);
                return false;
            }
        }
        return true;
    }

    println!("== {} ==", resource);
    if records.is_empty() {
        let empty = present::empty_state(resource);
        println!("{} {}", empty.heading, empty.detail);
        println!();
        return true;
    }

    let headers = present::table_headers(resource);
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| present::table_row(resource, r))
        .collect();
    print_table(headers, &rows);
    println!();
    true
}

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", line.join("  "));
    println!("{}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
