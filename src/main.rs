//! Binary entry point for the Daily Wage Engine.
//!
//! Two modes: `serve` exposes the HTTP API for the external daily
//! scheduler to trigger, and `run-once` performs one synchronous batch
//! run, reporting success or failure through the process exit code.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wage_engine::api::{AppState, create_router};
use wage_engine::batch::{BatchOptions, BatchRunner};
use wage_engine::calculation::WageEngine;
use wage_engine::config::{ConfigLoader, WageRules};
use wage_engine::error::EngineResult;
use wage_engine::store::InMemoryStore;

/// Daily wage engine for gig-work partner attendance.
#[derive(Parser)]
#[command(name = "wage-engine", version, about = "Daily wage engine for gig-work partners")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API (the external scheduler hits POST /run)
    Serve {
        /// Path to the rules YAML file; built-in table when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Path to a JSON seed fixture for the in-memory store
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: SocketAddr,
    },

    /// Run one batch synchronously and exit
    RunOnce {
        /// Path to the rules YAML file; built-in table when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Path to a JSON seed fixture for the in-memory store
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Date to run the batch for; defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn load_rules(config: Option<PathBuf>) -> EngineResult<WageRules> {
    match config {
        Some(path) => Ok(ConfigLoader::load(path)?.into_rules()),
        None => Ok(WageRules::default()),
    }
}

fn load_store(seed: Option<PathBuf>) -> EngineResult<InMemoryStore> {
    match seed {
        Some(path) => InMemoryStore::from_seed_file(path),
        None => Ok(InMemoryStore::new()),
    }
}

async fn serve(config: Option<PathBuf>, seed: Option<PathBuf>, bind: SocketAddr) -> i32 {
    let (rules, store) = match (load_rules(config), load_store(seed)) {
        (Ok(rules), Ok(store)) => (rules, store),
        (Err(e), _) | (_, Err(e)) => {
            error!(error = %e, "startup failed");
            return 1;
        }
    };

    let state = AppState::new(
        rules,
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store),
        BatchOptions::default(),
    );
    let router = create_router(state);

    let listener = match tokio::net::TcpListener::bind(bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %bind, "failed to bind");
            return 1;
        }
    };

    info!(%bind, "serving daily wage engine API");
    if let Err(e) = axum::serve(listener, router).await {
        error!(error = %e, "server error");
        return 1;
    }
    0
}

async fn run_once(config: Option<PathBuf>, seed: Option<PathBuf>, date: Option<NaiveDate>) -> i32 {
    let (rules, store) = match (load_rules(config), load_store(seed)) {
        (Ok(rules), Ok(store)) => (rules, store),
        (Err(e), _) | (_, Err(e)) => {
            error!(error = %e, "startup failed");
            return 1;
        }
    };

    let runner = BatchRunner::new(
        WageEngine::new(rules),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store),
        BatchOptions::default(),
    );

    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    match runner.run_for_date(date).await {
        Ok(summary) => {
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!(error = %e, "failed to render summary");
                    return 1;
                }
            }
            if summary.is_clean() { 0 } else { 1 }
        }
        Err(e) => {
            error!(error = %e, "batch run failed");
            1
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Serve { config, seed, bind } => serve(config, seed, bind).await,
        Commands::RunOnce { config, seed, date } => run_once(config, seed, date).await,
    };
    process::exit(code);
}
