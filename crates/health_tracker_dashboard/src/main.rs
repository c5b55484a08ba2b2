//! One-shot dashboard report.
//!
//! ```text
//! health-tracker-report
//! health-tracker-report missing physio --today 2024-01-14
//! health-tracker-report --database ./other.db dashboard
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use health_tracker_dashboard::{Config, DashboardAggregator};
use health_tracker_store::{DailyStore, SqliteDailyStore};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the health dashboard as JSON", long_about = None)]
struct Args {
    /// SQLite database file (overrides HEALTH_TRACKER_DATABASE_PATH)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Full dashboard summary
    Dashboard,
    /// Dates needing data entry for a scope
    Missing { scope: String },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Logs go to stderr so stdout stays valid JSON.
    let log_env = std::env::var("HEALTH_TRACKER_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(path) = args.database {
        config.database_path = path;
    }
    tracing::debug!(database = %config.database_path.display(), "opening store");

    let store: Arc<dyn DailyStore> = Arc::new(SqliteDailyStore::open(&config.database_path)?);
    let aggregator = DashboardAggregator::new(store, config.calendar);
    let today = args.today.unwrap_or_else(|| aggregator.calendar().today());

    let out = match args.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            serde_json::to_string_pretty(&aggregator.fetch_dashboard_on(today).await?)?
        }
        Command::Missing { scope } => {
            serde_json::to_string_pretty(&aggregator.missing_data_on(&scope, today).await?)?
        }
    };
    println!("{out}");
    Ok(())
}
