//! meal-suggest: rank food-name suggestions from a meal catalog.

use clap::{Parser, Subcommand};
use meallog_cli::output::{format_count, format_duration, format_suggestion, Status};
use meallog_core::config::Config;
use meallog_core::error::exit_codes;
use meallog_suggest::{clamp_limit, Catalog, SuggestionRanker};
use meallog_telemetry::{metrics, Timer};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "meal-suggest")]
#[command(about = "Food-name autocomplete over a meal catalog")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to .meallog.toml or the user config dir)
    #[arg(long, global = true, env = "MEALLOG_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print collected metrics as JSON to stderr before exiting
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog entries for a query
    Rank {
        /// JSON catalog file
        #[arg(long, short)]
        catalog: PathBuf,
        /// Text typed so far
        query: String,
        /// Maximum suggestions; zero or negative prints none
        #[arg(long, short = 'n', allow_negative_numbers = true)]
        limit: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a catalog and the active configuration
    Check {
        /// JSON catalog file
        #[arg(long, short)]
        catalog: PathBuf,
    },
    /// Print the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();
    let show_metrics = cli.metrics;
    let json_errors = matches!(cli.command, Commands::Rank { json: true, .. });

    let result = run(cli);
    if show_metrics {
        eprintln!("{:#}", metrics().export_json());
    }

    if let Err(err) = result {
        let core = err.downcast_ref::<meallog_core::Error>();
        let report = core
            .filter(|_| json_errors)
            .and_then(|e| serde_json::to_string_pretty(&e.to_report()).ok());
        match report {
            Some(report) => println!("{}", report),
            None => Status::error(&err.to_string()),
        }
        std::process::exit(core.map_or(exit_codes::FAILURE, meallog_core::Error::exit_code));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    config.validate()?;

    let mut telemetry = config.schema.telemetry.clone();
    if cli.verbose {
        telemetry.log_level = "debug".to_string();
    }
    meallog_telemetry::init_with_config(&telemetry)?;

    match cli.command {
        Commands::Rank {
            catalog,
            query,
            limit,
            json,
        } => rank(&config, &catalog, &query, limit, json),
        Commands::Check { catalog } => check(&config, &catalog),
        Commands::Config => show_config(&config),
    }
}

fn rank(
    config: &Config,
    catalog_path: &Path,
    query: &str,
    limit: Option<i64>,
    json: bool,
) -> anyhow::Result<()> {
    let ranker = SuggestionRanker::new(config.schema.suggest)?;
    let catalog = Catalog::load(catalog_path)?;
    let limit = limit.map_or(ranker.config().limit, clamp_limit);

    metrics().increment("suggest.rank");
    let timer = Timer::start("suggest.rank.ms");
    let ranked = ranker.rank_with_limit(query, catalog.entries(), limit);
    let elapsed = timer.stop();

    tracing::info!(
        query,
        limit,
        results = ranked.len(),
        elapsed = %format_duration(elapsed),
        "Ranked suggestions"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else if ranked.is_empty() {
        Status::warning(&format!("No suggestions for {:?}", query));
    } else {
        for (i, entry) in ranked.iter().enumerate() {
            println!("{}", format_suggestion(i + 1, &entry.name, entry.frequency));
        }
    }

    Ok(())
}

fn check(config: &Config, catalog_path: &Path) -> anyhow::Result<()> {
    meallog_telemetry::timed_span!("catalog.check");

    let catalog = Catalog::load(catalog_path)?;
    for warning in catalog.validation().warnings() {
        Status::warning(&warning.to_string());
    }

    let categories: BTreeSet<&str> = catalog
        .entries()
        .iter()
        .filter_map(|e| e.category.as_deref())
        .collect();

    Status::success(&format!(
        "{} OK: {}, {}",
        catalog_path.display(),
        format_count(catalog.len(), "entry", "entries"),
        format_count(categories.len(), "category", "categories"),
    ));
    Status::info(&format!("Configuration: {}", describe_source(config)));

    Ok(())
}

fn show_config(config: &Config) -> anyhow::Result<()> {
    Status::header(&format!("Configuration ({})", describe_source(config)));
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn describe_source(config: &Config) -> String {
    config
        .path
        .as_ref()
        .map_or_else(|| "defaults".to_string(), |p| p.display().to_string())
}
