use anyhow::Context;
use clap::Parser;
use giftrec_encoder::{load_catalog, sample_catalog, Survey};
use giftrec_service::{RecommendationResponse, RecommendationService, ServiceConfig};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Recommend gifts from a catalog for a set of survey answers
#[derive(Parser, Debug)]
#[command(name = "giftrec")]
#[command(about = "Rank a gift catalog against survey answers", long_about = None)]
struct Args {
    /// Catalog JSON file (array of items). Uses the built-in seed catalog when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Survey answers as a JSON object, or @path to read them from a file
    #[arg(short, long, default_value = "{}")]
    survey: String,

    /// Number of recommendations to return
    #[arg(short = 'k', long, default_value_t = 3)]
    top: usize,

    /// Service configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report raw similarities instead of scores clamped to [0, 1]
    #[arg(long)]
    no_clamp: bool,

    /// Print the catalog's categories and exit
    #[arg(long)]
    categories: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn read_survey(arg: &str) -> anyhow::Result<Survey> {
    let raw = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading survey file {}", path))?,
        None => arg.to_string(),
    };
    serde_json::from_str(&raw).context("survey must be a JSON object of answers")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting giftrec v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => ServiceConfig::from_json_file(path)
            .with_context(|| format!("loading config {:?}", path))?,
        None => ServiceConfig::default(),
    };
    if args.no_clamp {
        config.clamp_scores = false;
    }

    let catalog = match &args.catalog {
        Some(path) => {
            info!("Catalog: {:?}", path);
            load_catalog(path).with_context(|| format!("loading catalog {:?}", path))?
        }
        None => {
            info!("Catalog: built-in seed set");
            sample_catalog()
        }
    };

    let service = RecommendationService::new(config)?;
    service.refresh(&catalog)?;

    if args.categories {
        println!("{}", serde_json::to_string_pretty(&service.categories())?);
        return Ok(());
    }

    let survey = read_survey(&args.survey)?;
    let snapshot = service.snapshot();
    let results = match &snapshot {
        Some(snapshot) => service.recommend_with(snapshot, &survey, args.top)?,
        None => Vec::new(),
    };
    let response = RecommendationResponse::new(
        snapshot.as_ref().map(|s| s.version()),
        results,
        snapshot.as_ref().map(|s| s.len()).unwrap_or(0),
    );

    info!("Returning {} recommendations", response.result.len());
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
