//! CLI for review sentiment analysis
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- analyze --text "Great product, highly recommend" --rating 5
//! cargo run -- report --input reviews.csv
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use review_insight::{
    analysis::AnalysisPipeline,
    classifier::{LocalRuleClassifier, RemoteClassifier},
    data::load_reviews,
    report::render_text_report,
    sentiment::SentimentScorer,
    utils::{load_config, AppConfig},
};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "review-insight")]
#[command(version = review_insight::VERSION)]
#[command(about = "Rule-based sentiment analysis for product reviews", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single review text
    Analyze {
        /// Review text
        #[arg(short, long)]
        text: String,

        /// Star rating (1-5)
        #[arg(short, long)]
        rating: Option<f64>,
    },

    /// Analyze a review file and print the corpus report
    Report {
        /// Input file (.csv or .json)
        #[arg(short, long)]
        input: PathBuf,

        /// Configuration file (.json, .toml, or .yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Use the remote classifier (falls back to local rules on failure)
        #[arg(long)]
        remote: bool,

        /// Write the report to a file instead of stdout only
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze { text, rating } => run_analyze(&text, rating),
        Commands::Report {
            input,
            config,
            remote,
            output,
        } => run_report(&input, config, remote, output).await,
    }
}

fn run_analyze(text: &str, rating: Option<f64>) -> Result<()> {
    let scorer = SentimentScorer::new();

    let (sentiment, confidence) = scorer.score_text(text, rating);
    let evidence = scorer.evidence(text, rating);

    println!("Text: {text}");
    if let Some(rating) = rating {
        println!("Rating: {rating}/5");
    }
    println!("Sentiment: {sentiment}");
    println!("Confidence: {:.1}%", confidence * 100.0);
    println!(
        "Evidence: positive={} negative={} neutral={}",
        evidence.positive, evidence.negative, evidence.neutral
    );

    Ok(())
}

async fn run_report(
    input: &PathBuf,
    config_path: Option<PathBuf>,
    remote_flag: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => AppConfig::default(),
    };
    if remote_flag {
        config.remote.enabled = true;
    }

    let pipeline = AnalysisPipeline::from_config(&config)?;
    let lexicon = pipeline.scorer().lexicon();
    let stats = lexicon.stats();
    info!(
        "Lexicon {}: {} positive / {} negative / {} neutral words, {} phrases",
        lexicon.version(),
        stats.positive_count,
        stats.negative_count,
        stats.neutral_count,
        stats.phrase_count
    );

    info!("Reading reviews from {}", input.display());
    let batch = load_reviews(input)?;
    info!(
        "Loaded {} reviews ({} rows skipped)",
        batch.reviews.len(),
        batch.skipped
    );
    if batch.reviews.is_empty() {
        warn!("No usable reviews found in input");
        return Ok(());
    }

    let run = if config.remote.enabled {
        let local = LocalRuleClassifier::with_scorer(pipeline.scorer().clone());
        match RemoteClassifier::new(config.remote.clone(), local) {
            Ok(remote) => {
                info!("Classifying with the remote API (local fallback armed)");
                pipeline.run_with(&remote, &batch.reviews).await
            }
            Err(e) => {
                warn!("Remote classifier unavailable ({e}); using local rules");
                pipeline.run(&batch.reviews)
            }
        }
    } else {
        pipeline.run(&batch.reviews)
    };

    let report = render_text_report(&run.summary);
    println!("{report}");

    if let Some(path) = output {
        std::fs::write(&path, &report)?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}
