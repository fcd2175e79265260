use clap::{Parser, Subcommand};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sentiment_sniffer::{
    analyze_text, default_feed_pool, default_text_analyzer, read_batch_texts, AnalysisResult,
    BatchAggregator, Error, FeedResult, FeedSampler, SentimentBreakdown,
    DEFAULT_FEED_SAMPLER_CONFIG, SAMPLE_REVIEWS_CSV,
};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Five-level sentiment classification and aspect extraction.
#[derive(Debug, Parser)]
#[command(name = "sentiment-sniffer-cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a single text (read from stdin when omitted)
    Text { text: Option<String> },

    /// Sample and analyze the simulated social feed
    Feed {
        /// Search keyword or username (does not affect the simulated sample)
        #[arg(long, default_value = "@elonmusk")]
        query: String,

        /// Maximum number of distinct posts
        #[arg(long, default_value_t = DEFAULT_FEED_SAMPLER_CONFIG.default_limit)]
        limit: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Analyze every row of a review table (read from stdin when omitted)
    Batch {
        file: Option<PathBuf>,

        /// Analyze the built-in sample reviews instead
        #[arg(long, conflicts_with = "file")]
        sample: bool,
    },
}

#[derive(Serialize)]
struct FeedReport {
    #[serde(flatten)]
    feed: FeedResult,
    analyses: Vec<AnalysisResult>,
}

#[derive(Serialize)]
struct BatchReport {
    results: Vec<AnalysisResult>,
    breakdown: SentimentBreakdown,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Text { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };

            print_json(&analyze_text(&text))
        }
        Command::Feed { query, limit, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let analyzer = default_text_analyzer();
            let feed = FeedSampler::new(analyzer, default_feed_pool(), DEFAULT_FEED_SAMPLER_CONFIG)
                .sample_feed(&query, limit, &mut rng);

            // Each sampled post is analyzed again for per-post display
            let analyses = feed
                .tweets
                .iter()
                .map(|post| analyzer.analyze(&post.text))
                .collect();

            print_json(&FeedReport { feed, analyses })
        }
        Command::Batch { file, sample } => {
            let csv = if sample {
                SAMPLE_REVIEWS_CSV.to_string()
            } else if let Some(path) = file {
                info!("Reading reviews from {:?}", path);
                fs::read_to_string(path)?
            } else {
                read_stdin()?
            };

            let texts = read_batch_texts(&csv)?;
            if texts.is_empty() {
                return Err(Error::Other(
                    "No valid text found. Try the sample reviews (--sample).".to_string(),
                ));
            }

            info!("Analyzing {} reviews...", texts.len());

            let results =
                BatchAggregator::new(default_text_analyzer()).analyze_batch(&texts[..]);
            let breakdown = BatchAggregator::summarize(&results);

            print_json(&BatchReport { results, breakdown })
        }
    }
}

// Read the input text from stdin
fn read_stdin() -> Result<String, Error> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    Ok(input)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Other(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);

    Ok(())
}
