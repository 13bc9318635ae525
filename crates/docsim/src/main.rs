mod input;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use docsim_common::{logger, AppConfig, Document, StopWordList, StopWords, Weighting};
use docsim_server::types::SimilarityResponse;
use docsim_similarity::{Comparison, SimilarityPipeline};
use std::path::PathBuf;

use crate::input::TextSource;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "docsim")]
#[command(about = "docsim - similarity score between two documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents and print their similarity
    ///
    /// Documents without a file path are prompted for on stdin.
    Compare(CompareArgs),

    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Args, Default)]
struct CompareArgs {
    /// First document file
    doc1: Option<PathBuf>,

    /// Second document file
    doc2: Option<PathBuf>,

    /// Stop-word removal (enabled, disabled)
    #[arg(long)]
    stop_words: Option<StopWords>,

    /// Stop-word list (minimal, english)
    #[arg(long)]
    stop_word_list: Option<StopWordList>,

    /// Weighting scheme (tfidf, sublinear-tfidf, count)
    #[arg(long)]
    weighting: Option<Weighting>,

    /// Longest token n-gram counted as a term
    #[arg(long)]
    max_ngram: Option<usize>,

    /// Decimals in the printed score
    #[arg(long)]
    precision: Option<u32>,

    /// Print the comparison as JSON
    #[arg(long)]
    json: bool,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl CompareArgs {
    /// Apply command-line overrides on top of the environment configuration
    fn apply(&self, config: &mut AppConfig) {
        if let Some(stop_words) = self.stop_words {
            config.similarity.stop_words = stop_words;
        }
        if let Some(list) = self.stop_word_list {
            config.similarity.stop_word_list = list;
        }
        if let Some(weighting) = self.weighting {
            config.similarity.weighting = weighting;
        }
        if let Some(max_ngram) = self.max_ngram {
            config.similarity.max_ngram = max_ngram;
        }
        if let Some(precision) = self.precision {
            config.score_precision = precision;
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn run_compare(args: CompareArgs) -> Result<()> {
    logger::setup_console_logging(args.log_level())?;

    let mut config = AppConfig::from_env()?;
    args.apply(&mut config);
    config.validate()?;

    let pipeline = SimilarityPipeline::new(config.similarity.clone())?;

    let first = TextSource::from_arg(args.doc1.clone(), Document::First);
    let second = TextSource::from_arg(args.doc2.clone(), Document::Second);

    let output = compare_sources(&pipeline, &first, &second, config.score_precision, args.json)?;
    println!("{}", output);

    Ok(())
}

/// Read both documents, score them and render the result for stdout
fn compare_sources(
    pipeline: &SimilarityPipeline,
    first: &TextSource,
    second: &TextSource,
    precision: u32,
    json: bool,
) -> Result<String> {
    let first = first.read()?;
    let second = second.read()?;

    let comparison = pipeline.compare_bytes(&first, &second)?;
    tracing::info!(
        "Compared {} and {} bytes: {} terms",
        first.len(),
        second.len(),
        comparison.vocabulary_size
    );

    render(&comparison, precision, json)
}

fn render(comparison: &Comparison, precision: u32, json: bool) -> Result<String> {
    if json {
        let response = SimilarityResponse {
            similarity: comparison.score.rounded(precision),
            doc1_tokens: comparison.first_tokens,
            doc2_tokens: comparison.second_tokens,
            vocabulary_size: comparison.vocabulary_size,
        };
        Ok(serde_json::to_string_pretty(&response)?)
    } else {
        Ok(format!(
            "Similarity score: {:.*}",
            precision as usize,
            comparison.score.rounded(precision)
        ))
    }
}

async fn run_server(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    config.validate()?;

    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("docsim starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Log dir: {}", config.log_dir.display());

    println!("Server listening on http://{}", config.server_bind_address());

    docsim_server::start_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Compare(args)) => run_compare(args),
        Some(Commands::Serve { host, port }) => run_server(host, port).await,
        // Bare invocation prompts for both documents
        None => run_compare(CompareArgs::default()),
    }
}
