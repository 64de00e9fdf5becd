//! `sift` command-line entrypoint.

use std::path::PathBuf;

use clap::Parser;
use mimalloc::MiMalloc;

use sift::config::Config;
use sift::pipeline::Pipeline;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Rank the passages of a document bundle for a persona and job, and summarize the best ones.
#[derive(Debug, Parser)]
#[command(name = "sift", version, about)]
struct Cli {
    /// Input directory containing `docs/`, `persona.json` and `job.json`.
    #[arg(long)]
    input: PathBuf,

    /// Output JSON file (parent directories are created).
    #[arg(long)]
    output: PathBuf,

    /// Number of passages to keep. Negative values keep none.
    #[arg(long = "top-k", alias = "top_k", allow_negative_numbers = true)]
    top_k: Option<i64>,

    /// Sentence embedding model directory (overrides SIFT_EMBEDDER_PATH).
    #[arg(long)]
    embedder_path: Option<PathBuf>,

    /// T5 summarization model directory (overrides SIFT_SUMMARIZER_PATH).
    #[arg(long)]
    summarizer_path: Option<PathBuf>,

    /// JSON keyword table (overrides SIFT_KEYWORDS_PATH).
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Size of the corpus-learned term set (overrides SIFT_DYNAMIC_TERMS).
    #[arg(long)]
    dynamic_terms: Option<usize>,
}

impl Cli {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(top_k) = self.top_k {
            config.top_k = usize::try_from(top_k).unwrap_or(0);
        }
        if let Some(ref path) = self.embedder_path {
            config.embedder_path = Some(path.clone());
        }
        if let Some(ref path) = self.summarizer_path {
            config.summarizer_path = Some(path.clone());
        }
        if let Some(ref path) = self.keywords {
            config.keywords_path = Some(path.clone());
        }
        if let Some(n) = self.dynamic_terms {
            config.dynamic_terms = n;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = cli.apply(Config::from_env()?);
    config.validate()?;

    tracing::info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        top_k = config.top_k,
        "sift starting"
    );

    let pipeline = Pipeline::from_config(&config)?;
    let result = pipeline.run_to_file(&cli.input, &cli.output)?;

    for ranked in &result.ranked {
        tracing::debug!(%ranked, "Top passage");
    }

    tracing::info!(sections = result.ranked.len(), "sift finished");
    Ok(())
}
