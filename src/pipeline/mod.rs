//! End-to-end run over one input bundle.
//!
//! 1. list and extract the documents (unreadable ones are skipped);
//! 2. embed the persona/job query;
//! 3. gather and embed the candidate set;
//! 4. rank it and keep the top K;
//! 5. summarize each ranked passage;
//! 6. assemble the output document.

mod error;
mod input;


use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::boost::{BoostEngine, KeywordTable};
use crate::config::Config;
use crate::corpus::CorpusAggregator;
use crate::embedding::{Embedder, SentenceEmbedder};
use crate::extract::{DocumentLoader, PageExtractor, load_documents};
use crate::output::{Metadata, OutputDocument, write_output};
use crate::scoring::{RankedResult, Ranker};
use crate::summarize::{Summarizer, TextSummarizer};

pub use error::PipelineError;
pub use input::{
    DOCS_DIR, JOB_FILE, PERSONA_FILE, PipelineInput, QUERY_STEM, build_query, list_documents,
    select_job, select_persona, value_text,
};

/// Run-level knobs that are not owned by a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub top_k: usize,
    pub summary_max_len: usize,
    pub summary_min_len: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        let config = Config::default();
        Self::from(&config)
    }
}

impl From<&Config> for PipelineSettings {
    fn from(config: &Config) -> Self {
        Self {
            top_k: config.top_k,
            summary_max_len: config.summary_max_len,
            summary_min_len: config.summary_min_len,
        }
    }
}

/// Ranked passages of one run plus their summaries.
#[derive(Debug)]
pub struct RunResult {
    pub ranked: Vec<RankedResult>,
    pub output: OutputDocument,
}

pub struct Pipeline<E, S, X = DocumentLoader> {
    embedder: E,
    summarizer: S,
    extractor: X,
    aggregator: CorpusAggregator,
    ranker: Ranker,
    settings: PipelineSettings,
}

impl Pipeline<SentenceEmbedder, TextSummarizer, DocumentLoader> {
    /// Loads the keyword table and both models named by `config`.
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        config.validate()?;

        let start = Instant::now();
        let table = match config.keywords_path {
            Some(ref path) => {
                let table = KeywordTable::from_json_file(path)?;
                info!(
                    path = %path.display(),
                    buckets = table.buckets.len(),
                    "Loaded keyword table"
                );
                table
            }
            None => KeywordTable::travel(),
        };

        let embedder = SentenceEmbedder::load(config.embedder_config())?;
        let summarizer = TextSummarizer::load(config.summarizer_config())?;

        info!(
            embedder_stub = embedder.is_stub(),
            summarizer_stub = summarizer.is_stub(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Pipeline ready"
        );

        Ok(Self::new(embedder, summarizer, DocumentLoader::new())
            .with_ranker(Ranker::new(BoostEngine::new(table, config.dynamic_terms)))
            .with_settings(PipelineSettings::from(config)))
    }
}

impl<E, S, X> Pipeline<E, S, X>
where
    E: Embedder,
    S: Summarizer,
    X: PageExtractor,
{
    pub fn new(embedder: E, summarizer: S, extractor: X) -> Self {
        Self {
            embedder,
            summarizer,
            extractor,
            aggregator: CorpusAggregator::default(),
            ranker: Ranker::default(),
            settings: PipelineSettings::default(),
        }
    }

    pub fn with_ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_settings(mut self, settings: PipelineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn run(&self, input: &PipelineInput) -> Result<RunResult, PipelineError> {
        let start = Instant::now();

        let report = load_documents(&input.docs_dir, input.files.as_slice(), &self.extractor);
        debug!(documents = ?report.document_names(), "Extracted documents");

        let query = input.query();
        debug!(query = %query, "Built query");
        let query_vector = self.embedder.embed(&query)?;

        let passages = self.aggregator.gather(&report.documents, &self.embedder)?;
        let ranked = self
            .ranker
            .rank(&query_vector, passages, self.settings.top_k)?;

        let summarize_start = Instant::now();
        let summaries = ranked
            .iter()
            .map(|result| {
                self.summarizer.summarize(
                    &result.passage.body,
                    self.settings.summary_max_len,
                    self.settings.summary_min_len,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            count = summaries.len(),
            elapsed_ms = summarize_start.elapsed().as_millis() as u64,
            "Summaries generated"
        );

        let metadata = Metadata::new(input.files.clone(), input.persona.clone(), input.job.clone());
        let output = OutputDocument::new(metadata, &ranked, summaries);

        info!(
            documents = input.files.len(),
            skipped = report.skipped.len(),
            ranked = ranked.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Pipeline run complete"
        );

        Ok(RunResult { ranked, output })
    }

    /// Loads the bundle at `input_dir`, runs, and writes JSON to `output_path`.
    pub fn run_to_file(&self, input_dir: &Path, output_path: &Path) -> Result<RunResult, PipelineError> {
        let input = PipelineInput::load(input_dir)?;
        let result = self.run(&input)?;
        write_output(output_path, &result.output)?;
        Ok(result)
    }
}
