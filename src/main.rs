use anyhow::{Context, Result};
use clap::Parser;
use gramrank::index::{InvertedIndex, IndexStats, load_corpus, stats};
use gramrank::output::{self, ColorWhen};
use gramrank::query::{CoverStrategy, MissingGramPolicy, Ranker};
use gramrank::utils::SearchConfig;
use gramrank::utils::progress;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "GRAMRANK_LOG";

#[derive(Parser)]
#[command(name = "gramrank")]
#[command(version)]
#[command(about = "Rank documents by proximity of query terms over character m-grams")]
struct Cli {
    /// Folder of documents; each file is one document, in file-name order
    folder: PathBuf,

    /// Query terms
    query: Vec<String>,

    /// Gram width (overrides the config file)
    #[arg(short, long)]
    mgram: Option<usize>,

    /// Number of results to show (overrides the config file)
    #[arg(short, long)]
    nresults: Option<usize>,

    /// How query terms combine into covers
    #[arg(long, value_enum)]
    strategy: Option<CoverStrategy>,

    /// Handling of query grams absent from the index
    #[arg(long = "missing", value_enum)]
    missing_grams: Option<MissingGramPolicy>,

    /// Lowercase query terms and join words with `_`, like document text
    #[arg(long)]
    fold: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Show file names next to document numbers
    #[arg(long)]
    names: bool,

    /// Print index statistics; results follow only when a query is given.
    /// With `--json` both go into one object
    #[arg(long)]
    stats: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// When to color the results table
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,
}

impl Cli {
    /// Config file values with command-line overrides applied
    fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load_from(path)?,
            None => SearchConfig::load()?,
        };

        if let Some(mgram) = self.mgram {
            config.gram_len = mgram;
        }
        if let Some(nresults) = self.nresults {
            config.top_k = nresults;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(missing) = self.missing_grams {
            config.missing_grams = missing;
        }
        if self.fold {
            config.fold_query = true;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.search_config()?;

    let spinner = progress::spinner("Reading documents...", cli.quiet || cli.json);
    let loaded = load_corpus(&cli.folder).and_then(|documents| {
        if let Some(spinner) = &spinner {
            spinner.set_message("Indexing...");
        }
        let index = {
            let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
            InvertedIndex::build(&texts, config.gram_len)?
        };
        Ok((documents, index))
    });
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let (documents, index) =
        loaded.with_context(|| format!("Failed to index {}", cli.folder.display()))?;

    info!(
        folder = %cli.folder.display(),
        documents = index.doc_count(),
        grams = index.gram_count(),
        "index ready"
    );

    let index_stats = cli.stats.then(|| IndexStats::collect(&index));
    if let Some(index_stats) = &index_stats {
        if cli.query.is_empty() {
            if cli.json {
                serde_json::to_writer_pretty(std::io::stdout(), index_stats)?;
                println!();
            } else {
                stats::show_stats(&index);
            }
            return Ok(());
        }
        if !cli.json {
            stats::show_stats(&index);
        }
    }

    let ranked = Ranker::with_options(&index, config.query_options()).rank(&cli.query, config.top_k);

    let names: Option<Vec<String>> = cli
        .names
        .then(|| documents.iter().map(|d| d.name.clone()).collect());

    if cli.json {
        output::print_ranking_json(&ranked, names.as_deref(), index_stats.as_ref())?;
    } else {
        output::print_ranking(&ranked, names.as_deref(), cli.color)?;
    }

    Ok(())
}
