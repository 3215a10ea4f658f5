//! Toolshed Ingest - taxonomy feed tool

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use toolshed_common::logging::{init_logging, LogConfig, LogLevel};
use toolshed_ingest::feed_file::{self, OutputFormat};
use toolshed_ingest::import::{run_import, summarize, FeedSource};
use toolshed_server::ingest::taxonomy::{ImportConfig, TaxonomyFeedParser, TaxonomyImporter};
use toolshed_server::taxonomy::{InMemoryTaxonomyStore, PgTaxonomyStore, TaxonomyStore};

#[derive(Parser, Debug)]
#[command(name = "toolshed-ingest")]
#[command(author, version, about = "Toolshed taxonomy feed tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a feed file and list every problem
    Validate {
        /// Feed file
        file: PathBuf,
    },

    /// Parse a feed file and print the records
    Parse {
        /// Feed file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: OutputFormat,

        /// Stop after this many records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Replace the stored taxonomy with a feed
    #[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
    Import {
        /// Feed URL
        #[arg(long)]
        url: Option<String>,

        /// Local feed file
        #[arg(long)]
        file: Option<PathBuf>,

        /// PostgreSQL connection string
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,

        /// Records per insert batch
        #[arg(long, env = "TAXONOMY_IMPORT_BATCH_SIZE")]
        batch_size: Option<usize>,

        /// Import into memory only and report the result
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("toolshed-ingest")
        .build();

    // LOG_* environment variables override the builder values they name
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    let _guard = init_logging(&log_config)?;

    match cli.command {
        Command::Validate { file } => {
            let content = feed_file::read_feed(&file)?;
            let validation = TaxonomyFeedParser::new().validate(&content);
            if validation.is_valid {
                println!("{}: valid", file.display());
            } else {
                for error in &validation.errors {
                    println!("{}", error);
                }
                bail!("{} problems found in {}", validation.errors.len(), file.display());
            }
        },
        Command::Parse {
            file,
            format,
            limit,
        } => {
            let content = feed_file::read_feed(&file)?;
            let records = feed_file::parse_records(&content, limit);
            info!(records = records.len(), "Parsed feed");
            print!("{}", feed_file::render(&records, format)?);
        },
        Command::Import {
            url,
            file,
            database_url,
            batch_size,
            dry_run,
        } => {
            let source = match (url, file) {
                (Some(url), _) => FeedSource::Url(url),
                (None, Some(file)) => FeedSource::File(file),
                (None, None) => bail!("Either --url or --file is required"),
            };

            let mut config = ImportConfig::from_env();
            if let Some(batch_size) = batch_size {
                config = config.with_batch_size(batch_size);
            }

            let store: Arc<dyn TaxonomyStore> = if dry_run {
                info!("Dry run, importing into memory");
                Arc::new(InMemoryTaxonomyStore::new())
            } else {
                let Some(database_url) = database_url else {
                    bail!("DATABASE_URL is required unless --dry-run is set");
                };
                let pool = PgPoolOptions::new()
                    .max_connections(2)
                    .connect(&database_url)
                    .await?;
                Arc::new(PgTaxonomyStore::new(pool))
            };

            let importer = TaxonomyImporter::new(store, config)?;
            let result = run_import(&importer, &source).await?;

            println!("{}", summarize(&result));
            for error in &result.errors {
                println!("  {}", error);
            }
            if !result.success {
                bail!("Taxonomy import failed");
            }
        },
    }

    Ok(())
}
