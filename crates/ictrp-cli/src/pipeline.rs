//! End-to-end pipeline: ingest, normalize, serialize.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use ictrp_model::TrialDocument;
use ictrp_normalize::{DuplicateId, normalize_batch};

/// Document serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON document per line.
    Ndjson,
    /// A single pretty-printed JSON array.
    Json,
}

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub feed: PathBuf,
    pub countries: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub dry_run: bool,
    /// Curation date stamped into every document's `curatedBy` block.
    pub curation_date: NaiveDate,
}

/// Counters and findings from one pipeline run.
#[derive(Debug)]
pub struct RunResult {
    pub rows_read: usize,
    pub excluded: usize,
    pub documents: usize,
    pub duplicates: Vec<DuplicateId>,
    pub output: Option<PathBuf>,
}

/// Run the full pipeline over one feed snapshot.
pub fn run_feed(options: &RunOptions) -> Result<RunResult> {
    let countries = ictrp_ingest::load_country_table(&options.countries)?;
    info!(countries = countries.len(), "country reference loaded");
    let rows = ictrp_ingest::read_feed(&options.feed)?;
    let rows_read = rows.len();
    info!(rows = rows_read, "feed rows read");

    let batch = normalize_batch(&rows, &countries, options.curation_date);
    info!(
        documents = batch.documents.len(),
        excluded = batch.excluded,
        duplicates = batch.duplicates.len(),
        "normalization finished"
    );

    if !options.dry_run {
        write_documents(&batch.documents, options.output.as_deref(), options.format)?;
    }
    Ok(RunResult {
        rows_read,
        excluded: batch.excluded,
        documents: batch.documents.len(),
        duplicates: batch.duplicates,
        output: options.output.clone(),
    })
}

/// Serialize the batch to a file or stdout.
pub fn write_documents(
    documents: &[TrialDocument],
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file: {}", path.display()))?;
            write_to(BufWriter::new(file), documents, format)
        }
        None => write_to(io::stdout().lock(), documents, format),
    }
}

fn write_to<W: Write>(
    mut writer: W,
    documents: &[TrialDocument],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Ndjson => {
            for document in documents {
                serde_json::to_writer(&mut writer, document).context("serialize document")?;
                writer.write_all(b"\n").context("write document")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, documents)
                .context("serialize documents")?;
            writer.write_all(b"\n").context("write documents")?;
        }
    }
    writer.flush().context("flush output")?;
    Ok(())
}
