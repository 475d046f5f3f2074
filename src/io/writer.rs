//! Output table writers.
//!
//! The CSV writer emits the fixed `prompt,completion` header followed by one
//! row per pair; quoting (including embedded newlines) is left to the `csv`
//! crate. The JSONL writer emits one `{"prompt","completion"}` object per line.

use crate::core::{Error, Result, ResultExt};
use crate::prompts::PromptPair;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

/// Header row of the output table.
pub const OUTPUT_HEADERS: [&str; 2] = ["prompt", "completion"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Jsonl,
}

pub trait PromptWriter {
    fn write_pairs(&mut self, pairs: &[PromptPair]) -> Result<()>;
}

pub struct CsvPromptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvPromptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> PromptWriter for CsvPromptWriter<W> {
    fn write_pairs(&mut self, pairs: &[PromptPair]) -> Result<()> {
        self.writer.write_record(OUTPUT_HEADERS)?;
        for pair in pairs {
            self.writer
                .write_record([pair.prompt.as_str(), pair.completion.as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonlPromptWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonlPromptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> PromptWriter for JsonlPromptWriter<W> {
    fn write_pairs(&mut self, pairs: &[PromptPair]) -> Result<()> {
        for pair in pairs {
            serde_json::to_writer(&mut self.writer, pair)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn PromptWriter + 'w> {
    match format {
        OutputFormat::Csv => Box::new(CsvPromptWriter::new(writer)),
        OutputFormat::Jsonl => Box::new(JsonlPromptWriter::new(writer)),
    }
}

/// Write `pairs` to `path` so that the file only ever appears complete.
///
/// Output goes to a temporary file in the same directory which is renamed
/// over `path` once fully flushed. On failure the temporary file is dropped
/// and removed.
pub fn write_pairs_atomically(
    path: &Path,
    format: OutputFormat,
    pairs: &[PromptPair],
) -> Result<PathBuf> {
    let _span = info_span!("write", path = %path.display(), ?format).entered();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = tempfile::NamedTempFile::new_in(dir)
        .resource_context("Failed to create temporary output file", dir)?;
    {
        let mut writer = create_writer(format, BufWriter::new(temp.as_file()));
        writer.write_pairs(pairs)?;
    }
    temp.as_file()
        .sync_all()
        .resource_context("Failed to flush output file", path)?;
    temp.persist(path).map_err(|e| Error::Resource {
        message: "Failed to move output file into place".to_string(),
        path: Some(path.to_path_buf()),
        source: Some(e.error),
    })?;

    debug!(rows = pairs.len(), "wrote output table");
    Ok(path.to_path_buf())
}
