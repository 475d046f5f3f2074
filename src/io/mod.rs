pub mod reader;
pub mod writer;

pub use reader::{read_records, read_records_from_path};
pub use writer::{
    create_writer, write_pairs_atomically, CsvPromptWriter, JsonlPromptWriter, OutputFormat,
    PromptWriter, OUTPUT_HEADERS,
};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

/// Create `path` (and its parents) unless it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|e| Error::output_dir_uncreatable(path, e))?;
    }
    Ok(())
}
