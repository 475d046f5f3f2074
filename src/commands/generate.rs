//! The generate command: read → index → emit → write.

use crate::config::{load_config, PromptConfig, PromptOverrides};
use crate::core::Result;
use crate::index::EntityIndex;
use crate::io::{ensure_dir, read_records_from_path, write_pairs_atomically, OutputFormat};
use crate::prompts::{generate_prompts, EmissionStats};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// Everything one run needs, already resolved.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub output_name: String,
    pub format: OutputFormat,
    pub prompts: PromptConfig,
}

impl GenerateConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            output_name: "classPrompts.csv".to_string(),
            format: OutputFormat::Csv,
            prompts: PromptConfig::default(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }
}

/// Resolve prompt settings: defaults, then the config file, then `overrides`.
pub fn resolve_prompt_config(
    explicit_config: Option<&Path>,
    overrides: &PromptOverrides,
) -> Result<PromptConfig> {
    let file = load_config(explicit_config)?;
    let mut config = PromptConfig::default();
    if let Some(from_file) = &file.prompts {
        config = config.merge(from_file);
    }
    Ok(config.merge(overrides))
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub records: usize,
    pub pairs: usize,
    pub enums_skipped: usize,
    pub orphans: usize,
    pub stats: EmissionStats,
}

/// Run the whole conversion.
///
/// The output directory is created first, then the input must exist. All
/// pairs are produced in memory before anything is written, so a schema
/// error never leaves an output table behind.
pub fn run_generate(config: &GenerateConfig) -> Result<GenerateReport> {
    let _span = info_span!("generate", input = %config.input.display()).entered();

    ensure_dir(&config.output_dir)?;
    let records = read_records_from_path(&config.input)?;
    let record_count = records.len();

    let index = EntityIndex::build(records);
    let orphans = index.orphans();
    for orphan in &orphans {
        debug!(kind = %orphan.kind, name = %orphan.name, "record not reachable from any top-level class");
    }
    let orphan_count = orphans.len();
    let enums_skipped = index.enums().count();

    let batch = generate_prompts(&index, &config.prompts);
    let output_path = write_pairs_atomically(&config.output_path(), config.format, batch.pairs())?;

    let stats = batch.stats().clone();
    info!(
        records = record_count,
        pairs = batch.len(),
        top_level_classes = stats.top_level_classes,
        inner_classes = stats.inner_classes,
        enums_skipped,
        orphans = orphan_count,
        output = %output_path.display(),
        "prompt generation complete"
    );
    for (role, count) in &stats.by_role {
        debug!(%role, count, "pairs by role");
    }

    Ok(GenerateReport {
        output_path,
        records: record_count,
        pairs: batch.len(),
        enums_skipped,
        orphans: orphan_count,
        stats,
    })
}
