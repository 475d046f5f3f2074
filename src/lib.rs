//! Convert a flat table of extracted code entities into prompt/completion
//! pairs for language-model fine-tuning.
//!
//! Pipeline: [`io::read_records`] → [`EntityIndex::build`] →
//! [`prompts::generate_prompts`] → [`io::write_pairs_atomically`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod index;
pub mod io;
pub mod observability;
pub mod prompts;

// Re-export commonly used types
pub use crate::config::PromptConfig;
pub use crate::core::{EntityKind, Error, QualifiedName, Record, Result};
pub use crate::index::{ChildIndex, EntityIndex};
pub use crate::io::{read_records, OutputFormat};
pub use crate::prompts::{generate_prompts, PromptBatch, PromptPair, PromptRole};
