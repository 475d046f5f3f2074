//! Prompt generation: templates, the pair accumulator, and the traversal driver.

pub mod driver;
pub mod pair;
pub mod templates;

pub use driver::{generate_prompts, PromptDriver};
pub use pair::{EmissionStats, PromptBatch, PromptPair, PromptRole};
pub use templates::TemplateEngine;
