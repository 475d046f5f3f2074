//! Configuration for prompt generation.
//!
//! Settings resolve in layers: built-in defaults, then the `[prompts]` table
//! of `.codeprompts.toml`, then command-line flags and environment variables.

mod loader;
mod prompt;

pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use prompt::{
    default_completion_end_delimiter, default_completion_prefix, default_prompt_delimiter,
    default_prompt_prefix, CodePromptsConfig, PromptConfig, PromptOverrides,
};
