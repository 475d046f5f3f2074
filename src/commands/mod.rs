//! Command implementations.
//!
//! - **generate**: read the extraction table and write the prompt table
//! - **init**: write a default `.codeprompts.toml`

pub mod generate;
pub mod init;

pub use generate::{resolve_prompt_config, run_generate, GenerateConfig, GenerateReport};
pub use init::init_config;
