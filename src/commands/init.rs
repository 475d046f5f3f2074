use crate::config::CONFIG_FILE_NAME;
use crate::core::{Error, Result, ResultExt};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# code-prompts configuration

[prompts]
prompt_prefix = ""
completion_prefix = " "
prompt_delimiter = " ###-->"
completion_end_delimiter = " ###END"
"#;

/// Write the default config file into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .resource_context("Failed to write configuration file", &config_path)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
