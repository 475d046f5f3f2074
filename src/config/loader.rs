use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::prompt::CodePromptsConfig;
use crate::core::{Error, Result};

/// Name of the configuration file searched for in the directory hierarchy.
pub const CONFIG_FILE_NAME: &str = ".codeprompts.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<CodePromptsConfig, String> {
    toml::from_str::<CodePromptsConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load an explicitly requested config file. Any failure is fatal.
pub fn load_config_from(path: &Path) -> Result<CodePromptsConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    let config = parse_config(&contents).map_err(Error::Config)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<CodePromptsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Directories from `start` upwards, at most `max_depth` of them
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search upwards from `start` for the nearest readable config file.
pub fn discover_config(start: PathBuf) -> CodePromptsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CodePromptsConfig::default()
        })
}

/// Load the explicit config if given, otherwise discover one from the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<CodePromptsConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!("Failed to get current directory: {}. Using default config.", e);
            Ok(CodePromptsConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_prompts_table() {
        let config = parse_config(indoc! {r#"
            [prompts]
            prompt_prefix = "Q: "
            completion_end_delimiter = " <|end|>"
        "#})
        .unwrap();

        let prompts = config.prompts.unwrap();
        assert_eq!(prompts.prompt_prefix.as_deref(), Some("Q: "));
        assert_eq!(prompts.completion_end_delimiter.as_deref(), Some(" <|end|>"));
        assert_eq!(prompts.prompt_delimiter, None);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), CodePromptsConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = parse_config("[prompts\nprompt_prefix = 1").unwrap_err();
        assert!(err.contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_explicit_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_discover_walks_up_to_parent() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[prompts]\nprompt_delimiter = \" -->\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(
            config.prompts.and_then(|p| p.prompt_delimiter).as_deref(),
            Some(" -->")
        );
    }

    #[test]
    fn test_discover_ignores_unparseable_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        let config = discover_config(dir.path().to_path_buf());
        assert_eq!(config, CodePromptsConfig::default());
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }
}
