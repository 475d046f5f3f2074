use serde::{Deserialize, Serialize};

pub fn default_prompt_prefix() -> String {
    String::new()
}

pub fn default_completion_prefix() -> String {
    " ".to_string()
}

pub fn default_prompt_delimiter() -> String {
    " ###-->".to_string()
}

pub fn default_completion_end_delimiter() -> String {
    " ###END".to_string()
}

/// Text wrapped around every generated prompt and completion.
///
/// `prompt = prompt_prefix + question + prompt_delimiter` and
/// `completion = completion_prefix + answer + completion_end_delimiter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default = "default_prompt_prefix")]
    pub prompt_prefix: String,

    #[serde(default = "default_completion_prefix")]
    pub completion_prefix: String,

    #[serde(default = "default_prompt_delimiter")]
    pub prompt_delimiter: String,

    #[serde(default = "default_completion_end_delimiter")]
    pub completion_end_delimiter: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prompt_prefix: default_prompt_prefix(),
            completion_prefix: default_completion_prefix(),
            prompt_delimiter: default_prompt_delimiter(),
            completion_end_delimiter: default_completion_end_delimiter(),
        }
    }
}

/// Partial prompt settings from one configuration layer (file or command line).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOverrides {
    #[serde(default)]
    pub prompt_prefix: Option<String>,
    #[serde(default)]
    pub completion_prefix: Option<String>,
    #[serde(default)]
    pub prompt_delimiter: Option<String>,
    #[serde(default)]
    pub completion_end_delimiter: Option<String>,
}

impl PromptConfig {
    /// Layer `overrides` on top of this configuration; set values win.
    pub fn merge(mut self, overrides: &PromptOverrides) -> Self {
        if let Some(value) = &overrides.prompt_prefix {
            self.prompt_prefix = value.clone();
        }
        if let Some(value) = &overrides.completion_prefix {
            self.completion_prefix = value.clone();
        }
        if let Some(value) = &overrides.prompt_delimiter {
            self.prompt_delimiter = value.clone();
        }
        if let Some(value) = &overrides.completion_end_delimiter {
            self.completion_end_delimiter = value.clone();
        }
        self
    }
}

/// Root of the `.codeprompts.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePromptsConfig {
    #[serde(default)]
    pub prompts: Option<PromptOverrides>,
}
