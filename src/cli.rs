use crate::config::PromptOverrides;
use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "code-prompts")]
#[command(about = "Turn extracted code entities into prompt/completion training pairs", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .codeprompts.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory the output table is written to (created if absent)
    #[arg(default_value = "prompts")]
    pub output_dir: PathBuf,

    /// Extraction table to read
    #[arg(default_value = "input.csv")]
    pub input: PathBuf,

    /// File name of the output table inside the output directory
    #[arg(long = "output-name", default_value = "classPrompts.csv")]
    pub output_name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Configuration file (defaults to the nearest .codeprompts.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Text placed before every prompt
    #[arg(long, env = "CODEPROMPTS_PROMPT_PREFIX", allow_hyphen_values = true)]
    pub prompt_prefix: Option<String>,

    /// Text placed before every completion
    #[arg(long, env = "CODEPROMPTS_COMPLETION_PREFIX", allow_hyphen_values = true)]
    pub completion_prefix: Option<String>,

    /// Text appended to every prompt
    #[arg(long, env = "CODEPROMPTS_PROMPT_DELIMITER", allow_hyphen_values = true)]
    pub prompt_delimiter: Option<String>,

    /// Text appended to every completion
    #[arg(long, env = "CODEPROMPTS_COMPLETION_END_DELIMITER", allow_hyphen_values = true)]
    pub completion_end_delimiter: Option<String>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl GenerateArgs {
    /// Prompt settings given on the command line or through the environment.
    pub fn prompt_overrides(&self) -> PromptOverrides {
        PromptOverrides {
            prompt_prefix: self.prompt_prefix.clone(),
            completion_prefix: self.completion_prefix.clone(),
            prompt_delimiter: self.prompt_delimiter.clone(),
            completion_end_delimiter: self.completion_end_delimiter.clone(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_defaults() {
        let cli = Cli::try_parse_from(["code-prompts"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.output_dir, PathBuf::from("prompts"));
        assert_eq!(cli.generate.input, PathBuf::from("input.csv"));
        assert_eq!(
            cli.generate.output_path(),
            PathBuf::from("prompts").join("classPrompts.csv")
        );
        assert_eq!(cli.generate.format, OutputFormat::Csv);
    }

    #[test]
    fn test_positionals_in_order() {
        let cli = Cli::try_parse_from(["code-prompts", "out", "data/items.csv", "-f", "jsonl"])
            .unwrap();
        assert_eq!(cli.generate.output_dir, PathBuf::from("out"));
        assert_eq!(cli.generate.input, PathBuf::from("data/items.csv"));
        assert_eq!(cli.generate.format, OutputFormat::Jsonl);
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::try_parse_from([
            "code-prompts",
            "--prompt-prefix",
            "Q: ",
            "--completion-end-delimiter",
            "--END",
        ])
        .unwrap();
        let overrides = cli.generate.prompt_overrides();
        assert_eq!(overrides.prompt_prefix.as_deref(), Some("Q: "));
        assert_eq!(overrides.completion_end_delimiter.as_deref(), Some("--END"));
    }

    #[test]
    fn test_init_subcommand() {
        let cli = Cli::try_parse_from(["code-prompts", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }
}
