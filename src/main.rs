use anyhow::{Context, Result};
use code_prompts::cli::{self, Commands, GenerateArgs};
use code_prompts::commands::{init_config, resolve_prompt_config, run_generate, GenerateConfig};
use code_prompts::core::{Error, EXIT_FAILURE};
use code_prompts::observability::init_tracing;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::parse_args();
    init_tracing(cli.generate.verbosity);

    let result = match cli.command {
        Some(Commands::Init { force }) => {
            init_config(Path::new("."), force).context("Failed to initialize configuration")
        }
        None => generate(&cli.generate),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

// Typed errors pick their own status; anything else is a generic failure
fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<Error>()
        .map_or(EXIT_FAILURE, Error::exit_code)
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let prompts = resolve_prompt_config(args.config.as_deref(), &args.prompt_overrides())?;
    let config = GenerateConfig {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        output_name: args.output_name.clone(),
        format: args.format,
        prompts,
    };

    let report = run_generate(&config)
        .with_context(|| format!("Failed to generate prompts from {}", config.input.display()))?;
    println!(
        "Wrote {} prompt pairs to {}",
        report.pairs,
        report.output_path.display()
    );
    Ok(())
}
