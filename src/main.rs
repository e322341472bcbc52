//! Resume parser: structured-field extraction from resume files

use clap::Parser;
use log::{error, info, warn};
use resume_parser::cli::{self, Cli, Commands, ConfigAction};
use resume_parser::config::Config;
use resume_parser::error::{Result, ResumeParserError};
use resume_parser::input::{FileType, InputManager};
use resume_parser::output::{save_report_to_file, ParseOutcome, ReportGenerator};
use resume_parser::processing::{validate, ResumeParser};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_override: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Parse { input, output, save, raw } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeParserError::InvalidInput)?,
                None => config.output.format,
            };

            let parser = ResumeParser::with_config(&config.extraction)?;
            let include_raw = raw || config.output.include_raw_text;

            info!("Parsing resume: {}", input.display());
            let outcome = match acquire_text(&input, &config).await {
                Ok(text) => {
                    let document = parser.parse(&text);
                    ParseOutcome::success(document, include_raw.then_some(text))
                }
                Err(e) => {
                    warn!("Text acquisition failed for {}: {}", input.display(), e);
                    ParseOutcome::failure(e)
                }
            };

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, config.output.pretty_json, include_raw);
            let report = generator.generate_report(&outcome, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&report, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", report),
            }

            if let Some(error) = outcome.error {
                return Err(ResumeParserError::Processing(error));
            }
        }

        Commands::Validate { input } => {
            let parser = ResumeParser::with_config(&config.extraction)?;
            let text = acquire_text(&input, &config).await?;
            let report = validate(&parser.parse(&text));

            if report.valid {
                println!("✅ {} has all required fields", input.display());
            } else {
                println!("❌ {} is missing required fields:", input.display());
                for message in &report.errors {
                    println!("  • {}", message);
                }
            }
        }

        Commands::Config { action } => {
            let path = config_override.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    println!("{}", config.to_toml()?);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Read the input file's text after checking its extension.
async fn acquire_text(input: &Path, config: &Config) -> Result<String> {
    cli::validate_file_extension(input, FileType::supported_extensions())
        .map_err(|e| ResumeParserError::InvalidInput(format!("Resume file: {}", e)))?;

    let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);
    input_manager.extract_text(input).await
}
