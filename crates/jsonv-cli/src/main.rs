//! jsonv CLI - validate JSON and YAML documents against indentation-based schemas
//!
//! This is the main entry point for the jsonv command, providing commands
//! for validating documents, checking schemas, and formatting schema files.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    let result = Config::load_with_file(cli.config.as_deref()).and_then(|config| {
        // Logging settings come partly from the config file
        if let Err(e) = init_logging(&cli, &config) {
            eprintln!("Failed to initialize logging: {}", e);
        }
        run(cli, config)
    });

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = resolve_format(cli.output, &config)?;
    let mut output = OutputWriter::new(
        format,
        cli.use_color() && config.output.color,
        cli.quiet,
        config.output.progress,
    );

    tracing::info!(
        verbosity = cli.verbosity_level(),
        format = ?format,
        "Executing command"
    );

    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, &config, &mut output),
        Commands::Check(args) => handlers::handle_check(args, &config, &mut output),
        Commands::Fmt(args) => handlers::handle_fmt(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// The command-line flag wins over the config file
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(format) => Ok(format),
        None => config.output_format(),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_settings(cli.verbosity_level(), &config.logging);

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use config::ConfigBuilder;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["jsonv", "-vv", "check", "schema.jsons"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["jsonv", "--quiet", "fmt", "schema.jsons"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_flag_overrides_config_format() {
        let config = ConfigBuilder::new().output_format("yaml").build();
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Yaml);
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), &config).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(None, &Config::default()).unwrap(), OutputFormat::Human);
    }
}
