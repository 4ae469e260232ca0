//! ICTRP feed normalizer CLI.

use chrono::Local;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use ictrp_cli::logging::{LogConfig, LogFormat, init_logging};
use ictrp_cli::pipeline::{OutputFormat, RunOptions, run_feed};

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, OutputFormatArg, RunArgs};
use crate::summary::{print_registries, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Run(args) => match run_feed(&run_options(&args)) {
            Ok(result) => {
                print_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Registries => {
            print_registries();
            0
        }
    };
    std::process::exit(exit_code);
}

fn run_options(args: &RunArgs) -> RunOptions {
    RunOptions {
        feed: args.feed.clone(),
        countries: args.countries.clone(),
        output: args.output.clone(),
        format: match args.format {
            OutputFormatArg::Ndjson => OutputFormat::Ndjson,
            OutputFormatArg::Json => OutputFormat::Json,
        },
        dry_run: args.dry_run,
        curation_date: Local::now().date_naive(),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
