use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use taskline::cli::args::{Cli, Commands, OutputFormat};
use taskline::cli::commands;
use taskline::config::{Config, Paths};
use taskline::error::TasklineError;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tracing::instrument(skip(cli))]
fn run(cli: Cli) -> Result<(), TasklineError> {
    let paths = Paths::default();

    let output = match cli.command {
        // Config commands must work even when the file is broken.
        Commands::Config(args) => commands::config(&paths, args.command)?,
        command => {
            let config = Config::load_from_path(&paths.config_file)?;
            config.general.color.apply();
            let format = cli.output.unwrap_or(config.general.default_output);
            run_with_config(command, &config, format)?
        },
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn run_with_config(
    command: Commands,
    config: &Config,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    match command {
        Commands::Parse(args) => {
            commands::parse(args, config.parser, format, std::io::stdin().lock())
        },
        Commands::Examples(args) => commands::examples(&args, config.parser, format),
        Commands::Completions { shell } => commands::completions(shell),
        Commands::Config(_) => Ok(String::new()),
    }
}
