//! Sanak CLI - Kinship terms for family trees from the command line.

use clap::Parser;
use sanak_cli::commands;
use sanak_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> sanak_cli::Result<()> {
    // Load config, falling back to defaults
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path).unwrap_or_else(|e| {
        tracing::warn!(path = %config_path.display(), error = %e, "Ignoring unreadable config");
        Config::default()
    });

    // Flags override config values
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let locale = match cli.locale {
        Some(locale) => locale.into(),
        None => config.settings.locale()?,
    };
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled, locale);

    match cli.command {
        Command::Resolve(args) => commands::execute_resolve(args, &formatter)?,
        Command::Labels(args) => commands::execute_labels(args, &formatter)?,
        Command::Check(args) => commands::execute_check(args, &formatter)?,
        Command::Layout(args) => commands::execute_layout(args, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &mut config, &config_path, &formatter)?,
    }

    Ok(())
}
