use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tweetgrab::{
    cli::{self, Command, Outcome},
    config::{Config, LogFormat, OutputFormat},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

fn get_config_path(args: &Args) -> Option<String> {
    if let Some(path) = &args.config {
        return Some(path.clone());
    }

    if let Ok(path) = std::env::var("TWEETGRAB_CONFIG") {
        return Some(path);
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        let config_path = format!("{}/tweetgrab/config.toml", xdg_config_home);
        if std::path::Path::new(&config_path).exists() {
            return Some(config_path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let config_path = format!("{}/.config/tweetgrab/config.toml", home.display());
        if std::path::Path::new(&config_path).exists() {
            return Some(config_path);
        }
    }

    None
}

fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // stdout carries results, so logs go to stderr.
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn run(args: Args) -> Result<Outcome> {
    let config = match get_config_path(&args) {
        Some(config_path) => Config::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path))?,
        None => Config::default(),
    };

    init_logging(config.get_logging_format());
    debug!("Running {:?}", args.command);

    let format = args.format.unwrap_or(config.get_output_format());
    let input = cli::load_input(&args.command)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute(&args.command, &input, format, &mut out)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(Outcome::Found) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
