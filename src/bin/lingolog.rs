//! lingolog - emit one log record from the command line.
//!
//! Usage:
//!   lingolog info "Ad [42] published"
//!   lingolog --file bot.log --no-color warning "Quota at 'eu-west'"
//!   lingolog --config ./lingolog.toml error Upload failed

use clap::Parser;
use lingolog::{Config, Level, LoggerFactory};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "lingolog", version, about = "Write a log line through lingolog")]
struct Args {
    /// Config file (default: <config dir>/lingolog/lingolog.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also append to this rotating log file.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Disable ANSI colors on the console.
    #[arg(long)]
    no_color: bool,

    /// debug, info, warning, error or critical.
    level: Level,

    /// Message words, joined by spaces.
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &args.file {
        config.file.enabled = true;
        config.file.path = path.to_string_lossy().into_owned();
    }
    if args.no_color {
        config.console.colors = false;
    }

    let session = match lingolog::init(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Below-threshold levels are still emitted when asked for explicitly.
    let logger = lingolog::get_logger("lingolog");
    if !logger.is_enabled_for(args.level) {
        logger.set_level(args.level);
    }
    logger.log(args.level, &args.message.join(" "));

    match session.finish(LoggerFactory::root()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
