use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use maokai::{create_logger, Level, Log, LoggerConfig, Mode};

/// Append one record to a log file.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Directory holding the log file, created if missing
    #[arg(short, long)]
    dir: PathBuf,

    /// Log file name inside `dir`
    #[arg(short, long)]
    name: String,

    /// Write a leveled record instead of a plain one
    #[arg(short, long)]
    level: Option<Level>,

    /// Overrides the MODE environment variable
    #[arg(short, long)]
    mode: Option<Mode>,

    #[arg(required = true)]
    message: String,
}

fn run(args: Args) -> maokai::Result<()> {
    let mode = args.mode.unwrap_or_else(Mode::from_env);
    let mut logger = create_logger(LoggerConfig::new(args.dir, args.name).with_mode(mode))?;
    match args.level {
        Some(level) => logger.log(level, &args.message)?,
        None => logger.create_log(&args.message)?,
    }
    logger.close()
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
