use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

use crate::args::LogArgs;
use crate::errors::*;

pub fn level_filter(args: LogArgs) -> LevelFilter {
    if args.quiet {
        LevelFilter::OFF
    } else {
        match args.verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

pub fn setup_logging(args: LogArgs) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter(args))
        .with(stderr_layer)
        .try_init()
        .chain_err(|| "failed to initialize logging")
}
