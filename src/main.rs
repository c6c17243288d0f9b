mod engine;
mod models;
mod shell;
mod storage;
mod types;

use std::io::{stderr, stdin, stdout, BufWriter};
use std::process::exit;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::models::Ledger;
use crate::shell::InteractiveShell;

const DEFAULT_DELIMITER: u8 = b',';

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 3 {
        eprintln!("Usage: budget-tracker [log_level:optional] [delimiter:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("Delimiter: a single character or 'tab' (default: ',')");
        exit(1);
    }

    let log_level = args.get(1)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);
    let delimiter = args.get(2)
        .map(|s| parse_delimiter(s)).unwrap_or(DEFAULT_DELIMITER);

    setup_logging(log_level);

    let mut ledger = Ledger::new();
    let mut shell = InteractiveShell::new(stdin().lock(), BufWriter::new(stdout().lock()))
        .with_delimiter(delimiter);

    shell.run(&mut ledger)?;

    info!("Session ended with [{}] transactions in memory", ledger.len());

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn parse_delimiter(delimiter: &str) -> u8 {
    match delimiter {
        "tab" | "\\t" => b'\t',
        _ => match delimiter.as_bytes() {
            [byte] if byte.is_ascii_graphic() && *byte != b'"' => *byte,
            _ => {
                eprintln!("Invalid delimiter '{}', defaulting to ','", delimiter);
                DEFAULT_DELIMITER
            }
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout belongs to the menu, so log lines go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
