//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::analytics::Analyzer;
use chatlens::cli::Args;
use chatlens::format::{to_format_string, write_to_format};
use chatlens::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Priority: `RUST_LOG` > `--verbose` > "warn". Logs go to stderr so they
/// never mix with a report printed to stdout.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();

    let parser = TranscriptParser::with_config(args.parser_config());
    let report = parser.parse_file(&args.input)?;
    if report.messages.is_empty() {
        return Err(ChatlensError::empty_transcript(Some(
            Path::new(&args.input).to_path_buf(),
        )));
    }
    info!(
        messages = report.messages.len(),
        dropped = report.dropped(),
        "Parsed {}",
        args.input
    );

    let analyzer = Analyzer::with_config(args.analyzer_config());

    if args.list_senders {
        for sender in analyzer.senders(&report.messages) {
            println!("{sender}");
        }
        return Ok(());
    }

    let filter = args.filter();
    if !filter.is_overall() && filter.apply(&report.messages).next().is_none() {
        warn!("No messages from '{filter}'; filtered views will be empty");
    }

    let result = analyzer.analyze(&filter, &report.messages);
    let format = args.report_format();
    let report_config = args.report_config();

    match &args.output {
        Some(path) => {
            write_to_format(&result, path, format, &report_config)?;
            println!("✅ Done! {} report saved to {}", format, path);
        }
        None => {
            let rendered = to_format_string(&result, format, &report_config)?;
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    debug!(
        elapsed_ms = total_start.elapsed().as_millis() as u64,
        "Analysis complete"
    );
    Ok(())
}
