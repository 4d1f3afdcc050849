use clap::Parser;
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use flowlint::reporter::{JsonReporter, Reporter, TerminalReporter};
use flowlint::run::{ScanReport, run_scan};
use flowlint::{Cli, OutputFormat, decide};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run_scan(&cli) {
        Ok(report) => {
            let output = format_report(&cli, &report);

            if let Some(path) = &cli.output {
                if let Err(e) = fs::write(path, &output) {
                    eprintln!("flowlint: failed to write report to {}: {e}", path.display());
                    return ExitCode::from(2);
                }
                println!("Report written to {}", path.display());
            } else {
                print!("{output}");
            }

            if decide(cli.fail_on, report.summary.tally()) {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("flowlint: {e}");
            ExitCode::from(2)
        }
    }
}

fn format_report(cli: &Cli, report: &ScanReport) -> String {
    let reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Terminal => Box::new(TerminalReporter::new(cli.verbose)),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    };
    reporter.report(&report.summary, &report.results)
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
