use colored::Colorize;
use tracing::debug;
use vest_ledger::{RunReport, SnapshotSink, VestingService};
use vest_store::FileLedgerSource;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::logging;
use crate::names::validate_ledger_name;
use crate::output::ConsoleSink;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    logging::init(&config.log, cli.verbose);
    debug!(config = ?cli.config, ledger_dir = %config.ledger_dir.display(), "configuration loaded");

    let format = cli.format.unwrap_or(config.output.format);
    let sink = ConsoleSink::new(std::io::stdout(), format);
    let report = execute(&cli, &config, sink).await?;

    if cli.verbose {
        print_summary(&report);
    }
    Ok(())
}

/// Validate the invocation, then compute and publish the snapshot into `sink`.
pub async fn execute<P: SnapshotSink>(
    cli: &Cli,
    config: &CliConfig,
    sink: P,
) -> anyhow::Result<RunReport> {
    validate_ledger_name(&cli.ledger, &config.allowed_extensions)?;

    let source = FileLedgerSource::new(config.ledger_dir.join(&cli.ledger));
    debug!(path = %source.path().display(), target_date = %cli.target_date, "computing vested shares");
    let mut service = VestingService::new(source, sink);
    let report = service.calculate_vested_shares(cli.target_date).await?;
    Ok(report)
}

fn print_summary(report: &RunReport) {
    let mark = if report.source_readable {
        "✓".green().bold()
    } else {
        "!".yellow().bold()
    };
    eprintln!(
        "{} {} balance(s) as of {} from {} row(s), {} rejected",
        mark,
        report.snapshot.len().to_string().bold(),
        report.snapshot.target_date.to_string().cyan(),
        report.total_rows,
        report.rejected_rows,
    );
    if !report.source_readable {
        eprintln!("  {}", "ledger could not be read; nothing published".yellow());
    }
    let ignored = report.snapshot.stats.cancels_ignored;
    if ignored > 0 {
        eprintln!(
            "  {} cancellation(s) exceeded the vested balance and were ignored",
            ignored.to_string().yellow()
        );
    }
}
