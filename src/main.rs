mod cli;

use clap::Parser;
use contrib_confidence::error::{ConfidenceError, Result};
use contrib_confidence::report::{self, OutputFormat};
use contrib_confidence::types::config::EngineSettings;
use contrib_confidence::types::scoring::WeightPreset;
use contrib_confidence::types::signals::ContributorSignalInput;
use contrib_confidence::{config, logging, snapshot, ConfidenceEngine};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_DATA: i32 = 1;
    pub const INVALID_CONFIG: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn resolve_settings(cli: &cli::Cli) -> Result<EngineSettings> {
    let loaded = config::load_config(&cli.root, cli.config.as_deref())?;
    let mut settings = loaded.unwrap_or_default().settings()?;
    if let Some(preset) = cli.preset {
        settings.weights = match preset {
            cli::Preset::Live => WeightPreset::Live.weights(),
            cli::Preset::Explainer => WeightPreset::Explainer.weights(),
        };
    }
    Ok(settings)
}

fn run(cli: cli::Cli) -> Result<i32> {
    let settings = resolve_settings(&cli)?;
    let engine = ConfidenceEngine::new(settings)?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let inputs = snapshot::load_signal_records(&cmd.input)?;
            let records = engine.score_batch(&inputs);
            let flagged = records
                .iter()
                .filter(|record| !record.adjustments.is_empty())
                .count();
            if flagged > 0 {
                tracing::warn!(flagged, "some records were clamped before scoring");
            }
            println!("{}", report::render_scores(&records, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Explain(cmd) => {
            let input = ContributorSignalInput {
                privileged_event_count: cmd.privileged_events,
                total_event_count: cmd.total_events,
                unique_event_type_count: cmd.event_types,
                detection_method_count: cmd.detection_methods,
                days_since_last_activity: cmd.days_since_last,
                days_since_first_activity: cmd.days_since_first,
                activity_spread_days: cmd.spread_days,
            };
            let record = engine.score(&input);
            let settings = engine.settings();
            println!(
                "{}",
                report::render_explanation(
                    &record,
                    &settings.weights,
                    settings.cap,
                    output_format(cmd.format)
                )?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Repo(cmd) => {
            let snapshot = snapshot::load_snapshot(&cmd.snapshot)?;
            let breakdown = engine.assess_repository(snapshot)?;
            println!(
                "{}",
                report::render_breakdown(&breakdown, output_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Summary(cmd) => {
            let paths = snapshot::discover_snapshots(&cmd.dir)?;
            tracing::info!(files = paths.len(), dir = %cmd.dir.display(), "discovered snapshots");
            let (snapshots, rejected) = snapshot::load_snapshots(&paths);
            let summary = engine.summarize(snapshots, rejected, cmd.worst)?;
            println!(
                "{}",
                report::render_summary(&summary, output_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match &e {
                ConfidenceError::NoData { .. } => exit_code::NO_DATA,
                e if e.is_config_error() => exit_code::INVALID_CONFIG,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
