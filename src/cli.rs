use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "confidence",
    version,
    about = "External contributor return-confidence scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory searched for confidence.toml and .confidence/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Extra config file merged over every discovered layer
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Weight preset, overriding configuration
    #[arg(long, value_enum, global = true)]
    pub preset: Option<Preset>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score contributor signal records from a JSON file
    Score(ScoreCommand),
    /// Explain how a single set of signals is scored
    Explain(ExplainCommand),
    /// Build the confidence breakdown for one repository snapshot
    Repo(RepoCommand),
    /// Summarize every repository snapshot under a directory
    Summary(SummaryCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Preset {
    Live,
    Explainer,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON file holding one signal object or an array of them
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ExplainCommand {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub privileged_events: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub total_events: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub event_types: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub detection_methods: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days_since_last: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days_since_first: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub spread_days: i64,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RepoCommand {
    pub snapshot: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct SummaryCommand {
    pub dir: PathBuf,
    /// Number of worst-performing repositories to list
    #[arg(long)]
    pub worst: Option<usize>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}
