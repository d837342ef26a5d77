use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Prompt quality triage — score medical assistant prompts and compare them against model-optimized rewrites"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare an original prompt against its optimized rewrite
    Compare(CompareArgs),
    /// Fetch and score a single assistant response
    Chat(ChatArgs),
    /// Score a prompt/response pair offline (no network)
    Score(ScoreArgs),
    /// Record session telemetry for a user
    Session(SessionArgs),
    /// Print per-user aggregates from a results database
    Stats(StatsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PolicyArg {
    /// Keyword/length heuristic (production default)
    A,
    /// Length/diversity/relevance profile
    B,
}

#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// API key for the chat-completions endpoint
    #[arg(long, env = "OPENAI_API_KEY")]
    pub api_key: Option<String>,

    #[arg(long, env = "TRIAGE_MODEL", default_value = "gpt-4")]
    pub model: String,

    #[arg(long, env = "TRIAGE_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub base_url: String,

    /// Use the offline fake provider instead of the network
    #[arg(long)]
    pub fake: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[arg(long)]
    pub prompt: String,

    /// User reference the result is recorded under
    #[arg(long)]
    pub user: Option<String>,

    /// SQLite database to record results into
    #[arg(long)]
    pub db: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "a")]
    pub policy: PolicyArg,

    /// Emit the raw JSON wire shape instead of a summary
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ChatArgs {
    #[arg(long)]
    pub prompt: String,

    #[arg(long)]
    pub user: Option<String>,

    #[arg(long)]
    pub db: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "a")]
    pub policy: PolicyArg,

    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[arg(long)]
    pub prompt: String,

    #[arg(long)]
    pub response: String,

    #[arg(long, value_enum, default_value = "a")]
    pub policy: PolicyArg,
}

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    #[arg(long)]
    pub user: String,

    /// Time spent, in seconds; negative values are rejected
    #[arg(long)]
    pub seconds: i64,

    #[arg(long, default_value = "triage.db")]
    pub db: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[arg(long, default_value = "triage.db")]
    pub db: PathBuf,

    #[arg(long)]
    pub json: bool,
}
