pub mod analyze;
pub mod complete;
pub mod generate;
pub mod schema;

use crate::config::Provider;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stride")]
#[command(
    author,
    version,
    about = "Turn a SWOT self-assessment into an action plan and track your progress"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file
    #[arg(short, long, global = true, default_value = "stride.yaml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan from a self-assessment and save it
    Generate(GenerateArgs),

    /// Analyze progress on saved plans
    Analyze(AnalyzeArgs),

    /// Mark a task as done (or not done with --undo)
    Complete(CompleteArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct GenerateArgs {
    /// What you want to achieve
    #[arg(long)]
    pub goal: String,

    /// Health, Career, Finance or Hobby
    #[arg(long)]
    pub category: String,

    /// Time horizon label stored with the plan
    #[arg(long, default_value = "Short term (1-3 months)")]
    pub duration: String,

    /// YAML or JSON file with strengths/weaknesses/opportunities/threats
    #[arg(long, conflicts_with_all = ["strengths", "weaknesses", "opportunities", "threats"])]
    pub swot: Option<PathBuf>,

    /// Comma-separated strengths
    #[arg(long, default_value = "")]
    pub strengths: String,

    /// Comma-separated weaknesses
    #[arg(long, default_value = "")]
    pub weaknesses: String,

    /// Comma-separated opportunities
    #[arg(long, default_value = "")]
    pub opportunities: String,

    /// Comma-separated threats
    #[arg(long, default_value = "")]
    pub threats: String,

    /// Override the configured provider (gemini, claude_cli, offline)
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Fail instead of using the template generator when the provider fails
    #[arg(long)]
    pub no_fallback: bool,

    /// Print the plan without saving it
    #[arg(long)]
    pub dry_run: bool,

    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Clone)]
pub struct AnalyzeArgs {
    /// Analyze a single plan by id (summary reports cover all plans)
    #[arg(long, conflicts_with = "write")]
    pub plan: Option<String>,

    /// Also write summary.json and summary.md to the report directory
    #[arg(long)]
    pub write: bool,

    /// Override output directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Clone)]
pub struct CompleteArgs {
    /// Plan id
    #[arg(long)]
    pub plan: String,

    /// Task id within the plan
    #[arg(long)]
    pub task: u32,

    /// Mark the task as not done
    #[arg(long)]
    pub undo: bool,
}
