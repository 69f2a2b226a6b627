use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with consistency and score sections
    Terminal,
    /// Full analysis results as pretty-printed JSON
    Json,
    /// Report as a Markdown document
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "quizmap")]
#[command(about = "Quiz run segmentation, scoring and consistency analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Record file to analyze (defaults to the configured input path)
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
