use anyhow::Result;
use clap::Parser;
use quizmap::cli::Cli;
use quizmap::commands::analyze::{handle_analyze, AnalyzeConfig};
use quizmap::config;

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let analyze_config = AnalyzeConfig {
        path: cli
            .path
            .unwrap_or_else(|| config::get_config().input_path()),
        format: cli.format,
        output: cli.output,
    };

    handle_analyze(analyze_config)
}
