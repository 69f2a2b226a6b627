use crate::cli::OutputFormat;
use crate::config;
use crate::consistency::analyze_consistency;
use crate::core::metrics::{average_score, rank_by_consistency, result_link};
use crate::core::{AnalysisResults, ReportMetadata, Respondent, RespondentAnalysis};
use crate::io::output::create_writer;
use crate::io::reader::read_records;
use crate::scoring::score_run;
use crate::segmentation::segment_records;
use anyhow::{Context, Result};
use chrono::Utc;
use rayon::prelude::*;
use std::path::PathBuf;

/// Configuration for the analyze command
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Run the full pipeline: read records, segment runs, score and rank,
/// then render the report in the requested format.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let records = read_records(&config.path)
        .with_context(|| format!("failed to read records from {}", config.path.display()))?;
    log::debug!(
        "parsed {} records from {}",
        records.len(),
        config.path.display()
    );

    let respondents = segment_records(records);
    let results = build_results(&config.path, respondents)?;

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_results(&results)
}

/// Score, average, and rank segmented respondents. Results are fully
/// materialized before any report output, so a ranking failure on an
/// empty record source never leaves a partial report behind.
pub fn build_results(
    source: &std::path::Path,
    respondents: Vec<Respondent>,
) -> Result<AnalysisResults> {
    let analyses: Vec<RespondentAnalysis> = respondents
        .par_iter()
        .map(analyze_respondent)
        .collect();

    let ranking = rank_by_consistency(&analyses)?;

    Ok(AnalysisResults {
        metadata: ReportMetadata {
            quizmap_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            source: source.to_path_buf(),
        },
        respondents: analyses,
        ranking,
    })
}

fn analyze_respondent(respondent: &Respondent) -> RespondentAnalysis {
    let scores: Vec<_> = respondent.runs.iter().map(score_run).collect();
    let average = average_score(&scores);
    let link = result_link(&config::get_config().base_url(), average);
    let consistency = analyze_consistency(&respondent.runs);

    RespondentAnalysis {
        name: respondent.name.clone(),
        runs: respondent.runs.clone(),
        scores,
        average,
        link,
        consistency,
    }
}
