use crate::cli::OutputFormat;
use crate::core::{AnalysisResults, RespondentAnalysis, VaryingQuestion};
use anyhow::{Context, Result};
use colored::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

const SECTION_RULE: &str =
    "======================================================================";
const RESPONDENT_RULE: &str = "----------------------------------------";

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()>;
}

/// The human-readable report: a consistency section, the most/least
/// consistent respondents, then per-respondent scores and result links.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl TerminalWriter<io::Stdout> {
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for TerminalWriter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalWriter<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    fn write_section_header(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "{}", SECTION_RULE.blue())?;
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", SECTION_RULE.blue())?;
        Ok(())
    }

    fn write_consistency_section(&mut self, results: &AnalysisResults) -> Result<()> {
        self.write_section_header("CONSISTENCY ANALYSIS")?;

        for analysis in &results.respondents {
            let report = &analysis.consistency;
            let status = if report.is_consistent {
                "CONSISTENT".green().to_string()
            } else {
                format!(
                    "INCONSISTENT ({} questions vary)",
                    report.disagreement_count
                )
                .red()
                .to_string()
            };
            writeln!(self.writer, "{}: {}", analysis.name.bold(), status)?;
            for varying in &report.varying_questions {
                writeln!(
                    self.writer,
                    "    Q{}: {}",
                    varying.question,
                    answer_breakdown(varying)
                )?;
            }
        }

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Most consistent respondent:  {}",
            results.ranking.most_consistent.bold()
        )?;
        writeln!(
            self.writer,
            "Least consistent respondent: {}",
            results.ranking.least_consistent.bold()
        )?;
        Ok(())
    }

    fn write_score_section(&mut self, results: &AnalysisResults) -> Result<()> {
        writeln!(self.writer)?;
        self.write_section_header("SCORE ANALYSIS & LINKS")?;

        for analysis in &results.respondents {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}:", analysis.name.bold())?;
            writeln!(self.writer, "{}", RESPONDENT_RULE)?;
            for (index, score) in analysis.scores.iter().enumerate() {
                writeln!(
                    self.writer,
                    "  Run {}: Personal (x)={}, Economic (y)={}",
                    index + 1,
                    score.x,
                    score.y
                )?;
            }
            writeln!(
                self.writer,
                "  Average: x={}, y={}",
                analysis.average.x, analysis.average.y
            )?;
            writeln!(self.writer, "  Link: {}", analysis.link.cyan())?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()> {
        self.write_consistency_section(results)?;
        self.write_score_section(results)?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, results: &AnalysisResults) -> Result<()> {
        writeln!(self.writer, "# Quizmap Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            results.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            self.writer,
            "Source: `{}`",
            results.metadata.source.display()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_consistency(&mut self, results: &AnalysisResults) -> Result<()> {
        writeln!(self.writer, "## Consistency")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Respondent | Status | Varying questions |")?;
        writeln!(self.writer, "|------------|--------|-------------------|")?;

        for analysis in &results.respondents {
            let report = &analysis.consistency;
            let status = if report.is_consistent {
                "consistent".to_string()
            } else {
                format!("{} questions vary", report.disagreement_count)
            };
            let varying = if report.varying_questions.is_empty() {
                "-".to_string()
            } else {
                report
                    .varying_questions
                    .iter()
                    .map(|v| format!("Q{}: {}", v.question, answer_breakdown(v)))
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            writeln!(self.writer, "| {} | {} | {} |", analysis.name, status, varying)?;
        }

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Most consistent: **{}**. Least consistent: **{}**.",
            results.ranking.most_consistent, results.ranking.least_consistent
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, results: &AnalysisResults) -> Result<()> {
        writeln!(self.writer, "## Scores")?;

        for analysis in &results.respondents {
            writeln!(self.writer)?;
            writeln!(self.writer, "### {}", analysis.name)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Run | Personal (x) | Economic (y) |")?;
            writeln!(self.writer, "|-----|--------------|--------------|")?;
            for (index, score) in analysis.scores.iter().enumerate() {
                writeln!(self.writer, "| {} | {} | {} |", index + 1, score.x, score.y)?;
            }
            writeln!(
                self.writer,
                "| Average | {} | {} |",
                analysis.average.x, analysis.average.y
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "[Result link]({})", analysis.link)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()> {
        self.write_header(results)?;
        self.write_consistency(results)?;
        self.write_scores(results)?;
        Ok(())
    }
}

// Per-label occurrence counts for one varying question: labels sorted,
// runs that skipped the question counted under "(missing)" after them.
fn answer_breakdown(question: &VaryingQuestion) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut missing = 0usize;
    for answer in &question.answers {
        match answer {
            Some(label) => *counts.entry(label.as_str()).or_default() += 1,
            None => missing += 1,
        }
    }

    let mut parts: Vec<String> = counts
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect();
    if missing > 0 {
        parts.push(format!("(missing): {missing}"));
    }
    parts.join(", ")
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<Box<dyn OutputWriter>> {
    match output {
        None => Ok(stdout_writer(format)),
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            if format == OutputFormat::Terminal {
                // ANSI escapes are for terminals, not files.
                colored::control::set_override(false);
            }
            Ok(file_writer(format, file))
        }
    }
}

fn stdout_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
        OutputFormat::Json => Box::new(JsonWriter::new(io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(io::stdout())),
    }
}

fn file_writer(format: OutputFormat, file: File) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::with_writer(file)),
        OutputFormat::Json => Box::new(JsonWriter::new(file)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(file)),
    }
}
