// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod consistency;
pub mod core;
pub mod io;
pub mod scoring;
pub mod segmentation;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResults, AnswerRecord, ConsistencyRanking, ConsistencyReport, Respondent,
    RespondentAnalysis, Run, Score, VaryingQuestion,
};

pub use crate::consistency::analyze_consistency;
pub use crate::core::metrics::{average_score, rank_by_consistency, result_link};
pub use crate::io::output::{create_writer, OutputWriter};
pub use crate::io::reader::{parse_records, read_records};
pub use crate::scoring::{answer_points, score_run};
pub use crate::segmentation::{segment_records, RunSegmenter};
