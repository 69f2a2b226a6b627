pub mod errors;
pub mod metrics;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Question numbers one complete pass through the quiz covers. Runs may
/// hold keys outside this range; they are stored but never scored or
/// compared.
pub const QUESTION_DOMAIN: RangeInclusive<i64> = 1..=10;

/// One raw (respondent, question, answer) triple from the record source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub respondent: String,
    pub question: i64,
    pub answer: String,
}

/// One complete or partial traversal of the question set by a single
/// respondent, keyed by question number.
///
/// Within a run each question holds at most one answer: re-answering a
/// question overwrites the earlier value (last write wins). A run never
/// rejects out-of-domain question numbers; whether anyone looks at them
/// is the consumer's business.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Run {
    answers: BTreeMap<i64, String>,
}

impl Run {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier answer to the same question.
    pub fn insert(&mut self, question: i64, answer: String) {
        self.answers.insert(question, answer);
    }

    /// The answer given at `question`, if the run reached it.
    pub fn answer(&self, question: i64) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Question numbers this run answered, in ascending order.
    pub fn questions(&self) -> impl Iterator<Item = i64> + '_ {
        self.answers.keys().copied()
    }
}

impl FromIterator<(i64, String)> for Run {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// A named respondent and every run recovered for them, in encounter
/// order. Frozen once segmentation has consumed the whole stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    pub name: String,
    pub runs: Vector<Run>,
}

impl Respondent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: Vector::new(),
        }
    }
}

/// Two-axis coordinate for one run: personal liberty (x) and economic
/// liberty (y), each 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub x: u32,
    pub y: u32,
}

/// Cross-run agreement for one respondent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub is_consistent: bool,
    pub disagreement_count: usize,
    pub varying_questions: Vec<VaryingQuestion>,
}

/// A question position at which a respondent's runs do not all agree,
/// with the answer each run gave there (`None` = the run skipped it).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaryingQuestion {
    pub question: i64,
    pub answers: Vec<Option<String>>,
}

/// Everything a report writer needs, computed in full before any output
/// is produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub metadata: ReportMetadata,
    pub respondents: Vec<RespondentAnalysis>,
    pub ranking: ConsistencyRanking,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub quizmap_version: String,
    pub generated_at: DateTime<Utc>,
    pub source: PathBuf,
}

/// Per-respondent slice of the report: the recovered runs, their scores,
/// the averaged coordinate with its result link, and the consistency
/// verdict.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RespondentAnalysis {
    pub name: String,
    pub runs: Vector<Run>,
    pub scores: Vec<Score>,
    pub average: Score,
    pub link: String,
    pub consistency: ConsistencyReport,
}

/// Most- and least-consistent respondent names, ties broken by encounter
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyRanking {
    pub most_consistent: String,
    pub least_consistent: String,
}
