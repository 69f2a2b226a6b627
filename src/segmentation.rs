//! Run boundary recovery over the raw record stream.
//!
//! The stream carries no run identifier, so boundaries are inferred from
//! two signals only: the respondent name changing, and the question index
//! wrapping back to 1 while answers are already buffered. The wraparound
//! signal is a heuristic with a known blind spot: a respondent who
//! answers question 1 twice in a row produces two one-entry runs, not a
//! corrected single run. That is the defined behavior; stricter boundary
//! inference would need a marker the data does not have.

use crate::core::{AnswerRecord, Respondent, Run};

/// Single-pass boundary state machine. Feed records with
/// [`RunSegmenter::ingest`] in stream order, then call
/// [`RunSegmenter::finish`] to flush the trailing run.
#[derive(Debug, Default)]
pub struct RunSegmenter {
    respondents: Vec<Respondent>,
    current_respondent: Option<String>,
    current_run: Run,
}

impl RunSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the boundary decision to one record, then buffer its answer.
    ///
    /// A boundary is crossed when the respondent changes or when question
    /// 1 reappears over a non-empty buffer. The buffered run is flushed
    /// under the respondent active *before* this record; getting that
    /// order wrong silently hands the run to the wrong respondent.
    pub fn ingest(&mut self, record: AnswerRecord) {
        let respondent_changed =
            self.current_respondent.as_deref() != Some(record.respondent.as_str());
        let wrapped_around = record.question == 1 && !self.current_run.is_empty();

        if respondent_changed || wrapped_around {
            self.flush_current();
            self.current_respondent = Some(record.respondent);
        }

        self.current_run.insert(record.question, record.answer);
    }

    /// Flush the in-progress run and return every respondent in encounter
    /// order.
    pub fn finish(mut self) -> Vec<Respondent> {
        self.flush_current();
        self.respondents
    }

    // Empty buffers flush to nothing: a respondent whose first record is
    // mid-questionnaire starts a run without one.
    fn flush_current(&mut self) {
        if self.current_run.is_empty() {
            return;
        }
        let run = std::mem::take(&mut self.current_run);
        if let Some(name) = self.current_respondent.clone() {
            let index = self.respondent_index(&name);
            self.respondents[index].runs.push_back(run);
        }
    }

    fn respondent_index(&mut self, name: &str) -> usize {
        match self.respondents.iter().position(|r| r.name == name) {
            Some(index) => index,
            None => {
                self.respondents.push(Respondent::new(name));
                self.respondents.len() - 1
            }
        }
    }
}

/// Segment an entire record stream in one pass.
pub fn segment_records<I>(records: I) -> Vec<Respondent>
where
    I: IntoIterator<Item = AnswerRecord>,
{
    let mut segmenter = RunSegmenter::new();
    for record in records {
        segmenter.ingest(record);
    }
    segmenter.finish()
}
