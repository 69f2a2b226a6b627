//! Record-source reader: one (respondent, question, answer) triple per
//! line, comma-separated.

use crate::core::errors::{Error, Result};
use crate::core::AnswerRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read every well-formed record from `path` in file order.
///
/// Shape errors are lenient: a line that does not split into exactly
/// three fields is dropped without a diagnostic. Content errors are not:
/// a question field that fails to parse as an integer aborts the whole
/// read.
pub fn read_records(path: &Path) -> Result<Vec<AnswerRecord>> {
    let file = File::open(path)?;
    parse_records(BufReader::new(file))
}

/// Parse records from any buffered source, same policy as
/// [`read_records`].
pub fn parse_records<R: BufRead>(input: R) -> Result<Vec<AnswerRecord>> {
    let mut records = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let Some((respondent, question, answer)) = split_fields(&line) else {
            log::debug!("skipping malformed record at line {line_number}: field count != 3");
            continue;
        };

        let question = question.parse::<i64>().map_err(|_| {
            Error::parse(line_number, format!("invalid question number {question:?}"))
        })?;

        records.push(AnswerRecord {
            respondent: respondent.to_string(),
            question,
            answer: answer.to_string(),
        });
    }

    Ok(records)
}

// Exactly three comma-separated fields, each whitespace-trimmed. No
// quoting rules: a comma is always a separator.
fn split_fields(line: &str) -> Option<(&str, &str, &str)> {
    let mut fields = line.split(',');
    let respondent = fields.next()?;
    let question = fields.next()?;
    let answer = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((respondent.trim(), question.trim(), answer.trim()))
}
