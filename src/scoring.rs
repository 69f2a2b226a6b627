//! Two-axis run scoring.

use crate::core::{Run, Score};
use std::ops::RangeInclusive;

/// Questions feeding the personal-liberty axis (x).
pub const PERSONAL_QUESTIONS: RangeInclusive<i64> = 1..=5;

/// Questions feeding the economic-liberty axis (y).
pub const ECONOMIC_QUESTIONS: RangeInclusive<i64> = 6..=10;

/// Answer assumed for a question the run never recorded. Scored as a
/// literal "Maybe" (10 points), which is not the zero-point fallback an
/// unrecognized label gets.
pub const IMPLICIT_ANSWER: &str = "Maybe";

/// Points for a single answer label. Total over any string: labels
/// outside the quiz vocabulary fall through to zero rather than failing.
pub fn answer_points(answer: &str) -> u32 {
    match answer {
        "Agree" => 20,
        "Maybe" => 10,
        "Disagree" => 0,
        _ => 0,
    }
}

/// Score one run: x from questions 1-5, y from questions 6-10. Pure and
/// infallible over any run, however incomplete.
pub fn score_run(run: &Run) -> Score {
    Score {
        x: axis_points(run, PERSONAL_QUESTIONS),
        y: axis_points(run, ECONOMIC_QUESTIONS),
    }
}

fn axis_points(run: &Run, questions: RangeInclusive<i64>) -> u32 {
    questions
        .map(|q| answer_points(run.answer(q).unwrap_or(IMPLICIT_ANSWER)))
        .sum()
}
