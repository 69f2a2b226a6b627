//! Cross-run agreement analysis.

use crate::core::{ConsistencyReport, Run, VaryingQuestion, QUESTION_DOMAIN};
use im::Vector;
use std::collections::BTreeSet;

/// Compare a respondent's runs at every question in the domain.
///
/// An absent answer is a value in its own right: a run that skipped a
/// question disagrees with a run that answered "Maybe" there. (The scorer
/// substitutes "Maybe" for absent answers; this analysis deliberately
/// does not.) Zero or one run is vacuously consistent.
pub fn analyze_consistency(runs: &Vector<Run>) -> ConsistencyReport {
    if runs.len() <= 1 {
        return ConsistencyReport {
            is_consistent: true,
            disagreement_count: 0,
            varying_questions: Vec::new(),
        };
    }

    let mut varying_questions = Vec::new();
    for question in QUESTION_DOMAIN {
        let answers: Vec<Option<&str>> = runs.iter().map(|run| run.answer(question)).collect();
        let distinct: BTreeSet<&Option<&str>> = answers.iter().collect();
        if distinct.len() > 1 {
            varying_questions.push(VaryingQuestion {
                question,
                answers: answers
                    .into_iter()
                    .map(|answer| answer.map(str::to_string))
                    .collect(),
            });
        }
    }

    ConsistencyReport {
        is_consistent: varying_questions.is_empty(),
        disagreement_count: varying_questions.len(),
        varying_questions,
    }
}
