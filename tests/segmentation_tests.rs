use quizmap::core::AnswerRecord;
use quizmap::segmentation::{segment_records, RunSegmenter};

fn rec(respondent: &str, question: i64, answer: &str) -> AnswerRecord {
    AnswerRecord {
        respondent: respondent.to_string(),
        question,
        answer: answer.to_string(),
    }
}

#[test]
fn test_segment_empty_stream() {
    let respondents = segment_records(vec![]);
    assert!(respondents.is_empty());
}

#[test]
fn test_segment_complete_runs_per_respondent() {
    let mut records = Vec::new();
    for name in ["alice", "bob"] {
        for q in 1..=10 {
            records.push(rec(name, q, "Agree"));
        }
    }

    let respondents = segment_records(records);

    assert_eq!(respondents.len(), 2);
    assert_eq!(respondents[0].name, "alice");
    assert_eq!(respondents[1].name, "bob");
    for respondent in &respondents {
        assert_eq!(respondent.runs.len(), 1);
        assert_eq!(respondent.runs[0].len(), 10);
    }
}

#[test]
fn test_question_one_closes_previous_run() {
    let records = vec![
        rec("alice", 1, "Agree"),
        rec("alice", 2, "Maybe"),
        rec("alice", 3, "Disagree"),
        rec("alice", 1, "Disagree"),
        rec("alice", 2, "Agree"),
        rec("alice", 3, "Maybe"),
    ];

    let respondents = segment_records(records);

    assert_eq!(respondents.len(), 1);
    assert_eq!(respondents[0].runs.len(), 2);
    assert_eq!(respondents[0].runs[0].answer(1), Some("Agree"));
    assert_eq!(respondents[0].runs[1].answer(1), Some("Disagree"));
}

#[test]
fn test_respondent_change_flushes_to_previous_respondent() {
    // bob's first record arrives while alice's run is still buffered;
    // the buffered answers must land under alice.
    let records = vec![
        rec("alice", 4, "Agree"),
        rec("alice", 5, "Maybe"),
        rec("bob", 6, "Disagree"),
    ];

    let respondents = segment_records(records);

    assert_eq!(respondents.len(), 2);
    assert_eq!(respondents[0].name, "alice");
    assert_eq!(respondents[0].runs.len(), 1);
    assert_eq!(respondents[0].runs[0].len(), 2);
    assert_eq!(respondents[0].runs[0].answer(5), Some("Maybe"));

    assert_eq!(respondents[1].name, "bob");
    assert_eq!(respondents[1].runs.len(), 1);
    assert_eq!(respondents[1].runs[0].answer(6), Some("Disagree"));
}

#[test]
fn test_run_may_start_mid_quiz() {
    let respondents = segment_records(vec![rec("carol", 7, "Agree")]);

    assert_eq!(respondents.len(), 1);
    assert_eq!(respondents[0].runs.len(), 1);
    assert_eq!(respondents[0].runs[0].answer(7), Some("Agree"));
}

#[test]
fn test_repeated_question_within_run_keeps_last_answer() {
    // Question 2 repeats without crossing a boundary, so the second
    // answer overwrites the first inside the same run.
    let records = vec![
        rec("alice", 1, "Agree"),
        rec("alice", 2, "Maybe"),
        rec("alice", 2, "Disagree"),
    ];

    let respondents = segment_records(records);

    assert_eq!(respondents[0].runs.len(), 1);
    assert_eq!(respondents[0].runs[0].len(), 2);
    assert_eq!(respondents[0].runs[0].answer(2), Some("Disagree"));
}

#[test]
fn test_repeated_question_one_splits_into_single_answer_runs() {
    // Question 1 always opens a new run when the buffer is non-empty,
    // so back-to-back Q1 answers become two one-answer runs.
    let records = vec![rec("alice", 1, "Agree"), rec("alice", 1, "Disagree")];

    let respondents = segment_records(records);

    assert_eq!(respondents[0].runs.len(), 2);
    assert_eq!(respondents[0].runs[0].len(), 1);
    assert_eq!(respondents[0].runs[1].len(), 1);
}

#[test]
fn test_returning_respondent_keeps_first_appearance_order() {
    let records = vec![
        rec("alice", 1, "Agree"),
        rec("alice", 2, "Maybe"),
        rec("bob", 1, "Disagree"),
        rec("alice", 1, "Maybe"),
    ];

    let respondents = segment_records(records);

    assert_eq!(respondents.len(), 2);
    assert_eq!(respondents[0].name, "alice");
    assert_eq!(respondents[1].name, "bob");
    assert_eq!(respondents[0].runs.len(), 2);
    assert_eq!(respondents[1].runs.len(), 1);
}

#[test]
fn test_out_of_domain_question_is_stored() {
    // Segmentation records whatever question number arrives; only
    // scoring and consistency restrict themselves to questions 1-10.
    let respondents = segment_records(vec![rec("alice", 99, "Agree")]);

    assert_eq!(respondents.len(), 1);
    assert_eq!(respondents[0].runs[0].answer(99), Some("Agree"));
}

#[test]
fn test_manual_ingest_matches_segment_records() {
    let records = vec![
        rec("alice", 1, "Agree"),
        rec("alice", 2, "Maybe"),
        rec("bob", 1, "Disagree"),
        rec("bob", 2, "Agree"),
        rec("bob", 1, "Maybe"),
    ];

    let mut segmenter = RunSegmenter::default();
    for record in records.clone() {
        segmenter.ingest(record);
    }
    let manual = segmenter.finish();
    let batch = segment_records(records);

    assert_eq!(manual, batch);
}

#[test]
fn test_finish_flushes_trailing_run() {
    let mut segmenter = RunSegmenter::default();
    segmenter.ingest(rec("alice", 1, "Agree"));
    segmenter.ingest(rec("alice", 2, "Maybe"));

    let respondents = segmenter.finish();

    assert_eq!(respondents.len(), 1);
    assert_eq!(respondents[0].runs.len(), 1);
    assert_eq!(respondents[0].runs[0].len(), 2);
}
