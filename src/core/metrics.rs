use crate::core::errors::{Error, Result};
use crate::core::{ConsistencyRanking, RespondentAnalysis, Score};

/// Arithmetic mean of each axis across a respondent's runs, rounded
/// half-to-even. An empty slice averages to the origin.
pub fn average_score(scores: &[Score]) -> Score {
    if scores.is_empty() {
        return Score::default();
    }

    let count = scores.len() as f64;
    let (sum_x, sum_y) = scores
        .iter()
        .fold((0u32, 0u32), |(x, y), score| (x + score.x, y + score.y));

    Score {
        x: round_half_even(sum_x as f64 / count),
        y: round_half_even(sum_y as f64 / count),
    }
}

// Banker's rounding. Plain round() pulls exact .5 means away from zero,
// which disagrees with the quiz's own arithmetic on e.g. a 12.5 mean.
fn round_half_even(value: f64) -> u32 {
    value.round_ties_even() as u32
}

/// Rank respondents by disagreement count, ascending and stable: the
/// first is the most consistent, the last the least, with ties keeping
/// encounter order. Fails when there is no respondent to rank.
pub fn rank_by_consistency(respondents: &[RespondentAnalysis]) -> Result<ConsistencyRanking> {
    let mut ordered: Vec<&RespondentAnalysis> = respondents.iter().collect();
    ordered.sort_by_key(|r| r.consistency.disagreement_count);

    match (ordered.first(), ordered.last()) {
        (Some(most), Some(least)) => Ok(ConsistencyRanking {
            most_consistent: most.name.clone(),
            least_consistent: least.name.clone(),
        }),
        _ => Err(Error::NoRespondents),
    }
}

/// Result-page URL for an averaged coordinate.
pub fn result_link(base_url: &str, average: Score) -> String {
    format!("{}?x={}&y={}", base_url, average.x, average.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even_ties() {
        assert_eq!(round_half_even(10.5), 10);
        assert_eq!(round_half_even(11.5), 12);
        assert_eq!(round_half_even(12.5), 12);
        assert_eq!(round_half_even(17.5), 18);
    }

    #[test]
    fn test_round_half_even_non_ties() {
        assert_eq!(round_half_even(10.4), 10);
        assert_eq!(round_half_even(10.6), 11);
        assert_eq!(round_half_even(0.0), 0);
    }

    #[test]
    fn test_result_link_embeds_both_axes() {
        let link = result_link("https://example.org/results", Score { x: 70, y: 45 });
        assert_eq!(link, "https://example.org/results?x=70&y=45");
    }
}
