use crate::models::{GradingOutcome, PredictionResult, Recommendation};

/// Actual result as typed by the user, e.g. "H 2-1", "d", "A 0-3"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActualResult<'a> {
    outcome: &'a str,
    score: Option<(u32, u32)>,
}

fn parse_actual_result(text: &str) -> Option<ActualResult<'_>> {
    let mut parts = text.split_whitespace();
    let outcome = parts.next()?;
    let score = parts.next().and_then(parse_score);
    Some(ActualResult { outcome, score })
}

/// Parse "<home>-<away>"; anything else is skipped
fn parse_score(score: &str) -> Option<(u32, u32)> {
    let (home, away) = score.split_once('-')?;
    Some((home.trim().parse().ok()?, away.trim().parse().ok()?))
}

fn outcome_matches(outcome: &str, recommendation: &Recommendation) -> bool {
    match recommendation {
        Recommendation::HomeWin(_) => outcome.eq_ignore_ascii_case("H"),
        Recommendation::AwayWin(_) => outcome.eq_ignore_ascii_case("A"),
        Recommendation::Draw => outcome.eq_ignore_ascii_case("D"),
    }
}

/// Grade a prediction against the actual result text.
///
/// Returns `None` when no result was given. An unknown outcome token just
/// counts as a miss, and a missing or malformed score leaves the two goal
/// market fields empty.
pub fn grade_prediction(prediction: &PredictionResult, actual_result: &str) -> Option<GradingOutcome> {
    let actual = parse_actual_result(actual_result)?;

    let outcome_correct = outcome_matches(actual.outcome, &prediction.recommendation);

    let (over_under_correct, both_teams_score_correct) = match actual.score {
        Some((home_goals, away_goals)) => {
            let total = f64::from(home_goals) + f64::from(away_goals);
            let over = (total > 2.5) == (prediction.over25_pct > 50.0);
            let btts = (home_goals > 0 && away_goals > 0) == (prediction.both_teams_score_pct > 50.0);
            (Some(over), Some(btts))
        }
        None => {
            tracing::debug!("No usable score in {:?}, skipping goal markets", actual_result);
            (None, None)
        }
    };

    Some(GradingOutcome {
        outcome_correct,
        over_under_correct,
        both_teams_score_correct,
    })
}

impl GradingOutcome {
    /// One-line learning feedback, e.g. "Learning: CORRECT prediction | O2.5: ✅ | BTS: ❌"
    pub fn summary(&self) -> String {
        let mark = |ok: bool| if ok { "✅" } else { "❌" };

        let mut out = format!(
            "Learning: {} prediction",
            if self.outcome_correct { "CORRECT" } else { "WRONG" }
        );
        if let (Some(over), Some(btts)) = (self.over_under_correct, self.both_teams_score_correct) {
            out.push_str(&format!(" | O2.5: {} | BTS: {}", mark(over), mark(btts)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confidence;

    fn prediction(recommendation: Recommendation, over25_pct: f64, btts_pct: f64) -> PredictionResult {
        PredictionResult {
            home_win_prob: 50.0,
            draw_prob: 25.0,
            away_win_prob: 25.0,
            home_goals: 1.6,
            away_goals: 1.2,
            total_goals: 2.8,
            over25_pct,
            both_teams_score_pct: btts_pct,
            recommendation,
            confidence: Confidence::Medium,
        }
    }

    #[test]
    fn test_home_win_with_score() {
        let p = prediction(Recommendation::HomeWin("Arsenal".to_string()), 59.0, 78.0);
        let graded = grade_prediction(&p, "H 2-1").unwrap();
        assert!(graded.outcome_correct);
        assert_eq!(graded.over_under_correct, Some(true));
        assert_eq!(graded.both_teams_score_correct, Some(true));

        let p = prediction(Recommendation::HomeWin("Arsenal".to_string()), 40.0, 45.0);
        let graded = grade_prediction(&p, "h 2-1").unwrap();
        assert!(graded.outcome_correct);
        assert_eq!(graded.over_under_correct, Some(false));
        assert_eq!(graded.both_teams_score_correct, Some(false));
    }

    #[test]
    fn test_draw_without_score() {
        let p = prediction(Recommendation::Draw, 59.0, 78.0);
        let graded = grade_prediction(&p, "D").unwrap();
        assert!(graded.outcome_correct);
        assert_eq!(graded.over_under_correct, None);
        assert_eq!(graded.both_teams_score_correct, None);

        let p = prediction(Recommendation::AwayWin("Chelsea".to_string()), 59.0, 78.0);
        let graded = grade_prediction(&p, "D").unwrap();
        assert!(!graded.outcome_correct);
    }

    #[test]
    fn test_low_scoring_result() {
        let p = prediction(Recommendation::AwayWin("Chelsea".to_string()), 40.0, 45.0);
        let graded = grade_prediction(&p, "A 0-2").unwrap();
        assert!(graded.outcome_correct);
        assert_eq!(graded.over_under_correct, Some(true));
        assert_eq!(graded.both_teams_score_correct, Some(true));
    }

    #[test]
    fn test_unknown_outcome_token_is_a_miss() {
        let p = prediction(Recommendation::Draw, 59.0, 78.0);
        let graded = grade_prediction(&p, "X 1-1").unwrap();
        assert!(!graded.outcome_correct);
        assert_eq!(graded.over_under_correct, Some(false));
        assert_eq!(graded.both_teams_score_correct, Some(true));
    }

    #[test]
    fn test_malformed_scores_are_skipped() {
        let p = prediction(Recommendation::Draw, 59.0, 78.0);
        for text in ["D 1:1", "D one-one", "D 1-", "D -1-2", "D 1-1-1", "D 2--1"] {
            let graded = grade_prediction(&p, text).unwrap();
            assert!(graded.outcome_correct, "{}", text);
            assert_eq!(graded.over_under_correct, None, "{}", text);
            assert_eq!(graded.both_teams_score_correct, None, "{}", text);
        }
    }

    #[test]
    fn test_empty_result_is_not_graded() {
        let p = prediction(Recommendation::Draw, 59.0, 78.0);
        assert!(grade_prediction(&p, "").is_none());
        assert!(grade_prediction(&p, "   ").is_none());
    }

    #[test]
    fn test_summary() {
        let full = GradingOutcome {
            outcome_correct: true,
            over_under_correct: Some(true),
            both_teams_score_correct: Some(false),
        };
        assert_eq!(full.summary(), "Learning: CORRECT prediction | O2.5: ✅ | BTS: ❌");

        let outcome_only = GradingOutcome {
            outcome_correct: false,
            over_under_correct: None,
            both_teams_score_correct: None,
        };
        assert_eq!(outcome_only.summary(), "Learning: WRONG prediction");
    }
}
