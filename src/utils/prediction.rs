use crate::models::{Confidence, League, PredictionResult, Recommendation};
use crate::utils::league_profiles::league_profile;
use rand::Rng;

/// Starting (home, away, draw) percentages before randomization
fn base_probabilities(league: League) -> (f64, f64, f64) {
    match league {
        // Draw epidemic
        League::EuropaLeague => (25.0, 15.0, 60.0),
        League::ConferenceLeague => (35.0, 20.0, 45.0),
        League::PremierLeague => (42.0, 30.0, 28.0),
        League::ChampionsLeague => (40.0, 30.0, 30.0),
        _ => (45.0, 35.0, 20.0),
    }
}

/// Generate a prediction using the thread-local random generator.
/// Repeated calls with the same teams are expected to differ.
pub fn generate_prediction(home_team: &str, away_team: &str, league: League) -> PredictionResult {
    generate_prediction_with_rng(home_team, away_team, league, &mut rand::thread_rng())
}

/// Generate a prediction drawing all noise from `rng`
pub fn generate_prediction_with_rng<R: Rng>(
    home_team: &str,
    away_team: &str,
    league: League,
    rng: &mut R,
) -> PredictionResult {
    let profile = league_profile(league);
    let (base_home, base_away, base_draw) = base_probabilities(league);

    // Draw noise is skewed upwards
    let home = (base_home + rng.gen_range(-8.0..=8.0)).clamp(15.0, 70.0);
    let away = (base_away + rng.gen_range(-8.0..=8.0)).clamp(15.0, 70.0);
    let draw = (base_draw + rng.gen_range(-5.0..=15.0)).clamp(10.0, 80.0);

    let total = home + away + draw;
    let home_win_prob = home / total * 100.0;
    let away_win_prob = away / total * 100.0;
    let draw_prob = draw / total * 100.0;

    let home_goals = (profile.expected_goals * 0.55 + rng.gen_range(-0.3..=0.3)).max(0.5);
    let away_goals = (profile.expected_goals * 0.45 + rng.gen_range(-0.3..=0.3)).max(0.5);
    let total_goals = home_goals + away_goals;

    let over25_pct = ((total_goals - 2.5) * 30.0 + 50.0).clamp(10.0, 90.0);
    let both_teams_score_pct = (home_goals.min(away_goals) * 40.0 + 30.0).clamp(15.0, 85.0);

    let (recommendation, confidence) = recommend(
        home_team,
        away_team,
        league,
        home_win_prob,
        draw_prob,
        away_win_prob,
    );

    tracing::debug!(
        "{} vs {} ({}): home {:.1}%, draw {:.1}%, away {:.1}%, xG {:.2}",
        home_team,
        away_team,
        league,
        home_win_prob,
        draw_prob,
        away_win_prob,
        total_goals
    );

    PredictionResult {
        home_win_prob,
        draw_prob,
        away_win_prob,
        home_goals,
        away_goals,
        total_goals,
        over25_pct,
        both_teams_score_pct,
        recommendation,
        confidence,
    }
}

/// Pick an outcome from normalized percentages; first matching rule wins
fn recommend(
    home_team: &str,
    away_team: &str,
    league: League,
    home_prob: f64,
    draw_prob: f64,
    away_prob: f64,
) -> (Recommendation, Confidence) {
    if draw_prob > 45.0 && league.is_draw_heavy() {
        let confidence = if draw_prob > 50.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        };
        (Recommendation::Draw, confidence)
    } else if home_prob > away_prob + 8.0 {
        let confidence = if home_prob > 50.0 {
            Confidence::High
        } else {
            Confidence::Medium
        };
        (Recommendation::HomeWin(home_team.to_string()), confidence)
    } else if away_prob > home_prob + 8.0 {
        let confidence = if away_prob > 50.0 {
            Confidence::High
        } else {
            Confidence::Medium
        };
        (Recommendation::AwayWin(away_team.to_string()), confidence)
    } else {
        (Recommendation::Draw, Confidence::Low)
    }
}
