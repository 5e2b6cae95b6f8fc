use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Competitions with their own profile and prediction bias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    #[serde(rename = "Premier League")]
    PremierLeague,
    #[serde(rename = "Champions League")]
    ChampionsLeague,
    #[serde(rename = "Europa League")]
    EuropaLeague,
    #[serde(rename = "Conference League")]
    ConferenceLeague,
    #[serde(rename = "La Liga")]
    LaLiga,
    #[serde(rename = "Bundesliga")]
    Bundesliga,
    #[serde(rename = "Serie A")]
    SerieA,
    #[serde(rename = "Ligue 1")]
    Ligue1,
    #[serde(rename = "Unknown League")]
    Unknown,
}

impl League {
    /// Every recognized league, in display order
    pub const KNOWN: [League; 8] = [
        League::PremierLeague,
        League::ChampionsLeague,
        League::EuropaLeague,
        League::ConferenceLeague,
        League::LaLiga,
        League::Bundesliga,
        League::SerieA,
        League::Ligue1,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            League::PremierLeague => "Premier League",
            League::ChampionsLeague => "Champions League",
            League::EuropaLeague => "Europa League",
            League::ConferenceLeague => "Conference League",
            League::LaLiga => "La Liga",
            League::Bundesliga => "Bundesliga",
            League::SerieA => "Serie A",
            League::Ligue1 => "Ligue 1",
            League::Unknown => "Unknown League",
        }
    }

    /// Look up a league by its display name (case-insensitive).
    /// Anything unrecognized maps to `League::Unknown`.
    pub fn from_name(name: &str) -> League {
        let name = name.trim();
        League::KNOWN
            .into_iter()
            .find(|league| league.name().eq_ignore_ascii_case(name))
            .unwrap_or(League::Unknown)
    }

    /// Europa and Conference League get the draw-first recommendation rule
    pub fn is_draw_heavy(&self) -> bool {
        matches!(self, League::EuropaLeague | League::ConferenceLeague)
    }

    /// Short advisory shown alongside a prediction for this league
    pub fn insight(&self) -> Option<&'static str> {
        match self {
            League::EuropaLeague => Some(
                "Europa League draw alert: draws are heavily favored in this competition.",
            ),
            League::ConferenceLeague => Some(
                "Conference League: expect low-scoring, defensive matches with a high draw probability.",
            ),
            League::PremierLeague => {
                Some("Premier League: most predictable league with a balanced home advantage.")
            }
            League::ChampionsLeague => Some(
                "Champions League: tactical matches with reduced home advantage due to travel.",
            ),
            _ => None,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static scoring characteristics of a league
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeagueProfile {
    pub draw_rate: f64,      // Informational only
    pub expected_goals: f64, // Mean combined goals per match
    pub home_advantage_factor: f64,
}

/// Teams and competition pulled from a match page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchIdentity {
    pub home_team: String,
    pub away_team: String,
    pub league: League,
}

/// Pick made by the prediction generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pick", content = "team")]
pub enum Recommendation {
    HomeWin(String),
    AwayWin(String),
    Draw,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::HomeWin(_) => "Home Win",
            Recommendation::AwayWin(_) => "Away Win",
            Recommendation::Draw => "Draw",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::HomeWin(team) | Recommendation::AwayWin(team) => {
                write!(f, "{}: {}", self.label(), team)
            }
            Recommendation::Draw => f.write_str("Draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::Low => "LOW",
            Confidence::Medium => "MEDIUM",
            Confidence::High => "HIGH",
        })
    }
}

/// Randomized outcome and goal-market prediction for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub home_win_prob: f64, // Percentages, the three sum to 100
    pub draw_prob: f64,
    pub away_win_prob: f64,
    pub home_goals: f64,
    pub away_goals: f64,
    pub total_goals: f64,
    pub over25_pct: f64,
    pub both_teams_score_pct: f64,
    pub recommendation: Recommendation,
    pub confidence: Confidence,
}

impl PredictionResult {
    /// Format the prediction as a readable block
    pub fn format(&self) -> String {
        format!(
            "Probabilities: Home {:.1}% | Draw {:.1}% | Away {:.1}%\n\
             Goals: Home {:.1} | Away {:.1} | Total {:.1}\n\
             Over 2.5 Goals: {:.0}% | Both Teams Score: {:.0}%\n\
             Recommendation: {} | Confidence: {}",
            self.home_win_prob,
            self.draw_prob,
            self.away_win_prob,
            self.home_goals,
            self.away_goals,
            self.total_goals,
            self.over25_pct,
            self.both_teams_score_pct,
            self.recommendation,
            self.confidence
        )
    }
}

/// How a prediction held up against the actual result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingOutcome {
    pub outcome_correct: bool,
    pub over_under_correct: Option<bool>,
    pub both_teams_score_correct: Option<bool>,
}

/// Everything produced for a single analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub url: String,
    pub identity: MatchIdentity,
    pub prediction: PredictionResult,
    pub grading: Option<GradingOutcome>,
    pub analyzed_at: DateTime<Utc>,
}

impl MatchAnalysis {
    /// Format the full report as a readable string
    pub fn format(&self) -> String {
        let mut out = format!(
            "Match: {} vs {}\nLeague: {}\n{}",
            self.identity.home_team,
            self.identity.away_team,
            self.identity.league,
            self.prediction.format()
        );
        if let Some(insight) = self.identity.league.insight() {
            out.push_str("\nInsight: ");
            out.push_str(insight);
        }
        if let Some(grading) = &self.grading {
            out.push('\n');
            out.push_str(&grading.summary());
        }
        out
    }
}
