use crate::models::{League, LeagueProfile};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Profile used for any league without its own entry
pub const DEFAULT_PROFILE: LeagueProfile = LeagueProfile {
    draw_rate: 0.33,
    expected_goals: 2.5,
    home_advantage_factor: 1.10,
};

static LEAGUE_PROFILES: Lazy<HashMap<League, LeagueProfile>> = Lazy::new(|| {
    let profile = |draw_rate, expected_goals, home_advantage_factor| LeagueProfile {
        draw_rate,
        expected_goals,
        home_advantage_factor,
    };

    HashMap::from([
        (League::PremierLeague, profile(0.28, 2.8, 1.15)),
        (League::ChampionsLeague, profile(0.30, 2.6, 1.02)),
        (League::EuropaLeague, profile(0.70, 2.2, 1.01)),
        (League::ConferenceLeague, profile(0.45, 1.5, 1.08)),
        (League::LaLiga, profile(0.25, 2.7, 1.12)),
        (League::Bundesliga, profile(0.24, 3.1, 1.08)),
        (League::SerieA, profile(0.27, 2.5, 1.10)),
        (League::Ligue1, profile(0.26, 2.6, 1.09)),
    ])
});

/// Look up the scoring profile for a league, falling back to the default
pub fn league_profile(league: League) -> LeagueProfile {
    LEAGUE_PROFILES
        .get(&league)
        .copied()
        .unwrap_or(DEFAULT_PROFILE)
}

/// One table line, e.g. "Bundesliga         Draw Rate:  24% | Goals: 3.1 | Home Adv: 1.08"
pub fn format_league_profile(league: League) -> String {
    let profile = league_profile(league);
    format!(
        "{:<18} Draw Rate: {:>3.0}% | Goals: {:.1} | Home Adv: {:.2}",
        league.name(),
        profile.draw_rate * 100.0,
        profile.expected_goals,
        profile.home_advantage_factor
    )
}

/// Format the profile table for display, one league per line
pub fn format_league_table() -> String {
    League::KNOWN
        .into_iter()
        .map(format_league_profile)
        .collect::<Vec<_>>()
        .join("\n")
}
