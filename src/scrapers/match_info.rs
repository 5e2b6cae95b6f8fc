//! Heuristics for pulling team names and the competition out of a match page.
//!
//! Each heuristic is a plain function returning `Option`; they are tried in
//! order and the first hit wins. Nothing here fails: when every heuristic
//! misses, a fixed default is used.

use crate::models::{League, MatchIdentity};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

pub const DEFAULT_HOME_TEAM: &str = "Team A";
pub const DEFAULT_AWAY_TEAM: &str = "Team B";

static TEAM_CLASS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?i)team|match|title").ok());
static VS_SEPARATOR: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\s+vs\.?\s+").ok());

type Stage<I, T> = (&'static str, fn(&I) -> Option<T>);

/// Run `stages` in order and return the first result
fn first_success<I, T>(input: &I, stages: &[Stage<I, T>]) -> Option<T> {
    stages.iter().find_map(|(name, stage)| {
        let found = stage(input);
        if found.is_some() {
            tracing::debug!("Match info resolved by {}", name);
        }
        found
    })
}

const TEAM_STAGES: &[Stage<Html, (String, String)>] = &[
    ("headings", teams_from_headings),
    ("title", teams_from_title),
    ("canonical link", teams_from_canonical_link),
];

/// Extract (home, away) team names, falling back to ("Team A", "Team B")
pub fn extract_teams(document: &Html) -> (String, String) {
    first_success(document, TEAM_STAGES).unwrap_or_else(|| {
        tracing::warn!("Could not find team names, using defaults");
        (DEFAULT_HOME_TEAM.to_string(), DEFAULT_AWAY_TEAM.to_string())
    })
}

/// Resolve teams and league for a fetched page
pub fn extract_match_identity(url: &str, document: &Html) -> MatchIdentity {
    let (home_team, away_team) = extract_teams(document);
    let league = detect_league(url, document);
    tracing::info!("Identified {} vs {} ({})", home_team, away_team, league);

    MatchIdentity {
        home_team,
        away_team,
        league,
    }
}

/// Headings and labels whose class looks like a team or match title
fn teams_from_headings(document: &Html) -> Option<(String, String)> {
    let selector = Selector::parse("h1, h2, span").ok()?;
    let class_pattern = TEAM_CLASS.as_ref()?;

    let mut names: Vec<String> = Vec::with_capacity(2);
    for element in document.select(&selector) {
        let Some(class) = element.value().attr("class") else {
            continue;
        };
        if !class_pattern.is_match(class) {
            continue;
        }

        let text = collapse_whitespace(&element.text().collect::<String>());
        // "Arsenal vs Chelsea" headings name both sides; skip them here
        if text.is_empty() || has_vs_word(&text) || names.contains(&text) {
            continue;
        }
        names.push(text);
        if names.len() == 2 {
            break;
        }
    }

    let mut names = names.into_iter();
    Some((names.next()?, names.next()?))
}

/// "<home> vs <away>" in the page title
fn teams_from_title(document: &Html) -> Option<(String, String)> {
    let selector = Selector::parse("title").ok()?;
    let title = document.select(&selector).next()?.text().collect::<String>();

    let mut sides = VS_SEPARATOR.as_ref()?.splitn(&title, 2);
    let (home, away) = (sides.next()?.trim(), sides.next()?.trim());
    if home.is_empty() || away.is_empty() {
        return None;
    }
    Some((home.to_string(), away.to_string()))
}

/// Slug after `matches/` in the canonical link, e.g. `matches/arsenal-chelsea-123456`
fn teams_from_canonical_link(document: &Html) -> Option<(String, String)> {
    let selector = Selector::parse(r#"link[rel="canonical"]"#).ok()?;
    let href = document.select(&selector).next()?.value().attr("href")?;
    teams_from_match_slug(href)
}

fn teams_from_match_slug(url: &str) -> Option<(String, String)> {
    let (_, slug) = url.rsplit_once("matches/")?;
    let slug = slug.split(['/', '?', '#']).next()?;

    let mut tokens: Vec<&str> = slug.split('-').filter(|t| !t.is_empty()).collect();
    if tokens.last().is_some_and(|t| is_number(t)) {
        // Match id
        tokens.pop();
    }

    // A numeric last token belongs to the away name, e.g. "schalke-04"
    let away_len = match tokens.as_slice() {
        [.., prev, last] if is_number(last) && !is_number(prev) && tokens.len() > 2 => 2,
        _ => 1,
    };
    if tokens.len() <= away_len {
        return None;
    }
    let (home, away) = tokens.split_at(tokens.len() - away_len);
    Some((title_case(&home.join(" ")), title_case(&away.join(" "))))
}

struct LeagueRule {
    league: League,
    /// Any of these has to appear
    keywords: &'static [&'static str],
    /// All of these have to appear
    requires: &'static [&'static str],
    /// None of these may appear
    excluded_by: &'static [&'static str],
}

impl LeagueRule {
    const fn new(league: League, keywords: &'static [&'static str]) -> Self {
        Self {
            league,
            keywords,
            requires: &[],
            excluded_by: &[],
        }
    }

    fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|k| haystack.contains(k))
            && self.requires.iter().all(|k| haystack.contains(k))
            && !self.excluded_by.iter().any(|k| haystack.contains(k))
    }
}

const URL_RULES: &[LeagueRule] = &[
    LeagueRule::new(League::PremierLeague, &["premier-league", "epl"]),
    LeagueRule::new(League::ChampionsLeague, &["champions-league", "ucl"]),
    LeagueRule {
        excluded_by: &["conference"],
        ..LeagueRule::new(League::EuropaLeague, &["europa-league"])
    },
    LeagueRule {
        requires: &["conference"],
        ..LeagueRule::new(League::ConferenceLeague, &["conference-league", "europa-league"])
    },
    LeagueRule::new(League::LaLiga, &["la-liga", "spain"]),
    LeagueRule::new(League::Bundesliga, &["bundesliga", "germany"]),
    LeagueRule::new(League::SerieA, &["serie-a", "italy"]),
    LeagueRule::new(League::Ligue1, &["ligue-1", "france"]),
];

const TEXT_RULES: &[LeagueRule] = &[
    LeagueRule::new(League::PremierLeague, &["premier league"]),
    LeagueRule::new(League::ChampionsLeague, &["champions league"]),
    LeagueRule {
        excluded_by: &["conference"],
        ..LeagueRule::new(League::EuropaLeague, &["europa league"])
    },
    LeagueRule::new(League::ConferenceLeague, &["conference league"]),
];

fn match_league(haystack: &str, rules: &[LeagueRule]) -> Option<League> {
    let haystack = haystack.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&haystack))
        .map(|rule| rule.league)
}

struct LeagueSource<'a> {
    url: &'a str,
    document: &'a Html,
}

fn league_from_url(source: &LeagueSource) -> Option<League> {
    match_league(source.url, URL_RULES)
}

fn league_from_page_text(source: &LeagueSource) -> Option<League> {
    let text = source.document.root_element().text().collect::<String>();
    match_league(&text, TEXT_RULES)
}

/// Detect the competition from the URL, then the page text
pub fn detect_league(url: &str, document: &Html) -> League {
    let source = LeagueSource { url, document };
    let stages: [Stage<LeagueSource, League>; 2] = [
        ("url", league_from_url),
        ("page text", league_from_page_text),
    ];

    first_success(&source, &stages).unwrap_or_else(|| {
        tracing::warn!("Could not detect league for {}", url);
        League::Unknown
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_number(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

fn has_vs_word(text: &str) -> bool {
    text.split_whitespace()
        .any(|word| word.trim_end_matches('.').eq_ignore_ascii_case("vs"))
}

/// "arsenal chelsea" -> "Arsenal Chelsea"
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
