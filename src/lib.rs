pub mod error;
pub mod models;
pub mod scrapers;
pub mod utils;

pub use error::{AnalyzerError, Result};
pub use models::*;
pub use scrapers::*;
pub use utils::*;

use chrono::Utc;
use rand::Rng;
use scraper::Html;

/// Fetch a match page and run the full analysis on it.
///
/// `actual_result` is the optional user-supplied result ("H 2-1", "D", ...).
/// Only the fetch can fail; everything after it degrades to defaults.
pub async fn analyze_match<R: Rng>(
    fetcher: &PageFetcher,
    url: &str,
    actual_result: Option<&str>,
    rng: &mut R,
) -> Result<MatchAnalysis> {
    let html = fetcher.fetch_html(url).await?;
    let document = Html::parse_document(&html);
    Ok(analyze_document(&document, url, actual_result, rng))
}

/// Analyze an already fetched page: extract, predict, then grade if a result was given
pub fn analyze_document<R: Rng>(
    document: &Html,
    url: &str,
    actual_result: Option<&str>,
    rng: &mut R,
) -> MatchAnalysis {
    let identity = extract_match_identity(url, document);
    let prediction = generate_prediction_with_rng(
        &identity.home_team,
        &identity.away_team,
        identity.league,
        rng,
    );
    tracing::info!(
        "Prediction for {} vs {}: {} ({})",
        identity.home_team,
        identity.away_team,
        prediction.recommendation,
        prediction.confidence
    );

    let grading = actual_result.and_then(|result| grade_prediction(&prediction, result));

    MatchAnalysis {
        url: url.to_string(),
        identity,
        prediction,
        grading,
        analyzed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EUROPA_URL: &str = "https://www.forebet.com/en/europa-league/matches/arsenal-chelsea-123456";

    fn europa_page() -> Html {
        Html::parse_document(
            r#"<html><head>
                <title>Football predictions</title>
                <link rel="canonical" href="https://www.forebet.com/en/football/matches/arsenal-chelsea-123456">
            </head><body><div class="content">Predictions and tips</div></body></html>"#,
        )
    }

    #[test]
    fn test_analyze_europa_page() {
        let document = europa_page();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..200 {
            let analysis = analyze_document(&document, EUROPA_URL, None, &mut rng);
            assert_eq!(analysis.identity.home_team, "Arsenal");
            assert_eq!(analysis.identity.away_team, "Chelsea");
            assert_eq!(analysis.identity.league, League::EuropaLeague);
            assert!(analysis.grading.is_none());
            if analysis.prediction.draw_prob > 45.0 {
                assert_eq!(analysis.prediction.recommendation, Recommendation::Draw);
            }
        }
    }

    #[test]
    fn test_analyze_with_actual_result() {
        let document = europa_page();
        let mut rng = StdRng::seed_from_u64(2);

        let analysis = analyze_document(&document, EUROPA_URL, Some("D 1-1"), &mut rng);
        let grading = analysis.grading.unwrap();
        assert_eq!(
            grading.outcome_correct,
            analysis.prediction.recommendation == Recommendation::Draw
        );
        assert!(grading.over_under_correct.is_some());
        assert!(grading.both_teams_score_correct.is_some());

        let analysis = analyze_document(&document, EUROPA_URL, Some("  "), &mut rng);
        assert!(analysis.grading.is_none());
    }

    #[test]
    fn test_report_format() {
        let document = europa_page();
        let mut rng = StdRng::seed_from_u64(3);
        let analysis = analyze_document(&document, EUROPA_URL, Some("D"), &mut rng);

        let report = analysis.format();
        assert!(report.starts_with("Match: Arsenal vs Chelsea\nLeague: Europa League"));
        assert!(report.contains("Europa League draw alert"));
        assert!(report.contains("Learning: "));

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["identity"]["league"], "Europa League");
    }

    #[tokio::test]
    async fn test_analyze_match_rejects_untrusted_url() {
        let fetcher = PageFetcher::new().unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let result =
            analyze_match(&fetcher, "https://example.com/matches/a-b-1", None, &mut rng).await;
        assert!(matches!(result, Err(AnalyzerError::UntrustedUrl { .. })));
    }
}
