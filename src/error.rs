use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop a match analysis.
///
/// Only fetching can fail; extraction and grading degrade to defaults instead.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("URL must start with {expected}: {url}")]
    UntrustedUrl { url: String, expected: String },

    #[error("Failed to fetch page: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to read saved page {}: {source}", .path.display())]
    ReadPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzerError {
    /// A short remediation hint to show next to the error, if there is one
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AnalyzerError::Fetch(_) => Some(
                "Make sure the URL is accessible and try again. Some matches may not be available for analysis.",
            ),
            AnalyzerError::UntrustedUrl { .. } => Some("Paste the full match URL from the site."),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AnalyzerError {
    fn from(err: reqwest::Error) -> Self {
        AnalyzerError::Fetch(err)
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
