pub mod match_info;
pub mod page_fetcher;

pub use match_info::{detect_league, extract_match_identity, extract_teams};
pub use page_fetcher::{FetchConfig, PageFetcher};
