pub mod grading;
pub mod league_profiles;
pub mod prediction;

pub use grading::grade_prediction;
pub use league_profiles::{format_league_profile, format_league_table, league_profile, DEFAULT_PROFILE};
pub use prediction::{generate_prediction, generate_prediction_with_rng};
