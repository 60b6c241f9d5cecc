//! Contract module containing trait definitions for diagnostic components

mod decomposer;
mod recommender;
mod seasonality_detector;
mod stationarity_tester;

pub use decomposer::Decomposer;
pub use recommender::Recommender;
pub use seasonality_detector::SeasonalityDetector;
pub use stationarity_tester::StationarityTester;
