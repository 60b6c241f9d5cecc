//! Contract module containing trait definitions for conditioning

mod conditioner;
mod frequency_inferrer;

pub use conditioner::SeriesConditioner;
pub use frequency_inferrer::FrequencyInferrer;
