//! Model module containing data structures

mod conditioned;
mod frequency;
mod observation;
mod time_series;

pub use conditioned::{ConditionedSeries, ConditioningSummary};
pub use frequency::{Frequency, MonthAnchor};
pub use observation::{Observation, RawObservation};
pub use time_series::TimeSeries;
