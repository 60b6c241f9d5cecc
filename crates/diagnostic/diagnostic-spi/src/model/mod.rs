//! Model module containing data structures for diagnostics

mod decomposition;
mod presence;
mod recommendation;
mod report;
mod stationarity;

pub use decomposition::{DecompositionModel, DecompositionResult};
pub use presence::ComponentPresence;
pub use recommendation::{ForecastMethod, Recommendation};
pub use report::{DiagnosticReport, PeriodSource};
pub use stationarity::{CriticalValues, LagSelection, StationarityReport};
