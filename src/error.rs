//! Error types for chart resolution.

use crate::calendar::CalendarError;

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Error type for chart operations.
///
/// Invalid birth data and calendar-conversion failures are kept distinct so
/// callers can tell "bad input" from "date outside the supported calendar".
/// A failed resolution never substitutes a default star.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("invalid birth input: {0}")]
    InvalidInput(String),

    #[error("calendar conversion failed: {0}")]
    CalendarConversion(#[from] CalendarError),
}
