//! Tidetime: Earth-rotation time utilities inspired by Python's pyTMD
//!
//! This crate converts calendar dates to Modified Julian Day and interpolates
//! tabulated delta time (TT - UT1) corrections to arbitrary epochs, for use
//! in tidal and geophysical calculations. The delta time table is a plain
//! text file of `YEAR MONTH DAY DELTA_T` records, as published by the IERS
//! data services; the caller supplies it, and nothing is fetched or cached.

use thiserror::Error;

pub mod constants;
pub mod deltat;
pub mod julian;
pub mod spline;

// Re-export commonly used items
pub use deltat::{delta_time, delta_time_at, DeltaTimeTable};
pub use julian::{julian_day, modified_julian_day, modified_julian_day_array};
pub use spline::LinearSpline;

/// Main error type for the tidetime library
#[derive(Debug, Error)]
pub enum TidetimeError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Data error: {0}")]
    DataError(String),
}

/// Result type for tidetime operations
pub type Result<T> = std::result::Result<T, TidetimeError>;
