//! Calendar date to Julian day conversions
//!
//! This module converts calendar dates to Julian and Modified Julian Days
//! using the arithmetic Julian-date algorithm, elementwise over arrays when
//! given array input.

use ndarray::{Array1, Zip};

use crate::constants::MJD_OFFSET;

/// Calculate the Julian Day from a calendar date.
///
/// This follows the standard arithmetic Julian-date algorithm for proleptic
/// Gregorian dates. All inputs are real-valued: fractional days pass straight
/// through to the result, and out-of-range months or days are not rejected.
/// They shift the date arithmetically instead (month 13 of one year is
/// January of the next) rather than raising an error.
pub fn julian_day(year: f64, month: f64, day: f64) -> f64 {
    367.0 * year - (7.0 * (year + ((month + 9.0) / 12.0).floor()) / 4.0).floor()
        - (3.0 * (((year + (month - 9.0) / 7.0) / 100.0).floor() + 1.0) / 4.0).floor()
        + (275.0 * month / 9.0).floor()
        + day
        + 1_721_028.5
}

/// Calculate the Modified Julian Day (days since 1858-11-17T00:00:00) from a
/// calendar date.
///
/// Same contract as [`julian_day`], shifted to the MJD epoch.
pub fn modified_julian_day(year: f64, month: f64, day: f64) -> f64 {
    julian_day(year, month, day) - MJD_OFFSET
}

/// Elementwise [`modified_julian_day`] over equal-length arrays.
///
/// # Panics
///
/// Panics if the three arrays differ in length.
pub fn modified_julian_day_array(
    years: &Array1<f64>,
    months: &Array1<f64>,
    days: &Array1<f64>,
) -> Array1<f64> {
    Zip::from(years)
        .and(months)
        .and(days)
        .map_collect(|&y, &m, &d| modified_julian_day(y, m, d))
}
