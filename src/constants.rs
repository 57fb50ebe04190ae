//! Constants module for time conversions

// Time constants
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// J2000.0 epoch as Modified Julian Day
pub const J2000_MJD: f64 = 51_544.5;

// Calendar constants
/// Offset between Julian Date and Modified Julian Day (the MJD epoch,
/// 1858-11-17T00:00:00, as a Julian date)
pub const MJD_OFFSET: f64 = 2_400_000.5;
