//! Delta time (TT - UT1) table loading and interpolation
//!
//! This module reads the whitespace-delimited delta time tables published by
//! the IERS data services (one `YEAR MONTH DAY DELTA_T` record per line,
//! delta time in seconds) and interpolates them to arbitrary Modified Julian
//! Day epochs. The caller is responsible for downloading the table; nothing
//! is fetched or cached here.

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;
use ndarray::Array1;

use crate::julian::modified_julian_day;
use crate::spline::LinearSpline;
use crate::{Result, TidetimeError};

/// Expand a leading `~` path component against `$HOME`.
fn expand_user<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(rest)
        }
        Err(_) => path.to_path_buf(),
    }
}

/// Parse one table row: at least four whitespace-separated numeric columns,
/// `YEAR MONTH DAY DELTA_T`. Trailing columns are ignored.
fn parse_row(line: &str) -> std::result::Result<[f64; 4], String> {
    let mut fields = line.split_whitespace();
    let mut row = [0.0; 4];
    for (column, value) in row.iter_mut().enumerate() {
        let field = fields
            .next()
            .ok_or_else(|| format!("expected 4 columns, found {}", column))?;
        *value = field
            .parse()
            .map_err(|_| format!("invalid number {:?} in column {}", field, column + 1))?;
    }
    Ok(row)
}

/// A delta time table: tabulated dates converted to Modified Julian Day,
/// paired with TT - UT1 offsets in seconds.
#[derive(Debug, Clone)]
pub struct DeltaTimeTable {
    spline: LinearSpline,
}

impl DeltaTimeTable {
    /// Load a delta time table from a whitespace-delimited text file.
    ///
    /// The path may start with `~` for the home directory. Empty lines are
    /// skipped; every other line must parse as a `YEAR MONTH DAY DELTA_T`
    /// record. The records must be sorted by date with no duplicates, and at
    /// least two are needed to interpolate.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_user(path);
        let file = File::open(&path)?;
        let reader = BufReader::new(file);

        let mut mjd = Vec::new();
        let mut delta_t = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let [year, month, day, seconds] = parse_row(&line).map_err(|reason| {
                TidetimeError::ParseError(format!(
                    "{}:{}: {}",
                    path.display(),
                    index + 1,
                    reason
                ))
            })?;

            mjd.push(modified_julian_day(year, month, day));
            delta_t.push(seconds);
        }

        if mjd.len() < 2 {
            return Err(TidetimeError::DataError(format!(
                "delta time table {} needs at least two records, found {}",
                path.display(),
                mjd.len()
            )));
        }
        if let Some(i) = (1..mjd.len()).find(|&i| mjd[i] <= mjd[i - 1]) {
            return Err(TidetimeError::DataError(format!(
                "delta time table {} is not sorted by date at record {}",
                path.display(),
                i + 1
            )));
        }

        let spline = LinearSpline::fit(&mjd, &delta_t)?;

        debug!(
            "loaded {} delta time records from {} spanning MJD {:.1}..{:.1}",
            spline.len(),
            path.display(),
            spline.min_x(),
            spline.max_x()
        );

        Ok(Self { spline })
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.spline.len()
    }

    /// Whether the table has no records. Always false for a loaded table.
    pub fn is_empty(&self) -> bool {
        self.spline.is_empty()
    }

    /// The Modified Julian Day range covered by the table records.
    pub fn mjd_span(&self) -> (f64, f64) {
        (self.spline.min_x(), self.spline.max_x())
    }

    /// Delta time estimate in seconds at a single Modified Julian Day epoch.
    ///
    /// Epochs outside the covered range extrapolate linearly from the
    /// nearest edge segment of the table.
    pub fn interpolate_at(&self, mjd: f64) -> f64 {
        self.spline.evaluate(mjd)
    }

    /// Delta time estimates in seconds at each query epoch, one output per
    /// input. A single-value query through [`interpolate_at`] and a
    /// one-element array here return identical results.
    ///
    /// [`interpolate_at`]: DeltaTimeTable::interpolate_at
    pub fn interpolate(&self, mjd: &Array1<f64>) -> Array1<f64> {
        self.spline.evaluate_array(mjd)
    }
}

/// Calculate delta time estimates at the given Modified Julian Day epochs.
///
/// Loads `delta_file`, converts its date columns to MJD, fits the degree-1
/// interpolating spline through the records, and evaluates it at each query
/// epoch. One-shot: the table is re-read on every call.
pub fn delta_time<P: AsRef<Path>>(delta_file: P, mjd: &Array1<f64>) -> Result<Array1<f64>> {
    Ok(DeltaTimeTable::from_file(delta_file)?.interpolate(mjd))
}

/// Single-epoch form of [`delta_time`].
pub fn delta_time_at<P: AsRef<Path>>(delta_file: P, mjd: f64) -> Result<f64> {
    Ok(DeltaTimeTable::from_file(delta_file)?.interpolate_at(mjd))
}
