//! Piecewise-linear interpolating splines
//!
//! A degree-1 spline with zero smoothing passes exactly through every knot
//! and extrapolates linearly beyond the covered range, matching the behavior
//! expected when fitting tabulated geophysical corrections.

use ndarray::Array1;

use crate::{Result, TidetimeError};

/// A degree-1 interpolating spline.
///
/// Evaluation is exact at the knots, linear between them, and linear beyond
/// either end using the slope of the nearest edge segment (no clamping to the
/// boundary values).
#[derive(Debug, Clone)]
pub struct LinearSpline {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LinearSpline {
    /// Fit a spline through the given knots.
    ///
    /// Requires at least two knots with strictly increasing `x`; anything
    /// else would produce a meaningless fit and is rejected.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(TidetimeError::DataError(format!(
                "knot and value arrays differ in length: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(TidetimeError::DataError(format!(
                "spline fit needs at least two knots, found {}",
                x.len()
            )));
        }
        if let Some(i) = (1..x.len()).find(|&i| x[i] <= x[i - 1]) {
            return Err(TidetimeError::DataError(format!(
                "spline knots must be strictly increasing: x[{}] = {} follows x[{}] = {}",
                i,
                x[i],
                i - 1,
                x[i - 1]
            )));
        }

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Evaluate the spline at a single point.
    pub fn evaluate(&self, x: f64) -> f64 {
        // Upper knot of the bracketing segment, clamped so queries beyond
        // either end land on the edge segment and extrapolate its slope.
        let hi = self.x.partition_point(|&knot| knot < x);
        let hi = hi.clamp(1, self.x.len() - 1);
        let lo = hi - 1;

        let t = (x - self.x[lo]) / (self.x[hi] - self.x[lo]);
        self.y[lo] + t * (self.y[hi] - self.y[lo])
    }

    /// Evaluate the spline elementwise over an array of points.
    pub fn evaluate_array(&self, x: &Array1<f64>) -> Array1<f64> {
        x.mapv(|xi| self.evaluate(xi))
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the spline has no knots. Always false for a fitted spline.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Smallest knot position.
    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    /// Largest knot position.
    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }
}
