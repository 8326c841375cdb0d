use ordered_float::OrderedFloat;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Default output-density / curvature-damping factor.
pub const DEFAULT_FACTOR: u32 = 10;

/// Tunable natural-cubic-spline variant used to smooth series for display.
///
/// The construction follows the textbook natural spline (second derivative
/// pinned to zero at both ends, forward recurrence plus back-substitution)
/// with one deliberate deviation: the forcing term and the cubic blend are
/// scaled by `factor` instead of the textbook constant, so a larger `factor`
/// flattens the curvature contribution. The same `factor` also sets the
/// output density: resampling emits `n * factor` evenly stepped entries,
/// where the x-step is the rounded quotient of the domain span over
/// `count - 1`. Because of that integer rounding the final entry may not land
/// exactly on the last input x.
pub struct Spline {
    factor: u32,
    xs: Vec<f64>,
    ys: Vec<f64>,
    y2: Vec<f64>,
    entries: Vec<DataPoint>,
}

impl Spline {
    /// Builds a spline over `points` (sorted internally by x).
    ///
    /// Fails with a domain error when any adjacent x-gap is zero or when
    /// `factor` is zero.
    pub fn new<I>(points: I, factor: u32) -> ChartResult<Self>
    where
        I: IntoIterator<Item = DataPoint>,
    {
        validate_factor(factor)?;
        let mut spline = Self {
            factor,
            xs: Vec::new(),
            ys: Vec::new(),
            y2: Vec::new(),
            entries: Vec::new(),
        };
        spline.set_points(points)?;
        Ok(spline)
    }

    #[must_use]
    pub fn factor(&self) -> u32 {
        self.factor
    }

    /// Resampled output points.
    #[must_use]
    pub fn entries(&self) -> &[DataPoint] {
        &self.entries
    }

    /// Sorted input points.
    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| DataPoint::new(x, y))
    }

    /// Replaces the input point set and reruns both the second-derivative
    /// pass and the resampling pass. Empty input yields empty output.
    pub fn set_points<I>(&mut self, points: I) -> ChartResult<()>
    where
        I: IntoIterator<Item = DataPoint>,
    {
        let mut points: Vec<DataPoint> = points.into_iter().collect();
        points.sort_by_key(|point| OrderedFloat(point.x));
        self.xs = points.iter().map(|point| point.x).collect();
        self.ys = points.iter().map(|point| point.y).collect();
        self.y2.clear();
        self.entries.clear();
        if self.xs.is_empty() {
            return Ok(());
        }
        self.second_derivatives()?;
        self.resample()
    }

    /// Changes the factor; when the value differs, only the resampling pass
    /// reruns (the second-derivative pass reruns when points are re-set).
    pub fn set_factor(&mut self, factor: u32) -> ChartResult<()> {
        validate_factor(factor)?;
        if factor == self.factor {
            return Ok(());
        }
        self.factor = factor;
        if self.xs.is_empty() {
            return Ok(());
        }
        self.resample()
    }

    fn second_derivatives(&mut self) -> ChartResult<()> {
        let n = self.xs.len();
        self.y2 = vec![0.0; n];
        let mut deltas = vec![0.0; n];
        let factor = f64::from(self.factor);

        for i in 1..n.saturating_sub(1) {
            let two_step = self.xs[i + 1] - self.xs[i - 1];
            let forward = self.xs[i + 1] - self.xs[i];
            let backward = self.xs[i] - self.xs[i - 1];
            if two_step == 0.0 || forward == 0.0 || backward == 0.0 {
                return Err(ChartError::non_consecutive());
            }

            let step = backward / two_step;
            let p = step * self.y2[i - 1] + 2.0;
            self.y2[i] = (step - 1.0) / p;

            let delta =
                (self.ys[i + 1] - self.ys[i]) / forward - (self.ys[i] - self.ys[i - 1]) / backward;
            deltas[i] = (factor * delta / two_step - step * deltas[i - 1]) / p;
        }

        for i in (0..n.saturating_sub(1)).rev() {
            self.y2[i] = self.y2[i] * self.y2[i + 1] + deltas[i];
        }
        Ok(())
    }

    fn resample(&mut self) -> ChartResult<()> {
        let n = self.xs.len();
        let count = n * self.factor as usize;
        self.entries.clear();
        self.entries.push(DataPoint::new(self.xs[0], self.ys[0]));
        if count <= 1 {
            return Ok(());
        }

        let span = self.xs[n - 1] - self.xs[0];
        let step = (span / (count - 1) as f64).round();
        for i in 1..count {
            let x = self.xs[0] + i as f64 * step;
            let y = self.interpolate(x)?;
            self.entries.push(DataPoint::new(x, y));
        }
        Ok(())
    }

    fn interpolate(&self, x: f64) -> ChartResult<f64> {
        let mut max = self.xs.len() - 1;
        let mut min = 0_usize;
        // Narrow the bracketing window down to size 1.
        while max - min > 1 {
            let mid = (max + min) / 2;
            if self.xs[mid] > x {
                max = mid;
            } else {
                min = mid;
            }
        }

        let dx = self.xs[max] - self.xs[min];
        if dx == 0.0 {
            return Err(ChartError::non_consecutive());
        }

        let a = (self.xs[max] - x) / dx;
        let b = (x - self.xs[min]) / dx;
        let factor = f64::from(self.factor);
        Ok(a * self.ys[min]
            + b * self.ys[max]
            + ((a * a * a - a) * self.y2[min] + (b * b * b - b) * self.y2[max]) * dx * dx / factor)
    }
}

fn validate_factor(factor: u32) -> ChartResult<()> {
    if factor == 0 {
        return Err(ChartError::Domain(
            "factor must be a positive integer".to_owned(),
        ));
    }
    Ok(())
}
