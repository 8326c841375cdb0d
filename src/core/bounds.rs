use serde::{Deserialize, Serialize};

/// Externally visible per-axis `[min, max]` ranges.
///
/// Each endpoint resolves to the manual override when one is set, otherwise to
/// the calculated (running) value. With no data and no overrides an axis reads
/// `[+inf, -inf]`; scale providers treat that span as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Bounds {
    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    #[must_use]
    pub fn y_span(&self) -> f64 {
        self.y[1] - self.y[0]
    }
}

/// Partial manual-bounds update passed to `ChartDataStore::set_bounds`.
///
/// `None` endpoints leave the current override untouched; there is no way to
/// unset an override once placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundsPatch {
    pub x: [Option<f64>; 2],
    pub y: [Option<f64>; 2],
}

impl BoundsPatch {
    #[must_use]
    pub fn x_range(min: f64, max: f64) -> Self {
        Self {
            x: [Some(min), Some(max)],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn y_range(min: f64, max: f64) -> Self {
        Self {
            y: [Some(min), Some(max)],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.x = [min, max];
        self
    }

    #[must_use]
    pub fn with_y(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.y = [min, max];
        self
    }
}

/// Running min/max across every value ever folded in.
///
/// This is a cumulative aggregate, not a recomputation from current series
/// contents: replacing a series with narrower-range data does not shrink the
/// calculated bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct BoundsAccumulator {
    pub(crate) x: [f64; 2],
    pub(crate) y: [f64; 2],
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self {
            x: [f64::INFINITY, f64::NEG_INFINITY],
            y: [f64::INFINITY, f64::NEG_INFINITY],
        }
    }
}

impl BoundsAccumulator {
    pub(crate) fn fold_x(&mut self, min: f64, max: f64) {
        self.x[0] = self.x[0].min(min);
        self.x[1] = self.x[1].max(max);
    }

    pub(crate) fn fold_y(&mut self, min: f64, max: f64) {
        self.y[0] = self.y[0].min(min);
        self.y[1] = self.y[1].max(max);
    }
}

/// Explicit per-endpoint overrides; unset endpoints fall back to calculated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct ManualBounds {
    pub(crate) x: [Option<f64>; 2],
    pub(crate) y: [Option<f64>; 2],
}

impl ManualBounds {
    pub(crate) fn merge(&mut self, patch: BoundsPatch) {
        for (slot, value) in self.x.iter_mut().zip(patch.x) {
            if value.is_some() {
                *slot = value;
            }
        }
        for (slot, value) in self.y.iter_mut().zip(patch.y) {
            if value.is_some() {
                *slot = value;
            }
        }
    }
}

pub(crate) fn resolve(calculated: &BoundsAccumulator, manual: &ManualBounds) -> Bounds {
    Bounds {
        x: [
            manual.x[0].unwrap_or(calculated.x[0]),
            manual.x[1].unwrap_or(calculated.x[1]),
        ],
        y: [
            manual.y[0].unwrap_or(calculated.y[0]),
            manual.y[1].unwrap_or(calculated.y[1]),
        ],
    }
}
