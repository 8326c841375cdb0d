use indexmap::IndexMap;

use crate::core::Bounds;

/// Name of the scale every scale-aware element resolves unless configured
/// otherwise.
pub const DEFAULT_SCALE: &str = "default";

/// Pure mapping from a domain value to a normalized [0, 1] drawing coordinate
/// against the store's current bounds.
///
/// Degenerate-domain policy: a zero-width or non-finite span (including the
/// untouched `[+inf, -inf]` bounds seed) maps every value to the neutral
/// midpoint 0.5, as does a non-finite input value. NaN/Infinity never reaches
/// drawing coordinates.
pub trait ScaleProvider {
    fn scale_x(&self, bounds: &Bounds, value: f64) -> f64;
    fn scale_y(&self, bounds: &Bounds, value: f64) -> f64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearScale;

impl LinearScale {
    fn normalize(range: [f64; 2], value: f64) -> f64 {
        let span = range[1] - range[0];
        if !span.is_finite() || span == 0.0 || !value.is_finite() {
            return 0.5;
        }
        (value - range[0]) / span
    }
}

impl ScaleProvider for LinearScale {
    fn scale_x(&self, bounds: &Bounds, value: f64) -> f64 {
        Self::normalize(bounds.x, value)
    }

    fn scale_y(&self, bounds: &Bounds, value: f64) -> f64 {
        Self::normalize(bounds.y, value)
    }
}

/// Named scale map owned by the chart and passed by reference to elements at
/// render time; never looked up through ambient global state.
pub struct ScaleRegistry {
    scales: IndexMap<String, Box<dyn ScaleProvider>>,
}

impl Default for ScaleRegistry {
    fn default() -> Self {
        let mut scales: IndexMap<String, Box<dyn ScaleProvider>> = IndexMap::new();
        scales.insert(DEFAULT_SCALE.to_owned(), Box::new(LinearScale));
        Self { scales }
    }
}

impl ScaleRegistry {
    pub fn insert(&mut self, name: &str, scale: Box<dyn ScaleProvider>) {
        self.scales.insert(name.to_owned(), scale);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn ScaleProvider> {
        self.scales.get(name).map(Box::as_ref)
    }
}
