use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::bounds::{resolve, BoundsAccumulator, ManualBounds};
use crate::core::{Bounds, BoundsPatch, DataPoint};

/// Numeric formatter applied to raw keys/values at insertion time.
pub type Formatter = Box<dyn Fn(f64) -> f64>;

/// One named series: points sorted ascending by x plus a side-channel info map.
///
/// The info map survives full point replacement via `set_values`.
#[derive(Debug, Default)]
pub struct Series {
    points: Vec<DataPoint>,
    info: IndexMap<String, Value>,
}

impl Series {
    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn info(&self, key: &str) -> Option<&Value> {
        self.info.get(key)
    }
}

/// Change descriptor delivered synchronously to subscribed listeners,
/// exactly once per mutating store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataChange {
    Values { id: String },
    Info { id: String },
    Options,
    Bounds,
}

type ChangeListener = Box<dyn FnMut(&DataChange)>;

/// Store for named series, free-form options, and incrementally maintained
/// value bounds.
///
/// Calculated bounds are a running min/max over every value ever supplied and
/// are monotonically non-shrinking; manual overrides placed with
/// [`ChartDataStore::set_bounds`] win per axis endpoint.
#[derive(Default)]
pub struct ChartDataStore {
    series: IndexMap<String, Series>,
    options: IndexMap<String, Value>,
    calculated: BoundsAccumulator,
    manual: ManualBounds,
    key_formatter: Option<Formatter>,
    value_formatter: Option<Formatter>,
    listeners: Vec<ChangeListener>,
    revision: u64,
}

impl ChartDataStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs store-level key/value formatters applied on every
    /// `set_values` call that does not pass its own.
    #[must_use]
    pub fn with_formatters(mut self, key: Formatter, value: Formatter) -> Self {
        self.key_formatter = Some(key);
        self.value_formatter = Some(value);
        self
    }

    /// Series IDs in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Monotonic counter bumped once per mutating call.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener invoked synchronously at the end of every
    /// mutating call.
    pub fn subscribe(&mut self, listener: impl FnMut(&DataChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replaces the entire point sequence for `id`.
    ///
    /// Raw pairs are formatted, re-sorted by formatted key (duplicate keys are
    /// kept), and folded into the calculated bounds. Side-channel info for the
    /// series is preserved. Empty input is valid and leaves bounds unaffected.
    pub fn set_values<I>(&mut self, id: &str, raw: I)
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.set_values_formatted(id, raw, None, None);
    }

    /// `set_values` with per-call formatter overrides.
    pub fn set_values_formatted<I>(
        &mut self,
        id: &str,
        raw: I,
        key_formatter: Option<&dyn Fn(f64) -> f64>,
        value_formatter: Option<&dyn Fn(f64) -> f64>,
    ) where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut points: Vec<DataPoint> = Vec::new();
        let mut dropped = 0_usize;
        for (raw_key, raw_value) in raw {
            let x = match key_formatter {
                Some(format) => format(raw_key),
                None => self
                    .key_formatter
                    .as_ref()
                    .map_or(raw_key, |format| format(raw_key)),
            };
            let y = match value_formatter {
                Some(format) => format(raw_value),
                None => self
                    .value_formatter
                    .as_ref()
                    .map_or(raw_value, |format| format(raw_value)),
            };
            if x.is_finite() && y.is_finite() {
                points.push(DataPoint::new(x, y));
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!(id, dropped, "dropped non-finite points on set_values");
        }
        points.sort_by_key(|point| OrderedFloat(point.x));

        if let Some((first, last)) = points.first().zip(points.last()) {
            let (min_y, max_y) = points.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(min, max), point| (min.min(point.y), max.max(point.y)),
            );
            self.calculated.fold_x(first.x, last.x);
            self.calculated.fold_y(min_y, max_y);
        }

        debug!(id, count = points.len(), "set series values");
        self.series.entry(id.to_owned()).or_default().points = points;
        self.notify(DataChange::Values { id: id.to_owned() });
    }

    #[must_use]
    pub fn values(&self, id: &str) -> Option<&Series> {
        self.series.get(id)
    }

    /// Merges a map of info entries into the series side channel.
    ///
    /// `patch` must be a JSON object; any other shape is reported through the
    /// diagnostic channel and the call is a no-op (no notification fires).
    pub fn set_info(&mut self, id: &str, patch: Value) {
        let Value::Object(map) = patch else {
            warn!(id, "invalid info payload shape, expected an object");
            return;
        };
        let info = &mut self.series.entry(id.to_owned()).or_default().info;
        for (key, value) in map {
            info.insert(key, value);
        }
        self.notify(DataChange::Info { id: id.to_owned() });
    }

    /// Sets a single info entry for `id`.
    pub fn set_info_entry(&mut self, id: &str, key: &str, value: Value) {
        self.series
            .entry(id.to_owned())
            .or_default()
            .info
            .insert(key.to_owned(), value);
        self.notify(DataChange::Info { id: id.to_owned() });
    }

    #[must_use]
    pub fn info(&self, id: &str, key: &str) -> Option<&Value> {
        self.series.get(id)?.info.get(key)
    }

    /// Merges a map of entries into the global options store.
    ///
    /// Same shape policy as [`ChartDataStore::set_info`].
    pub fn set_options(&mut self, patch: Value) {
        let Value::Object(map) = patch else {
            warn!("invalid options payload shape, expected an object");
            return;
        };
        for (key, value) in map {
            self.options.insert(key, value);
        }
        self.notify(DataChange::Options);
    }

    /// Sets a single global option.
    pub fn set_option(&mut self, key: &str, value: Value) {
        self.options.insert(key.to_owned(), value);
        self.notify(DataChange::Options);
    }

    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Merges manual bounds overrides; `None` endpoints stay untouched.
    pub fn set_bounds(&mut self, patch: BoundsPatch) {
        self.manual.merge(patch);
        self.notify(DataChange::Bounds);
    }

    /// Manual-if-present else calculated, per axis endpoint.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        resolve(&self.calculated, &self.manual)
    }

    fn notify(&mut self, change: DataChange) {
        self.revision = self.revision.wrapping_add(1);
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::{json, Value};

    use super::{ChartDataStore, DataChange};
    use crate::core::BoundsPatch;

    #[test]
    fn set_values_sorts_by_key() {
        let mut store = ChartDataStore::new();
        store.set_values("a", vec![(3.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        let xs: Vec<f64> = store
            .values("a")
            .expect("series present")
            .points()
            .iter()
            .map(|point| point.x)
            .collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn formatters_apply_at_insertion() {
        let mut store = ChartDataStore::new()
            .with_formatters(Box::new(|key| key * 10.0), Box::new(|value| value + 1.0));
        store.set_values("a", vec![(1.0, 0.0)]);
        let point = store.values("a").expect("series present").points()[0];
        assert_eq!(point.x, 10.0);
        assert_eq!(point.y, 1.0);
    }

    #[test]
    fn info_survives_value_replacement() {
        let mut store = ChartDataStore::new();
        store.set_info_entry("a", "color", json!([255, 0, 0]));
        store.set_values("a", vec![(0.0, 0.0)]);
        store.set_values("a", vec![(1.0, 1.0)]);
        assert_eq!(store.info("a", "color"), Some(&json!([255, 0, 0])));
    }

    #[test]
    fn malformed_info_payload_is_a_noop() {
        let mut store = ChartDataStore::new();
        let revision = store.revision();
        store.set_info("a", Value::from(42));
        assert_eq!(store.revision(), revision);
        assert!(store.values("a").is_none());
    }

    #[test]
    fn one_notification_per_mutating_call() {
        let mut store = ChartDataStore::new();
        let seen: Rc<RefCell<Vec<DataChange>>> = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        store.set_values("a", vec![(0.0, 1.0)]);
        store.set_option("grid", json!({"stepsize": {"x": 1.0}}));
        store.set_bounds(BoundsPatch::x_range(0.0, 10.0));

        let seen = seen.borrow();
        assert_eq!(
            *seen,
            vec![
                DataChange::Values { id: "a".to_owned() },
                DataChange::Options,
                DataChange::Bounds,
            ]
        );
    }
}
