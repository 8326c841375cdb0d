use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};

use linechart_rs::core::{BoundsPatch, ChartDataStore, DataChange};

#[test]
fn calculated_bounds_accumulate_across_series() {
    let mut store = ChartDataStore::new();
    store.set_values("a", vec![(0.0, 10.0), (5.0, 20.0)]);
    store.set_values("b", vec![(-3.0, 15.0), (2.0, 40.0)]);

    let bounds = store.bounds();
    assert_eq!(bounds.x, [-3.0, 5.0]);
    assert_eq!(bounds.y, [10.0, 40.0]);
}

#[test]
fn calculated_bounds_never_shrink_on_replacement() {
    let mut store = ChartDataStore::new();
    store.set_values("a", vec![(0.0, 0.0), (100.0, 100.0)]);
    store.set_values("a", vec![(40.0, 40.0), (60.0, 60.0)]);

    // Replacing with narrower data keeps the cumulative aggregate.
    let bounds = store.bounds();
    assert_eq!(bounds.x, [0.0, 100.0]);
    assert_eq!(bounds.y, [0.0, 100.0]);
}

#[test]
fn empty_set_values_leaves_bounds_unaffected() {
    let mut store = ChartDataStore::new();
    store.set_values("a", vec![(1.0, 2.0)]);
    let before = store.bounds();
    store.set_values("a", Vec::new());
    assert_eq!(store.bounds(), before);
    assert!(store.values("a").expect("series present").is_empty());
}

#[test]
fn manual_x_override_wins_while_y_stays_calculated() {
    let mut store = ChartDataStore::new();
    store.set_values("a", vec![(0.0, 1.0), (10.0, 3.0)]);
    store.set_bounds(BoundsPatch::x_range(2.0, 8.0));

    let bounds = store.bounds();
    assert_eq!(bounds.x, [2.0, 8.0]);
    assert_eq!(bounds.y, [1.0, 3.0]);
}

#[test]
fn duplicate_keys_are_kept_in_order() {
    let mut store = ChartDataStore::new();
    store.set_values("a", vec![(1.0, 5.0), (1.0, 6.0), (0.0, 1.0)]);
    let xs: Vec<f64> = store
        .values("a")
        .expect("series present")
        .points()
        .iter()
        .map(|point| point.x)
        .collect();
    assert_eq!(xs, vec![0.0, 1.0, 1.0]);
}

#[test]
fn bulk_info_merge_and_single_entry_coexist() {
    let mut store = ChartDataStore::new();
    store.set_info("a", json!({"color": [0, 0, 255], "label": "load"}));
    store.set_info_entry("a", "target", json!(42.0));

    assert_eq!(store.info("a", "color"), Some(&json!([0, 0, 255])));
    assert_eq!(store.info("a", "label"), Some(&json!("load")));
    assert_eq!(store.info("a", "target"), Some(&json!(42.0)));
    assert_eq!(store.info("a", "missing"), None);
}

#[test]
fn malformed_payloads_do_not_mutate_or_notify() {
    let mut store = ChartDataStore::new();
    let notifications: Rc<RefCell<usize>> = Rc::default();
    let sink = Rc::clone(&notifications);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    store.set_info("a", Value::from(7));
    store.set_info("a", Value::from(vec![1, 2, 3]));
    store.set_options(Value::from("not a map"));

    assert_eq!(*notifications.borrow(), 0);
    assert!(store.values("a").is_none());
    assert_eq!(store.revision(), 0);
}

#[test]
fn each_mutating_call_notifies_exactly_once() {
    let mut store = ChartDataStore::new();
    let changes: Rc<RefCell<Vec<DataChange>>> = Rc::default();
    let sink = Rc::clone(&changes);
    store.subscribe(move |change| sink.borrow_mut().push(change.clone()));

    store.set_values("a", vec![(0.0, 1.0), (1.0, 2.0)]);
    store.set_info("a", json!({"color": [255, 0, 0], "target": 3.0}));
    store.set_options(json!({"grid": {"stepsize": {"x": 1.0}}}));
    store.set_bounds(BoundsPatch::y_range(0.0, 10.0));

    assert_eq!(
        *changes.borrow(),
        vec![
            DataChange::Values { id: "a".to_owned() },
            DataChange::Info { id: "a".to_owned() },
            DataChange::Options,
            DataChange::Bounds,
        ]
    );
    assert_eq!(store.revision(), 4);
}

#[test]
fn per_call_formatters_override_store_formatters() {
    let mut store = ChartDataStore::new()
        .with_formatters(Box::new(|key| key * 2.0), Box::new(|value| value));
    store.set_values("default", vec![(1.0, 1.0)]);
    store.set_values_formatted(
        "override",
        vec![(1.0, 1.0)],
        Some(&|key| key + 100.0),
        None,
    );

    assert_eq!(
        store.values("default").expect("series").points()[0].x,
        2.0
    );
    assert_eq!(
        store.values("override").expect("series").points()[0].x,
        101.0
    );
}

#[test]
fn ids_iterate_in_insertion_order() {
    let mut store = ChartDataStore::new();
    store.set_values("b", vec![(0.0, 0.0)]);
    store.set_values("a", vec![(0.0, 0.0)]);
    store.set_info_entry("c", "color", json!([1, 2, 3]));

    let ids: Vec<&str> = store.ids().collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}
