use approx::assert_relative_eq;

use linechart_rs::core::{DataPoint, Spline};
use linechart_rs::error::ChartError;

fn points(pairs: &[(f64, f64)]) -> Vec<DataPoint> {
    pairs.iter().map(|&(x, y)| DataPoint::new(x, y)).collect()
}

#[test]
fn factor_one_yields_exactly_the_input_points() {
    let spline = Spline::new(points(&[(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)]), 1).expect("spline");
    assert_eq!(
        spline.entries(),
        &[
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, 10.0),
            DataPoint::new(2.0, 0.0),
        ]
    );
}

#[test]
fn entry_count_is_input_count_times_factor() {
    let spline = Spline::new(
        points(&[(0.0, 1.0), (100.0, 4.0), (200.0, 2.0), (300.0, 8.0)]),
        10,
    )
    .expect("spline");
    assert_eq!(spline.entries().len(), 40);
}

#[test]
fn duplicate_x_fails_with_domain_error() {
    let err = Spline::new(points(&[(0.0, 0.0), (0.0, 5.0)]), 10)
        .err()
        .expect("duplicate x must fail");
    let ChartError::Domain(message) = err else {
        panic!("expected domain error, got {err:?}");
    };
    assert!(message.contains("consecutive"));
}

#[test]
fn interior_duplicate_x_also_fails() {
    let err = Spline::new(
        points(&[(0.0, 0.0), (1.0, 1.0), (1.0, 2.0), (3.0, 3.0)]),
        10,
    )
    .err()
    .expect("interior duplicate x must fail");
    assert!(matches!(err, ChartError::Domain(_)));
}

#[test]
fn collinear_points_stay_on_the_line() {
    let spline = Spline::new(
        points(&[(0.0, 0.0), (500.0, 500.0), (1000.0, 1000.0)]),
        10,
    )
    .expect("spline");

    assert_eq!(spline.entries().len(), 30);
    for entry in spline.entries() {
        assert_relative_eq!(entry.y, entry.x, epsilon = 1e-9);
    }
}

#[test]
fn resampled_entries_walk_even_rounded_steps() {
    let spline = Spline::new(points(&[(0.0, 0.0), (500.0, 10.0), (1000.0, 0.0)]), 10)
        .expect("spline");
    let entries = spline.entries();

    // count = 30, step = round(1000 / 29) = 34; integer rounding means the
    // final sample need not land on the last input x.
    assert_eq!(entries.len(), 30);
    assert_eq!(entries[0].x, 0.0);
    assert_eq!(entries[1].x, 34.0);
    assert_eq!(entries[29].x, 986.0);
}

#[test]
fn set_factor_resamples_without_new_points() {
    let mut spline =
        Spline::new(points(&[(0.0, 0.0), (100.0, 10.0), (200.0, 0.0)]), 1).expect("spline");
    assert_eq!(spline.entries().len(), 3);

    spline.set_factor(10).expect("factor update");
    assert_eq!(spline.factor(), 10);
    assert_eq!(spline.entries().len(), 30);
}

#[test]
fn set_factor_zero_is_rejected_and_state_kept() {
    let mut spline = Spline::new(points(&[(0.0, 0.0), (10.0, 1.0)]), 2).expect("spline");
    let before = spline.entries().to_vec();
    assert!(spline.set_factor(0).is_err());
    assert_eq!(spline.factor(), 2);
    assert_eq!(spline.entries(), &before[..]);
}

#[test]
fn empty_then_populated_roundtrip() {
    let mut spline = Spline::new(Vec::new(), 10).expect("empty spline");
    assert!(spline.entries().is_empty());

    spline
        .set_points(points(&[(0.0, 1.0), (50.0, 2.0)]))
        .expect("set points");
    assert_eq!(spline.entries().len(), 20);

    spline.set_points(Vec::new()).expect("clear points");
    assert!(spline.entries().is_empty());
}
