// File: crates/figure-core/tests/stats.rs
// Purpose: Validate the least-squares fit and Pearson correlation helpers.

use figure_core::{linear_fit, pearson};

#[test]
fn fit_recovers_exact_line() {
    let xs: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x - 7.0).collect();
    let (slope, intercept) = linear_fit(&xs, &ys);
    assert!((slope - 3.0).abs() < 1e-9, "slope {slope}");
    assert!((intercept + 7.0).abs() < 1e-9, "intercept {intercept}");
}

#[test]
fn fit_degenerate_x_is_flat() {
    let xs = vec![2.0; 5];
    let ys = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let (slope, intercept) = linear_fit(&xs, &ys);
    assert_eq!(slope, 0.0);
    assert!((intercept - 3.0).abs() < 1e-9);
}

#[test]
fn pearson_perfect_and_inverse() {
    let xs = vec![1.0, 2.0, 3.0, 4.0];
    let up: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
    let down: Vec<f64> = xs.iter().map(|x| -0.5 * x).collect();
    assert!((pearson(&xs, &up) - 1.0).abs() < 1e-9);
    assert!((pearson(&xs, &down) + 1.0).abs() < 1e-9);
}

#[test]
fn pearson_zero_variance_is_zero() {
    let xs = vec![1.0, 1.0, 1.0];
    let ys = vec![1.0, 2.0, 3.0];
    assert_eq!(pearson(&xs, &ys), 0.0);
    assert_eq!(pearson(&[], &[]), 0.0);
}
