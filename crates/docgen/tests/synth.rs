// File: crates/docgen/tests/synth.rs
// Purpose: Determinism, clipping bounds, and correlation sign of the synthetic samples.

use docgen::synth::{self, PRECIP_RANGE, RIDERSHIP_RANGE, SAMPLE_COUNT, SEED, TEMP_RANGE};
use figure_core::pearson;

#[test]
fn same_seed_same_samples() {
    let a = synth::weather_samples(SEED).expect("sample");
    let b = synth::weather_samples(SEED).expect("sample");
    assert_eq!(a.temperature, b.temperature);
    assert_eq!(a.ridership, b.ridership);
    assert_eq!(a.precipitation, b.precipitation);
}

#[test]
fn different_seed_different_samples() {
    let a = synth::weather_samples(SEED).expect("sample");
    let b = synth::weather_samples(SEED + 1).expect("sample");
    assert_ne!(a.temperature, b.temperature);
}

#[test]
fn sample_lengths_match() {
    let s = synth::weather_samples(SEED).expect("sample");
    assert_eq!(s.temperature.len(), SAMPLE_COUNT);
    assert_eq!(s.ridership.len(), SAMPLE_COUNT);
    assert_eq!(s.precipitation.len(), SAMPLE_COUNT);
}

#[test]
fn clipping_bounds_hold_for_many_seeds() {
    for seed in 0..50 {
        let s = synth::weather_samples(seed).expect("sample");
        assert!(s.temperature.iter().all(|&t| (TEMP_RANGE.0..=TEMP_RANGE.1).contains(&t)));
        assert!(s.ridership.iter().all(|&r| (RIDERSHIP_RANGE.0..=RIDERSHIP_RANGE.1).contains(&r)));
        assert!(s.precipitation.iter().all(|&p| (PRECIP_RANGE.0..=PRECIP_RANGE.1).contains(&p)));
    }
}

#[test]
fn temperature_ridership_correlation_is_positive() {
    // Ridership rises affinely with temperature, so the shipped seed must
    // show a clearly positive correlation.
    let s = synth::weather_samples(SEED).expect("sample");
    let r = pearson(&s.temperature, &s.ridership);
    assert!(r > 0.3, "expected positive correlation, got {r}");
}
