// File: crates/docgen/src/synth.rs
// Summary: Seeded synthetic weather/ridership samples for the correlation dashboard.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};

/// Seed shipped with the repo; the rendered dashboard is reproducible.
pub const SEED: u64 = 42;
pub const SAMPLE_COUNT: usize = 100;

pub const TEMP_RANGE: (f64, f64) = (20.0, 95.0);
pub const RIDERSHIP_RANGE: (f64, f64) = (200.0, 2000.0);
pub const PRECIP_RANGE: (f64, f64) = (0.0, 2.0);

const TEMP_MEAN: f64 = 65.0;
const TEMP_STD: f64 = 15.0;
const RIDERSHIP_BASE: f64 = 1000.0;
const RIDERSHIP_PER_DEGREE: f64 = 20.0;
const RIDERSHIP_NOISE_STD: f64 = 200.0;
const PRECIP_MEAN: f64 = 0.1;

/// Three same-length sample series. Ridership is an increasing affine
/// function of temperature plus zero-mean noise.
pub struct WeatherSamples {
    pub temperature: Vec<f64>,
    pub ridership: Vec<f64>,
    pub precipitation: Vec<f64>,
}

/// Draw the sample series from a `ChaCha8Rng` seeded with `seed`, so the
/// same seed yields identical vectors on every platform.
pub fn weather_samples(seed: u64) -> Result<WeatherSamples> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let temp_dist = Normal::new(TEMP_MEAN, TEMP_STD)?;
    let noise_dist = Normal::new(0.0, RIDERSHIP_NOISE_STD)?;
    // Exp is parameterized by rate; mean = 1 / rate.
    let precip_dist = Exp::new(1.0 / PRECIP_MEAN)?;

    let temperature: Vec<f64> = (0..SAMPLE_COUNT)
        .map(|_| temp_dist.sample(&mut rng).clamp(TEMP_RANGE.0, TEMP_RANGE.1))
        .collect();

    let ridership: Vec<f64> = temperature
        .iter()
        .map(|&t| {
            let noise = noise_dist.sample(&mut rng);
            (RIDERSHIP_BASE + RIDERSHIP_PER_DEGREE * (t - TEMP_MEAN) + noise)
                .clamp(RIDERSHIP_RANGE.0, RIDERSHIP_RANGE.1)
        })
        .collect();

    let precipitation: Vec<f64> = (0..SAMPLE_COUNT)
        .map(|_| precip_dist.sample(&mut rng).clamp(PRECIP_RANGE.0, PRECIP_RANGE.1))
        .collect();

    Ok(WeatherSamples { temperature, ridership, precipitation })
}
