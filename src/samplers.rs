//! Individual value samplers used by the record generator.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Sample a quantity from a normal distribution over the given range.
///
/// The distribution is centered at the range midpoint with a spread of one
/// quarter of the range width. The result is truncated to an integer and
/// floored at 1, so most draws land inside the range but outliers are
/// possible on the high side.
pub fn sample_quantity<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    let mean = (f64::from(min) + f64::from(max)) / 2.0;
    let spread = f64::from(max.saturating_sub(min)) / 4.0;
    let sampled = Normal::new(mean, spread)
        .map(|normal| normal.sample(rng))
        .unwrap_or(mean);
    (sampled.trunc() as i64).max(1) as u32
}

/// Sample an order date uniformly from `[today - days, today]`, inclusive.
pub fn sample_order_date<R: Rng>(rng: &mut R, today: NaiveDate, days: u32) -> NaiveDate {
    let start = today - Duration::days(i64::from(days));
    start + Duration::days(i64::from(rng.gen_range(0..=days)))
}

/// Sample a replenishment time uniformly from the given inclusive range.
pub fn sample_replenishment<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}
