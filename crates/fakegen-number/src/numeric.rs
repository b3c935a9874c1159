//! Numeric value generators.
//!
//! Every function takes the random source explicitly, so callers decide
//! whether to use a seeded generator or a per-thread one.

use rand::distributions::uniform::SampleUniform;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a random integer in `[min, max]` (inclusive), for any integer width.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn int_range<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    rng.gen_range(min..=max)
}

/// Generate a random number between `min` and `max` (inclusive).
///
/// # Panics
///
/// Panics if `min > max`. The `number` lookup rejects that case before
/// calling this.
pub fn number<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    int_range(rng, min, max)
}

/// Generate a random uint8 value.
pub fn uint8<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen()
}

/// Generate a random uint16 value.
pub fn uint16<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.gen()
}

/// Generate a random uint32 value.
pub fn uint32<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen()
}

/// Generate a random uint64 value.
pub fn uint64<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen()
}

/// Generate a random int8 value.
pub fn int8<R: Rng + ?Sized>(rng: &mut R) -> i8 {
    rng.gen()
}

/// Generate a random int16 value.
pub fn int16<R: Rng + ?Sized>(rng: &mut R) -> i16 {
    rng.gen()
}

/// Generate a random int32 value.
pub fn int32<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen()
}

/// Generate a random int64 value.
pub fn int64<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen()
}

/// Generate a random float32 in `[f32::MIN_POSITIVE, f32::MAX]`.
pub fn float32<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    float32_range(rng, f32::MIN_POSITIVE, f32::MAX)
}

/// Generate a random float32 between `min` and `max`.
///
/// Bounds are not validated. For `min <= max` the result lies in the
/// closed interval, and finite bounds never produce an infinite result.
pub fn float32_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min == max {
        return min;
    }
    let t: f32 = rng.gen();
    // Interpolate instead of `min + t * (max - min)`, which overflows for
    // bounds of opposite sign near the type's limits.
    let value = min * (1.0 - t) + max * t;
    value.max(min).min(max)
}

/// Generate a random float64 in `[f64::MIN_POSITIVE, f64::MAX]`.
pub fn float64<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    float64_range(rng, f64::MIN_POSITIVE, f64::MAX)
}

/// Generate a random float64 between `min` and `max`.
///
/// Same interval behavior as [`float32_range`].
pub fn float64_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min == max {
        return min;
    }
    let t: f64 = rng.gen();
    let value = min * (1.0 - t) + max * t;
    value.max(min).min(max)
}

/// Shuffle a slice of ints in place.
///
/// Fisher-Yates: each index `i`, from low to high, is swapped with a
/// uniformly chosen index in `[0, i]`.
pub fn shuffle_ints<R: Rng + ?Sized>(rng: &mut R, ints: &mut [i64]) {
    for i in 0..ints.len() {
        let j = rng.gen_range(0..=i);
        ints.swap(i, j);
    }
}

/// Pick a random element of `ints`, or `None` if it is empty.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, ints: &[i64]) -> Option<i64> {
    ints.choose(rng).copied()
}
