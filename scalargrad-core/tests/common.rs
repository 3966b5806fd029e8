use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A value with the given magnitude and a random sign, scaled by a factor in [0.5, 1.5).
#[allow(dead_code)]
pub(crate) fn sample_with_magnitude(rng: &mut StdRng, magnitude: f64) -> f64 {
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    sign * magnitude * rng.gen_range(0.5..1.5)
}
