use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic per-temperature-point RNG.
///
/// Scrambles the master seed with the point index (splitmix-style) so each
/// point owns an independent ChaCha20 stream. A run with the same config and
/// seed is bit-identical whether points execute serially or in parallel.
pub fn point_rng(master: u64, point: usize) -> ChaCha20Rng {
    let mut x = master ^ ((point as u64).wrapping_mul(0x9E3779B97F4A7C15));
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^= x >> 31;
    ChaCha20Rng::seed_from_u64(x)
}
