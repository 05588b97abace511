// metropolis.rs - Single-spin-flip Metropolis sweep

use crate::lattice::Lattice;
use rand::Rng;

/// Returned by `metropolis_sweep`, allows O(1) book-keeping in the driver.
#[derive(Debug, Clone, Copy)]
pub struct SweepInfo {
    /// Proposals made (always N²).
    pub proposed: usize,
    /// Proposals accepted.
    pub accepted: usize,
}

impl SweepInfo {
    /// Fraction of proposals accepted during the sweep.
    pub fn acceptance_rate(&self) -> f64 {
        self.accepted as f64 / self.proposed as f64
    }
}

/// Acceptance probability for a proposed flip with energy change `delta_e`
/// at inverse temperature `beta`, always in [0, 1].
///
/// `exp` is only ever evaluated on a non-positive argument: energy-lowering
/// moves short-circuit to 1, so extreme β·ΔE products underflow to 0 instead
/// of overflowing.
#[inline(always)]
pub fn acceptance(delta_e: f64, beta: f64) -> f64 {
    let arg = -delta_e * beta;
    if arg >= 0.0 {
        1.0
    } else {
        arg.exp()
    }
}

/// Advance the Markov chain by one sweep: N² proposed single-spin flips,
/// each at an independently and uniformly chosen site, with replacement
/// (a sweep does not visit every site exactly once).
///
/// Per proposal at (a, b) with spin s the flip cost is `2·s·neighbor_sum`;
/// the external field does not enter the acceptance decision. Accepted flips
/// mutate the lattice in place, so later proposals within the same sweep see
/// the updated neighbors; the chain is strictly sequential. The updater
/// itself keeps no state between sweeps.
pub fn metropolis_sweep(lattice: &mut Lattice, beta: f64, rng: &mut impl Rng) -> SweepInfo {
    let n = lattice.side();
    let proposals = lattice.n_sites();
    let mut accepted = 0usize;

    for _ in 0..proposals {
        let a = rng.gen_range(0..n) as isize;
        let b = rng.gen_range(0..n) as isize;

        let s = lattice.get(a, b) as f64;
        let nb = lattice.neighbor_sum(a, b) as f64;
        let delta_e = 2.0 * s * nb;

        let accept = if delta_e < 0.0 {
            true
        } else {
            rng.gen::<f64>() < acceptance(delta_e, beta)
        };

        if accept {
            lattice.flip(a, b);
            accepted += 1;
        }
    }

    SweepInfo {
        proposed: proposals,
        accepted,
    }
}
