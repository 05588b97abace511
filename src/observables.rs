// observables.rs - Energy and magnetization of a lattice snapshot

use crate::lattice::Lattice;

/// Total energy of the configuration at external field `b`.
///
/// Sums `-nb·s - b·nb` over every site, then halves the result to correct
/// for counting each bond twice. The field term couples to the neighbor sum
/// rather than the site's own spin; this matches the reference formula and
/// is a fixed, tested contract, not something to "correct" to the textbook
/// Hamiltonian.
pub fn total_energy(lattice: &Lattice, b: f64) -> f64 {
    let n = lattice.side() as isize;
    let mut energy = 0.0;
    for r in 0..n {
        for c in 0..n {
            let s = lattice.get(r, c) as f64;
            let nb = lattice.neighbor_sum(r, c) as f64;
            energy += -nb * s - b * nb;
        }
    }
    energy / 2.0
}

/// Total magnetization: the global sum of all spins, recomputed fresh
/// (not tracked incrementally).
pub fn total_magnetization(lattice: &Lattice) -> f64 {
    lattice.spins().map(|s| s as f64).sum()
}
