use ising_scan::{metropolis_sweep, ConfigError, InitMode, Lattice};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_zero_side_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let err = Lattice::new_with(&mut rng, 0, InitMode::Random).unwrap_err();
    assert_eq!(err, ConfigError::ZeroLatticeSide(0));
}

#[test]
fn test_ordered_init_is_all_up() {
    let lat = Lattice::new(6, InitMode::Ordered).unwrap();
    assert!(lat.spins().all(|s| s == 1), "ordered init must be all +1");
}

#[test]
fn test_spins_stay_in_domain() {
    // The ±1 invariant must survive any init + update sequence.
    let mut rng = ChaCha20Rng::seed_from_u64(0xDEADBEEF);
    let mut lat = Lattice::new_with(&mut rng, 8, InitMode::Random).unwrap();
    assert!(lat.spins().all(|s| s == 1 || s == -1));

    for _ in 0..50 {
        metropolis_sweep(&mut lat, 0.5, &mut rng);
    }
    assert!(
        lat.spins().all(|s| s == 1 || s == -1),
        "spins left the {{+1, -1}} domain after sweeps"
    );
}

#[test]
fn test_indices_wrap_toroidally() {
    let n = 5;
    let mut lat = Lattice::new(n, InitMode::Ordered).unwrap();
    lat.set(0, 0, -1);

    // Out-of-range and negative indices resolve to (r mod N, c mod N).
    assert_eq!(lat.get(n as isize, n as isize), -1);
    assert_eq!(lat.get(-(n as isize), 0), -1);
    assert_eq!(lat.get(2 * n as isize + 1, 1), 1);
}

#[test]
fn test_neighbor_sum_wraps_at_corner() {
    // neighbor_sum(0,0) must include (N-1,0), (0,N-1), (1,0), (0,1).
    let n = 4;
    let mut lat = Lattice::new(n, InitMode::Ordered).unwrap();
    assert_eq!(lat.neighbor_sum(0, 0), 4);

    lat.set(n as isize - 1, 0, -1); // wrap up
    assert_eq!(lat.neighbor_sum(0, 0), 2);

    lat.set(0, n as isize - 1, -1); // wrap left
    assert_eq!(lat.neighbor_sum(0, 0), 0);

    lat.set(1, 0, -1);
    lat.set(0, 1, -1);
    assert_eq!(lat.neighbor_sum(0, 0), -4);
}

#[test]
#[should_panic(expected = "spin must be +1 or -1")]
fn test_set_rejects_invalid_spin() {
    let mut lat = Lattice::new(3, InitMode::Ordered).unwrap();
    lat.set(0, 0, 0);
}
