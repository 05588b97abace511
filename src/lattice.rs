// lattice.rs - Square spin lattice with periodic boundaries

use crate::error::ConfigError;
use rand::Rng;

/// Initial spin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// Every cell +1 (zero-temperature ground state).
    Ordered,
    /// Each cell independently ±1 with probability 1/2.
    Random,
}

/// An N×N grid of ±1 spins on a torus.
///
/// Spins live in a flat row-major `Vec<i8>`; all wrapping happens here, so
/// neither the updater nor the calculators ever see a raw index.
#[derive(Debug, Clone)]
pub struct Lattice {
    n: usize,
    spins: Vec<i8>,
}

impl Lattice {
    /// Build an `n`×`n` lattice using a caller-supplied RNG
    /// (preferred for reproducibility). Fails only on `n == 0`.
    pub fn new_with(rng: &mut impl Rng, n: usize, mode: InitMode) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::ZeroLatticeSide(n));
        }
        let spins = match mode {
            InitMode::Ordered => vec![1i8; n * n],
            InitMode::Random => (0..n * n)
                .map(|_| if rng.gen_bool(0.5) { 1i8 } else { -1i8 })
                .collect(),
        };
        Ok(Self { n, spins })
    }

    /// Convenience wrapper that uses `thread_rng`.
    pub fn new(n: usize, mode: InitMode) -> Result<Self, ConfigError> {
        let mut rng = rand::thread_rng();
        Self::new_with(&mut rng, n, mode)
    }

    /// Side length.
    #[inline(always)]
    pub fn side(&self) -> usize {
        self.n
    }

    /// Number of sites, N².
    #[inline(always)]
    pub fn n_sites(&self) -> usize {
        self.n * self.n
    }

    #[inline(always)]
    fn index(&self, r: isize, c: isize) -> usize {
        let n = self.n as isize;
        let r = r.rem_euclid(n) as usize;
        let c = c.rem_euclid(n) as usize;
        r * self.n + c
    }

    /// Spin at (r mod N, c mod N); indices outside [0, N) wrap.
    #[inline(always)]
    pub fn get(&self, r: isize, c: isize) -> i8 {
        self.spins[self.index(r, c)]
    }

    /// Write a spin. `s` must be ±1; anything else is a contract violation.
    #[inline(always)]
    pub fn set(&mut self, r: isize, c: isize, s: i8) {
        assert!(s == 1 || s == -1, "spin must be +1 or -1, got {s}");
        let idx = self.index(r, c);
        self.spins[idx] = s;
    }

    /// Negate the spin at (r, c) in place. Preserves the ±1 domain.
    #[inline(always)]
    pub fn flip(&mut self, r: isize, c: isize) {
        let idx = self.index(r, c);
        self.spins[idx] = -self.spins[idx];
    }

    /// Sum of the four toroidal nearest-neighbor spins (up, down, left,
    /// right). Drives both the Metropolis flip cost and the energy sum, so
    /// the sign convention is shared by construction.
    #[inline(always)]
    pub fn neighbor_sum(&self, r: isize, c: isize) -> i32 {
        self.get(r + 1, c) as i32
            + self.get(r - 1, c) as i32
            + self.get(r, c + 1) as i32
            + self.get(r, c - 1) as i32
    }

    /// Iterate over all spins (row-major).
    pub fn spins(&self) -> impl Iterator<Item = i8> + '_ {
        self.spins.iter().copied()
    }
}
