// scan.rs - Temperature sweep driver: equilibrate, measure, estimate

use crate::error::ConfigError;
use crate::lattice::{InitMode, Lattice};
use crate::metropolis::metropolis_sweep;
use crate::observables::{total_energy, total_magnetization};
use crate::utils::rng::point_rng;
use log::debug;
use rayon::prelude::*;

/// Run-time configuration (single source of truth).
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Lattice side length N.
    pub n: usize,
    /// External field strength B.
    pub field_b: f64,
    /// Lowest temperature of the scan.
    pub t_start: f64,
    /// Highest temperature of the scan.
    pub t_end: f64,
    /// Number of linearly spaced temperature points.
    pub nt: usize,
    /// Equilibration sweeps discarded before sampling.
    pub eq_sweeps: usize,
    /// Measurement sweeps, one sample taken after each.
    pub mc_sweeps: usize,
    /// Master seed; each temperature point derives its own stream.
    pub seed: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            n: 16,
            field_b: 0.0,
            t_start: 1.2,
            t_end: 3.8,
            nt: 64,
            eq_sweeps: 1_000,
            mc_sweeps: 1_000,
            seed: 0,
        }
    }
}

impl ScanConfig {
    /// Reject bad configurations before any sweep executes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n == 0 {
            return Err(ConfigError::ZeroLatticeSide(self.n));
        }
        if self.eq_sweeps == 0 {
            return Err(ConfigError::ZeroEquilibrationSweeps);
        }
        if self.mc_sweeps == 0 {
            return Err(ConfigError::ZeroMeasurementSweeps);
        }
        if self.nt == 0 || self.t_end <= self.t_start {
            return Err(ConfigError::BadTemperatureRange {
                t_start: self.t_start,
                t_end: self.t_end,
                nt: self.nt,
            });
        }
        if self.t_start <= 0.0 {
            return Err(ConfigError::NonPositiveTemperature(self.t_start));
        }
        Ok(())
    }

    /// The ascending linear temperature grid.
    pub fn temperatures(&self) -> Vec<f64> {
        if self.nt == 1 {
            return vec![self.t_start];
        }
        let step = (self.t_end - self.t_start) / (self.nt - 1) as f64;
        (0..self.nt)
            .map(|i| self.t_start + step * i as f64)
            .collect()
    }
}

/// Running sums over one temperature point's measurement phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    pub e: f64,
    pub e2: f64,
    pub m: f64,
    pub m2: f64,
}

impl Accumulator {
    pub fn push(&mut self, energy: f64, magnetization: f64) {
        self.e += energy;
        self.e2 += energy * energy;
        self.m += magnetization;
        self.m2 += magnetization * magnetization;
    }
}

/// Intensive estimates for one temperature point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointResult {
    pub t: f64,
    /// Mean energy per site.
    pub energy: f64,
    /// Mean magnetization per site (signed).
    pub magnetization: f64,
    /// Heat capacity from energy fluctuations.
    pub specific_heat: f64,
    /// Magnetic susceptibility from magnetization fluctuations.
    pub susceptibility: f64,
}

/// Per-temperature series over the full scan, in ascending grid order.
#[derive(Debug, Clone)]
pub struct ScanResults {
    pub temperatures: Vec<f64>,
    pub energy: Vec<f64>,
    pub magnetization: Vec<f64>,
    pub specific_heat: Vec<f64>,
    pub susceptibility: Vec<f64>,
}

impl ScanResults {
    fn from_points(points: Vec<PointResult>) -> Self {
        Self {
            temperatures: points.iter().map(|p| p.t).collect(),
            energy: points.iter().map(|p| p.energy).collect(),
            magnetization: points.iter().map(|p| p.magnetization).collect(),
            specific_heat: points.iter().map(|p| p.specific_heat).collect(),
            susceptibility: points.iter().map(|p| p.susceptibility).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }
}

/// Run the full equilibrate-then-measure state machine for one temperature
/// point on a fresh random lattice, with a caller-supplied RNG.
///
/// Within the point the chain is strictly sequential: every proposal reads
/// neighbors a previous proposal may just have flipped.
pub fn run_point(
    cfg: &ScanConfig,
    t: f64,
    rng: &mut impl rand::Rng,
) -> Result<PointResult, ConfigError> {
    if t <= 0.0 {
        return Err(ConfigError::NonPositiveTemperature(t));
    }
    let beta = 1.0 / t;
    let mut lattice = Lattice::new_with(rng, cfg.n, InitMode::Random)?;

    for _ in 0..cfg.eq_sweeps {
        metropolis_sweep(&mut lattice, beta, rng);
    }

    let mut acc = Accumulator::default();
    let mut accepted = 0usize;
    for _ in 0..cfg.mc_sweeps {
        accepted += metropolis_sweep(&mut lattice, beta, rng).accepted;
        acc.push(total_energy(&lattice, cfg.field_b), total_magnetization(&lattice));
    }

    let n_sites = lattice.n_sites() as f64;
    let mc = cfg.mc_sweeps as f64;
    let n1 = 1.0 / (mc * n_sites);
    let n2 = 1.0 / (mc * mc * n_sites);

    let result = PointResult {
        t,
        energy: n1 * acc.e,
        magnetization: n1 * acc.m,
        specific_heat: (n1 * acc.e2 - n2 * acc.e * acc.e) / (t * t),
        susceptibility: (n1 * acc.m2 - n2 * acc.m * acc.m) / t,
    };

    debug!(
        "T = {t:.4}: <e> = {:.4}, <m> = {:.4}, acceptance = {:.3}",
        result.energy,
        result.magnetization,
        accepted as f64 / (mc * n_sites)
    );
    Ok(result)
}

/// Scan every temperature point, calling `on_point` as each one finishes
/// (progress reporting hook for the binary).
///
/// Points are statistically independent, each owning a private lattice and
/// accumulator plus an RNG stream derived from `(seed, point index)`, so
/// they run as parallel rayon tasks; results come back in grid order.
pub fn run_scan_with(
    cfg: &ScanConfig,
    on_point: impl Fn() + Sync,
) -> Result<ScanResults, ConfigError> {
    cfg.validate()?;
    let temps = cfg.temperatures();

    let points = temps
        .par_iter()
        .enumerate()
        .map(|(i, &t)| {
            let mut rng = point_rng(cfg.seed, i);
            let point = run_point(cfg, t, &mut rng)?;
            on_point();
            Ok(point)
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    Ok(ScanResults::from_points(points))
}

/// `run_scan_with` without a progress hook.
pub fn run_scan(cfg: &ScanConfig) -> Result<ScanResults, ConfigError> {
    run_scan_with(cfg, || {})
}
