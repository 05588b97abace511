pub mod error;
pub mod lattice;
pub mod metropolis;
pub mod observables;
pub mod onsager;
pub mod scan;
pub mod utils;

pub use error::ConfigError;
pub use lattice::{InitMode, Lattice};
pub use metropolis::{metropolis_sweep, SweepInfo};
pub use scan::{run_point, run_scan, run_scan_with, PointResult, ScanConfig, ScanResults};
