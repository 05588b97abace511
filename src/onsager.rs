// onsager.rs - Exact reference curve for the infinite-lattice model

/// Critical temperature of the infinite 2D Ising model, 2/ln(1+√2).
pub const T_C: f64 = 2.269185314213022;

/// Onsager's spontaneous magnetization, `(1 - sinh(2/T)^-4)^(1/8)` below
/// the critical temperature and 0 at or above it.
///
/// Pure analytic helper for the reporting boundary; the Monte Carlo engine
/// never consumes it.
pub fn onsager_magnetization(t: f64) -> f64 {
    if t <= 0.0 {
        return 1.0;
    }
    if t >= T_C {
        return 0.0;
    }
    let s = (2.0 / t).sinh();
    (1.0 - s.powi(-4)).powf(0.125)
}
