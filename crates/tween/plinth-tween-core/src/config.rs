//! Solver and lookup-table configuration.

use serde::{Deserialize, Serialize};

/// Default bisection iterations for Bezier solves. Costs a small, bounded
/// amount of time per query for accuracy well past f64 display precision;
/// around 10 iterations the error becomes visible (~1e-3).
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 100;

/// Default number of equally spaced samples in a `FastEase` lookup table.
pub const DEFAULT_FAST_EASE_LOCATIONS: usize = 50;

/// Accuracy knobs shared by curves, eases and tracks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed number of bisection steps used when inverting a Bezier curve.
    pub solver_iterations: u32,
    /// Equally spaced alpha samples used to build a `FastEase` table.
    pub fast_ease_locations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            fast_ease_locations: DEFAULT_FAST_EASE_LOCATIONS,
        }
    }
}
