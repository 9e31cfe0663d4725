//! Cubic Bezier eases with cached configuration.
//!
//! An ease maps alpha through the curve `(0,0) (in,0) (1-out,1) (1,1)` and
//! then blends linearly between start and end. `Ease` evaluates the curve
//! exactly on each query; `FastEase` samples it once into a [`Piecewise`]
//! table and interpolates the table instead.

use crate::bezier::{unit_ease_y_for_x, Bezier};
use crate::config::Config;
use crate::error::{Result, TweenError};
use crate::interp::functions::linear;
use crate::piecewise::Piecewise;
use crate::value::Tweenable;

/// Eased alpha for the given strengths. Both strengths at 0 is the identity.
pub(crate) fn eased_alpha(alpha: f64, in_strength: f64, out_strength: f64, iterations: u32) -> f64 {
    if in_strength == 0.0 && out_strength == 0.0 {
        return alpha;
    }
    unit_ease_y_for_x(in_strength, out_strength, iterations, alpha)
}

/// Bezier ease between two values. The curve is rebuilt only when a
/// strength changes, so repeated queries with one configuration are cheap.
#[derive(Clone, Debug)]
pub struct Ease<T> {
    start: T,
    end: T,
    in_strength: f64,
    out_strength: f64,
    bezier: Bezier,
}

impl<T: Tweenable> Ease<T> {
    pub fn new(start: T, end: T) -> Self {
        Self::from_config(start, end, &Config::default())
    }

    pub fn from_config(start: T, end: T, cfg: &Config) -> Self {
        Self {
            start,
            end,
            in_strength: 0.0,
            out_strength: 0.0,
            bezier: Bezier::unit_ease(0.0, 0.0, cfg.solver_iterations),
        }
    }

    pub fn set_start(&mut self, start: T) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: T) {
        self.end = end;
    }

    pub fn set_range(&mut self, start: T, end: T) {
        self.start = start;
        self.end = end;
    }

    pub fn set_in_strength(&mut self, in_strength: f64) {
        self.set_strengths(in_strength, self.out_strength);
    }

    pub fn set_out_strength(&mut self, out_strength: f64) {
        self.set_strengths(self.in_strength, out_strength);
    }

    pub fn set_strengths(&mut self, in_strength: f64, out_strength: f64) {
        if in_strength == self.in_strength && out_strength == self.out_strength {
            return;
        }
        self.in_strength = in_strength;
        self.out_strength = out_strength;
        self.bezier = Bezier::unit_ease(in_strength, out_strength, self.bezier.iterations());
    }

    pub fn set_range_and_strengths(
        &mut self,
        start: T,
        end: T,
        in_strength: f64,
        out_strength: f64,
    ) {
        self.set_range(start, end);
        self.set_strengths(in_strength, out_strength);
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn end(&self) -> &T {
        &self.end
    }

    pub fn in_strength(&self) -> f64 {
        self.in_strength
    }

    pub fn out_strength(&self) -> f64 {
        self.out_strength
    }

    /// Bisection steps used to invert the curve.
    pub fn set_iterations(&mut self, iterations: u32) {
        self.bezier.set_iterations(iterations);
    }

    pub fn value(&self, alpha: f64) -> T {
        let eased = if self.in_strength == 0.0 && self.out_strength == 0.0 {
            alpha
        } else {
            self.bezier.unit_y_for_x(alpha)
        };
        linear(&self.start, &self.end, eased)
    }

    /// Re-range, then evaluate.
    pub fn value_in_range(&mut self, start: T, end: T, alpha: f64) -> T {
        self.set_range(start, end);
        self.value(alpha)
    }

    /// Reconfigure everything, then evaluate.
    pub fn value_with(
        &mut self,
        start: T,
        end: T,
        alpha: f64,
        in_strength: f64,
        out_strength: f64,
    ) -> T {
        self.set_range_and_strengths(start, end, in_strength, out_strength);
        self.value(alpha)
    }
}

/// Lookup-table backed ease.
///
/// The table holds `locations` equally spaced alpha samples across [0,1]
/// plus any manually added locations. Queries interpolate the table
/// linearly and clamp outside [0,1].
#[derive(Clone, Debug)]
pub struct FastEase<T> {
    ease: Ease<T>,
    locations: usize,
    manual_locations: Vec<f64>,
    lut: Piecewise<f64, T>,
}

impl<T: Tweenable> FastEase<T> {
    pub fn new(start: T, end: T, in_strength: f64, out_strength: f64) -> Self {
        Self::from_config(start, end, in_strength, out_strength, &Config::default())
    }

    pub fn from_config(
        start: T,
        end: T,
        in_strength: f64,
        out_strength: f64,
        cfg: &Config,
    ) -> Self {
        let mut ease = Ease::from_config(start, end, cfg);
        ease.set_strengths(in_strength, out_strength);
        let mut fast = Self {
            ease,
            locations: cfg.fast_ease_locations,
            manual_locations: Vec::new(),
            lut: Piecewise::new(),
        };
        fast.update();
        fast
    }

    pub fn set_start(&mut self, start: T) {
        self.ease.set_start(start);
        self.update();
    }

    pub fn set_end(&mut self, end: T) {
        self.ease.set_end(end);
        self.update();
    }

    pub fn set_range(&mut self, start: T, end: T) {
        self.ease.set_range(start, end);
        self.update();
    }

    pub fn set_in_strength(&mut self, in_strength: f64) {
        self.ease.set_in_strength(in_strength);
        self.update();
    }

    pub fn set_out_strength(&mut self, out_strength: f64) {
        self.ease.set_out_strength(out_strength);
        self.update();
    }

    pub fn set_strengths(&mut self, in_strength: f64, out_strength: f64) {
        self.ease.set_strengths(in_strength, out_strength);
        self.update();
    }

    pub fn set_range_and_strengths(
        &mut self,
        start: T,
        end: T,
        in_strength: f64,
        out_strength: f64,
    ) {
        self.ease
            .set_range_and_strengths(start, end, in_strength, out_strength);
        self.update();
    }

    pub fn start(&self) -> &T {
        self.ease.start()
    }

    pub fn end(&self) -> &T {
        self.ease.end()
    }

    pub fn in_strength(&self) -> f64 {
        self.ease.in_strength()
    }

    pub fn out_strength(&self) -> f64 {
        self.ease.out_strength()
    }

    /// Table lookup. Fails with `EmptyTable` only when the table was
    /// configured with no locations at all.
    pub fn value(&self, alpha: f64) -> Result<T> {
        self.lut.get_value(alpha)
    }

    /// Exact curve evaluation, bypassing the table.
    pub fn accurate_value(&self, alpha: f64) -> T {
        self.ease.value(alpha)
    }

    /// Add a sample location on top of the equally spaced ones. Non-finite
    /// locations are rejected.
    pub fn add_location(&mut self, alpha: f64) -> Result<()> {
        TweenError::check_position(alpha)?;
        self.manual_locations.push(alpha);
        self.update();
        Ok(())
    }

    pub fn clear_locations(&mut self) {
        self.manual_locations.clear();
        self.update();
    }

    pub fn table_size(&self) -> usize {
        self.lut.node_count()
    }

    /// Rebuild the lookup table from the current configuration.
    pub fn update(&mut self) {
        self.lut.clear_nodes();
        let spaced = (0..self.locations).map(|i| match self.locations {
            1 => 0.0,
            n => i as f64 / (n - 1) as f64,
        });
        for alpha in spaced.chain(self.manual_locations.iter().copied()) {
            if let Err(err) = self.lut.add_node(alpha, self.ease.value(alpha)) {
                log::warn!("fast ease location {alpha} skipped: {err}");
            }
        }
        log::debug!(
            "fast ease table rebuilt with {} samples (in {}, out {})",
            self.lut.node_count(),
            self.ease.in_strength(),
            self.ease.out_strength()
        );
    }
}
