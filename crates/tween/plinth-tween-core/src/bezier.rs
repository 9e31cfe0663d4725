//! N-point Bezier curve evaluation and inverse solving.
//!
//! Evaluation blends the control points by repeated linear interpolation
//! (de Casteljau), so any point count works, not just cubics. Inverse solving
//! bisects the curve parameter `t` over [0,1] for a fixed number of
//! iterations with no early exit: accuracy depends only on the iteration
//! count.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Result, TweenError};
use crate::value::Vec2;

/// Bezier curve over 2D control points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBezier")]
pub struct Bezier {
    points: Vec<Vec2>,
    iterations: u32,
}

#[derive(Deserialize)]
struct RawBezier {
    points: Vec<Vec2>,
    #[serde(default = "default_iterations")]
    iterations: u32,
}

fn default_iterations() -> u32 {
    Config::default().solver_iterations
}

impl TryFrom<RawBezier> for Bezier {
    type Error = TweenError;

    fn try_from(raw: RawBezier) -> Result<Self> {
        let mut bezier = Bezier::new(raw.points)?;
        bezier.set_iterations(raw.iterations);
        Ok(bezier)
    }
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn of(self, p: &Vec2) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

impl Bezier {
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        Self::with_config(points, &Config::default())
    }

    pub fn with_config(points: Vec<Vec2>, cfg: &Config) -> Result<Self> {
        if points.is_empty() {
            return Err(TweenError::EmptyCurve);
        }
        Ok(Self {
            points,
            iterations: cfg.solver_iterations,
        })
    }

    /// Cubic from (0,0) to (1,1) with handles `(in, 0)` and `(1 - out, 1)`.
    pub(crate) fn unit_ease(in_strength: f64, out_strength: f64, iterations: u32) -> Self {
        Self {
            points: unit_ease_points(in_strength, out_strength).to_vec(),
            iterations,
        }
    }

    /// Move every control point onto `point`.
    pub fn set_all_points(&mut self, point: Vec2) {
        self.points.iter_mut().for_each(|p| *p = point);
    }

    /// Overwrite points from `start_index`, extending the curve if `points`
    /// runs past the current end.
    pub fn set_points(&mut self, points: &[Vec2], start_index: usize) -> Result<()> {
        let len = self.points.len();
        if start_index > len {
            return Err(TweenError::index(start_index, len));
        }
        for (offset, point) in points.iter().enumerate() {
            let index = start_index + offset;
            if index < self.points.len() {
                self.points[index] = *point;
            } else {
                self.points.push(*point);
            }
        }
        Ok(())
    }

    pub fn set_point(&mut self, index: usize, point: Vec2) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(TweenError::index(index, len))?;
        *slot = point;
        Ok(())
    }

    pub fn point(&self, index: usize) -> Result<Vec2> {
        self.points
            .get(index)
            .copied()
            .ok_or(TweenError::index(index, self.points.len()))
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Bisection steps used by the solvers (default 100).
    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations;
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn get_x(&self, t: f64) -> f64 {
        blend(&self.points, t, Axis::X)
    }

    pub fn get_y(&self, t: f64) -> f64 {
        blend(&self.points, t, Axis::Y)
    }

    /// Y at the parameter whose X equals `x`. The X coordinate must be
    /// monotonic over [0,1]; either direction is accepted.
    pub fn solve_y_for_x(&self, x: f64) -> Result<f64> {
        let t = self.solve_parameter(x, Axis::X)?;
        Ok(self.get_y(t))
    }

    /// X at the parameter whose Y equals `y`.
    pub fn solve_x_for_y(&self, y: f64) -> Result<f64> {
        let t = self.solve_parameter(y, Axis::Y)?;
        Ok(self.get_x(t))
    }

    /// `solve_y_for_x` for curves known to run from x=0 up to x=1, such as
    /// the ease curves built by [`crate::ease::Ease`].
    pub(crate) fn unit_y_for_x(&self, x: f64) -> f64 {
        let t = bisect(&self.points, x, Axis::X, true, self.iterations);
        self.get_y(t)
    }

    fn solve_parameter(&self, target: f64, axis: Axis) -> Result<f64> {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (axis.of(first), axis.of(last)),
            _ => return Err(TweenError::EmptyCurve),
        };
        if first == last {
            return Err(TweenError::DegenerateRange);
        }
        Ok(bisect(&self.points, target, axis, first < last, self.iterations))
    }
}

/// Curves up to this many points are blended on the stack; longer ones use
/// a heap scratch buffer.
const STACK_POINTS: usize = 4;

fn unit_ease_points(in_strength: f64, out_strength: f64) -> [Vec2; 4] {
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(in_strength, 0.0),
        Vec2::new(1.0 - out_strength, 1.0),
        Vec2::new(1.0, 1.0),
    ]
}

/// Y of the unit ease cubic at the parameter whose X equals `x`, without
/// building a [`Bezier`].
pub(crate) fn unit_ease_y_for_x(
    in_strength: f64,
    out_strength: f64,
    iterations: u32,
    x: f64,
) -> f64 {
    let points = unit_ease_points(in_strength, out_strength);
    let t = bisect(&points, x, Axis::X, true, iterations);
    blend(&points, t, Axis::Y)
}

fn bisect(points: &[Vec2], target: f64, axis: Axis, increasing: bool, iterations: u32) -> f64 {
    if iterations == 0 {
        log::warn!("bezier solve with zero iterations; returning t = 0.5");
    }
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    for _ in 0..iterations {
        let mid = 0.5 * (lo + hi);
        if (blend(points, mid, axis) < target) == increasing {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    log::trace!(
        "bezier solve for {target} converged to [{lo}, {hi}] after {iterations} iterations"
    );
    0.5 * (lo + hi)
}

fn blend(points: &[Vec2], t: f64, axis: Axis) -> f64 {
    let mut stack = [0.0f64; STACK_POINTS];
    let mut heap: Vec<f64>;
    let scratch: &mut [f64] = if points.len() <= STACK_POINTS {
        for (slot, p) in stack.iter_mut().zip(points) {
            *slot = axis.of(p);
        }
        &mut stack[..points.len()]
    } else {
        heap = points.iter().map(|p| axis.of(p)).collect();
        &mut heap
    };
    for level in (1..scratch.len()).rev() {
        for i in 0..level {
            scratch[i] += (scratch[i + 1] - scratch[i]) * t;
        }
    }
    scratch.first().copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic_basis(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
    }

    #[test]
    fn four_points_match_cubic_basis() {
        let b = Bezier::new(vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(0.3, -2.0),
            Vec2::new(0.6, 4.0),
            Vec2::new(1.0, 0.5),
        ])
        .unwrap();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((b.get_x(t) - cubic_basis(0.0, 0.3, 0.6, 1.0, t)).abs() < 1e-12);
            assert!((b.get_y(t) - cubic_basis(1.0, -2.0, 4.0, 0.5, t)).abs() < 1e-12);
        }
    }

    #[test]
    fn degree_elevated_curve_matches_its_cubic() {
        // Heap-blended quartic built from the stack-blended cubic.
        let p = [
            Vec2::new(0.0, 1.0),
            Vec2::new(0.3, -2.0),
            Vec2::new(0.6, 4.0),
            Vec2::new(1.0, 0.5),
        ];
        let mix = |a: Vec2, b: Vec2, w: f64| {
            Vec2::new(a.x * w + b.x * (1.0 - w), a.y * w + b.y * (1.0 - w))
        };
        let quartic = Bezier::new(vec![
            p[0],
            mix(p[0], p[1], 0.25),
            mix(p[1], p[2], 0.5),
            mix(p[2], p[3], 0.75),
            p[3],
        ])
        .unwrap();
        let cubic = Bezier::new(p.to_vec()).unwrap();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((quartic.get_x(t) - cubic.get_x(t)).abs() < 1e-12);
            assert!((quartic.get_y(t) - cubic.get_y(t)).abs() < 1e-12);
        }
    }

    #[test]
    fn unit_ease_shortcut_matches_curve() {
        let curve = Bezier::unit_ease(0.6, 0.3, 100);
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            assert_eq!(unit_ease_y_for_x(0.6, 0.3, 100, x), curve.unit_y_for_x(x));
        }
    }

    #[test]
    fn single_point_is_constant() {
        let b = Bezier::new(vec![Vec2::new(2.0, 3.0)]).unwrap();
        assert_eq!(b.get_x(0.7), 2.0);
        assert_eq!(b.get_y(0.1), 3.0);
    }

    #[test]
    fn deserializing_empty_points_is_rejected() {
        let res: std::result::Result<Bezier, _> = serde_json::from_str(r#"{ "points": [] }"#);
        assert!(res.is_err());
    }
}
