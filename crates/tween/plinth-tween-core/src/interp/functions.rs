//! Interpolation helpers:
//! - linear / inverse_linear / convert_range
//! - ease_in / ease_out / ease_in_out (odd-symmetric power curves, amount 0 == linear)
//! - quicker_ease (smoothstep) and quick_ease (smootherstep)
//! - slow_ease (one-shot cubic Bezier ease)
//!
//! None of these clamp alpha. Values outside [0,1] extrapolate the curve.

use crate::ease::Ease;
use crate::error::{Result, TweenError};
use crate::value::{Position, Tweenable};

/// Linear interpolation: `start + (end - start) * alpha`.
#[inline]
pub fn linear<T: Tweenable>(start: &T, end: &T, alpha: f64) -> T {
    start.plus(&end.minus(start).scaled(alpha))
}

/// Alpha that `linear(start, end, alpha)` would need to produce `value`.
pub fn inverse_linear<P: Position>(start: P, end: P, value: P) -> Result<f64> {
    if start == end {
        return Err(TweenError::DegenerateRange);
    }
    let start = start.to_f64();
    Ok((value.to_f64() - start) / (end.to_f64() - start))
}

/// Map `value`'s place in `[from_start, from_end]` onto `[to_start, to_end]`.
pub fn convert_range<T: Tweenable, P: Position>(
    to_start: &T,
    to_end: &T,
    from_start: P,
    from_end: P,
    value: P,
) -> Result<T> {
    let alpha = inverse_linear(from_start, from_end, value)?;
    Ok(linear(to_start, to_end, alpha))
}

/// Smoothstep `3a² - 2a³`.
#[inline]
pub fn quicker_ease<T: Tweenable>(start: &T, end: &T, alpha: f64) -> T {
    let shaped = alpha * alpha * (3.0 - 2.0 * alpha);
    linear(start, end, shaped)
}

/// Smootherstep `6a⁵ - 15a⁴ + 10a³`.
#[inline]
pub fn quick_ease<T: Tweenable>(start: &T, end: &T, alpha: f64) -> T {
    let shaped = alpha * alpha * alpha * (alpha * (alpha * 6.0 - 15.0) + 10.0);
    linear(start, end, shaped)
}

/// `|x|^power` carrying the sign of `x`, so negative inputs stay finite.
#[inline]
fn signed_pow(x: f64, power: f64) -> f64 {
    x.abs().powf(power).copysign(x)
}

/// Slow start. `amount` 0 is exactly linear; larger amounts raise the power.
pub fn ease_in<T: Tweenable>(start: &T, end: &T, alpha: f64, amount: f64) -> T {
    if amount == 0.0 {
        return linear(start, end, alpha);
    }
    linear(start, end, signed_pow(alpha, amount + 1.0))
}

/// Slow finish. Mirror of [`ease_in`].
pub fn ease_out<T: Tweenable>(start: &T, end: &T, alpha: f64, amount: f64) -> T {
    if amount == 0.0 {
        return linear(start, end, alpha);
    }
    linear(start, end, 1.0 - signed_pow(1.0 - alpha, amount + 1.0))
}

/// Ease-in shape over the first half, ease-out shape over the second.
pub fn ease_in_out<T: Tweenable>(start: &T, end: &T, alpha: f64, amount: f64) -> T {
    if amount == 0.0 {
        return linear(start, end, alpha);
    }
    let power = amount + 1.0;
    let shaped = if alpha < 0.5 {
        0.5 * signed_pow(2.0 * alpha, power)
    } else {
        1.0 - 0.5 * signed_pow(2.0 * (1.0 - alpha), power)
    };
    linear(start, end, shaped)
}

/// Cubic Bezier ease built and dropped on every call. Prefer a retained
/// [`Ease`] when the same strengths are queried repeatedly.
pub fn slow_ease<T: Tweenable>(
    start: &T,
    end: &T,
    alpha: f64,
    in_strength: f64,
    out_strength: f64,
) -> T {
    let mut ease = Ease::new(start.clone(), end.clone());
    ease.set_strengths(in_strength, out_strength);
    ease.value(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_variants_pin_endpoints_and_midpoint() {
        let curves: [fn(&f64, &f64, f64) -> f64; 2] = [quicker_ease, quick_ease];
        for f in curves {
            assert_eq!(f(&0.0, &10.0, 0.0), 0.0);
            assert_eq!(f(&0.0, &10.0, 1.0), 10.0);
            assert!((f(&0.0, &10.0, 0.5) - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn ease_in_out_is_continuous_at_half() {
        let left: f64 = ease_in_out(&0.0, &1.0, 0.5 - 1e-9, 2.0);
        let right: f64 = ease_in_out(&0.0, &1.0, 0.5, 2.0);
        assert!((left - right).abs() < 1e-6);
    }
}
