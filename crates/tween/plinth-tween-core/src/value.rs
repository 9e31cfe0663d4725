//! Value and position traits used by every interpolator.
//!
//! `Tweenable` is the small algebra interpolation needs (add, subtract, scale
//! by a real). `Position` is anything ordered that can be turned into an f64
//! distance, such as seconds, frame numbers or normalized stamps.

use serde::{Deserialize, Serialize};

/// A value that can be blended: `start + (end - start) * alpha`.
pub trait Tweenable: Clone {
    fn plus(&self, other: &Self) -> Self;
    fn minus(&self, other: &Self) -> Self;
    fn scaled(&self, factor: f64) -> Self;
}

impl Tweenable for f64 {
    #[inline]
    fn plus(&self, other: &Self) -> Self {
        self + other
    }
    #[inline]
    fn minus(&self, other: &Self) -> Self {
        self - other
    }
    #[inline]
    fn scaled(&self, factor: f64) -> Self {
        self * factor
    }
}

impl Tweenable for f32 {
    #[inline]
    fn plus(&self, other: &Self) -> Self {
        self + other
    }
    #[inline]
    fn minus(&self, other: &Self) -> Self {
        self - other
    }
    #[inline]
    fn scaled(&self, factor: f64) -> Self {
        (f64::from(*self) * factor) as f32
    }
}

/// Component-wise blending for fixed-size arrays (`[f32; 3]` positions,
/// `[f32; 4]` colors and so on).
impl<T: Tweenable, const N: usize> Tweenable for [T; N] {
    fn plus(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i].plus(&other[i]))
    }
    fn minus(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i].minus(&other[i]))
    }
    fn scaled(&self, factor: f64) -> Self {
        std::array::from_fn(|i| self[i].scaled(factor))
    }
}

/// 2D point, used for Bezier control points.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Tweenable for Vec2 {
    #[inline]
    fn plus(&self, other: &Self) -> Self {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
    #[inline]
    fn minus(&self, other: &Self) -> Self {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
    #[inline]
    fn scaled(&self, factor: f64) -> Self {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

/// Ordered key along a track or table.
pub trait Position: Copy + PartialOrd {
    fn to_f64(self) -> f64;
    /// Inverse of `to_f64`; integer positions truncate.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_position {
    ($($t:ty),*) => {
        $(
            impl Position for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_position!(f32, f64, i32, i64, u32, u64, usize);
