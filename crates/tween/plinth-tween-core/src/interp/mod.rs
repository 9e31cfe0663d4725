//! Interpolation primitives.
//!
//! `functions` holds the stateless tweens (linear, power eases, smoothstep
//! variants and range conversion). The stateful Bezier eases live in
//! [`crate::ease`].

pub mod functions;

pub use functions::{
    convert_range, ease_in, ease_in_out, ease_out, inverse_linear, linear, quick_ease,
    quicker_ease, slow_ease,
};
