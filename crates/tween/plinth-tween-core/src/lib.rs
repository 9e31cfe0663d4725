//! Plinth Tween Core
//!
//! Keyframe interpolation for values that can be added, subtracted and scaled:
//! free easing functions, an N-point Bezier evaluator with a bisection solver,
//! cached Bezier eases (accurate and lookup-table backed), a piecewise linear
//! table and keyframe tracks with per-side Step/Linear/Ease transitions.

pub mod baking;
pub mod bezier;
pub mod config;
pub mod ease;
pub mod error;
pub mod interp;
pub mod multi_track;
pub mod piecewise;
mod segment;
pub mod stored_track;
pub mod track;
pub mod value;

// Re-exports for consumers
pub use baking::{bake_track, export_baked_json, BakedTrack, BakingConfig, MAX_BAKED_SAMPLES};
pub use bezier::Bezier;
pub use config::Config;
pub use ease::{Ease, FastEase};
pub use error::{Result, TweenError};
pub use multi_track::{MultiNode, MultiTrack, Track2, Track3};
pub use piecewise::{Piecewise, PiecewiseNode};
pub use stored_track::parse_stored_track_json;
pub use track::{InterpolationType, Node, Track};
pub use value::{Position, Tweenable, Vec2};
