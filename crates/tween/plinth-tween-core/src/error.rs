//! Error type shared by every tween component.
//!
//! All misuse conditions (querying an empty container, indexing past the end,
//! solving over a zero-width range) surface as `Err(TweenError)`. Nothing in
//! the crate falls back to a silent default.

use crate::value::Position;

/// Errors produced by tracks, tables, curves and the range helpers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TweenError {
    /// A track was queried before any node was added.
    #[error("track has no nodes")]
    EmptyTrack,

    /// A piecewise table was queried before any node was added.
    #[error("piecewise table has no nodes")]
    EmptyTable,

    /// A Bezier curve needs at least one control point.
    #[error("bezier curve has no control points")]
    EmptyCurve,

    /// Index-based access past the end of a node, point or channel list.
    #[error("index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Start and end of a range coincide, so no alpha can be recovered.
    #[error("range start and end are equal")]
    DegenerateRange,

    /// Node positions must be finite so the sorted order is total.
    #[error("position {position} is not finite")]
    NonFinitePosition { position: f64 },

    /// A bake window would produce more samples than the configured limit.
    #[error("bake would need {requested} samples (limit {limit})")]
    TooManySamples { requested: f64, limit: usize },

    /// Stored track JSON could not be decoded.
    #[error("stored track parse error: {reason}")]
    Parse { reason: String },
}

impl TweenError {
    /// Short tag for log lines.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyTrack | Self::EmptyTable | Self::EmptyCurve => "empty",
            Self::IndexOutOfRange { .. } => "index",
            Self::DegenerateRange
            | Self::NonFinitePosition { .. }
            | Self::TooManySamples { .. } => "range",
            Self::Parse { .. } => "parse",
        }
    }

    /// `Ok` for finite positions, `NonFinitePosition` otherwise.
    pub(crate) fn check_position<P: Position>(position: P) -> Result<()> {
        let position = position.to_f64();
        if position.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFinitePosition { position })
        }
    }

    #[inline]
    pub(crate) fn index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TweenError>;
