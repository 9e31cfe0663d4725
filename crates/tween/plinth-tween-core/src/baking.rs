//! Baking API: sample a track at a fixed rate over a position window.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweenError};
use crate::track::Track;
use crate::value::{Position, Tweenable};

const DEFAULT_SAMPLES_PER_UNIT: f64 = 60.0;

/// Upper bound on the number of samples a single bake may produce.
pub const MAX_BAKED_SAMPLES: usize = 1 << 24;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Samples per unit of position (frames per second for time tracks).
    pub samples_per_unit: f64,
    /// Window start; defaults to the first node's position.
    pub start: Option<f64>,
    /// Window end (inclusive); defaults to the last node's position.
    pub end: Option<f64>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            samples_per_unit: DEFAULT_SAMPLES_PER_UNIT,
            start: None,
            end: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedTrack<T> {
    pub samples_per_unit: f64,
    pub start: f64,
    pub end: f64,
    /// Sample i sits at `start + i / samples_per_unit`, the last one at `end`.
    pub values: Vec<T>,
}

/// Bake a track using the provided config. Fails with `TooManySamples` when
/// the window needs more than [`MAX_BAKED_SAMPLES`] samples.
pub fn bake_track<P, T>(track: &Track<P, T>, cfg: &BakingConfig) -> Result<BakedTrack<T>>
where
    P: Position,
    T: Tweenable,
{
    let (first, last) = track.position_range().ok_or(TweenError::EmptyTrack)?;
    let rate = if cfg.samples_per_unit.is_finite() && cfg.samples_per_unit > 0.0 {
        cfg.samples_per_unit
    } else {
        DEFAULT_SAMPLES_PER_UNIT
    };
    let start = cfg
        .start
        .filter(|s| s.is_finite())
        .unwrap_or_else(|| first.to_f64());
    let end = cfg
        .end
        .filter(|e| e.is_finite())
        .unwrap_or_else(|| last.to_f64())
        .max(start);
    let span = ((end - start) * rate).ceil();
    // Inclusive of end. Checked in f64 so huge windows never reach the cast.
    if !span.is_finite() || span >= MAX_BAKED_SAMPLES as f64 {
        return Err(TweenError::TooManySamples {
            requested: span + 1.0,
            limit: MAX_BAKED_SAMPLES,
        });
    }
    let sample_count = span as usize + 1;

    let mut values = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let position = (start + i as f64 / rate).min(end);
        values.push(track.get_value(P::from_f64(position))?);
    }

    Ok(BakedTrack {
        samples_per_unit: rate,
        start,
        end,
        values,
    })
}

/// Export baked data as serde_json::Value.
pub fn export_baked_json<T: Serialize>(baked: &BakedTrack<T>) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
