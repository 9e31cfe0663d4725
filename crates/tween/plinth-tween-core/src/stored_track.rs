use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Result, TweenError};
use crate::track::{InterpolationType, Node, Track};
use crate::value::Tweenable;

/// Public API: parse stored track JSON (see fixtures/tracks/*.json) into a
/// [`Track`] keyed by f64 positions.
///
/// Notes:
/// - Nodes may appear in any order; they are inserted through `add_node`, so
///   equal positions keep file order.
/// - `in`/`out` are `"step" | "linear" | "ease"`. When a side's type is
///   omitted it is `ease` if that side has a non-zero amount, else `linear`.
/// - An optional `config` object overrides solver settings.
pub fn parse_stored_track_json<T>(s: &str) -> Result<Track<f64, T>>
where
    T: Tweenable + DeserializeOwned,
{
    let stored: StoredTrack<T> = serde_json::from_str(s)?;

    let mut track = Track::with_config(stored.config.unwrap_or_default());
    for (i, sn) in stored.nodes.into_iter().enumerate() {
        if !sn.position.is_finite() {
            return Err(TweenError::Parse {
                reason: format!("node {i} has a non-finite position"),
            });
        }
        let in_amount = sn.in_amount.unwrap_or(0.0);
        let out_amount = sn.out_amount.unwrap_or(0.0);
        track.add_node(Node {
            position: sn.position,
            value: sn.value,
            in_type: sn.r#in.unwrap_or(implied_type(in_amount)),
            out_type: sn.out.unwrap_or(implied_type(out_amount)),
            in_amount,
            out_amount,
        })?;
    }

    log::debug!(
        "parsed stored track '{}' with {} nodes",
        stored.name.as_deref().unwrap_or("<unnamed>"),
        track.node_count()
    );
    Ok(track)
}

fn implied_type(amount: f64) -> InterpolationType {
    if amount != 0.0 {
        InterpolationType::Ease
    } else {
        InterpolationType::Linear
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredTrack<T> {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub config: Option<Config>,
    pub nodes: Vec<StoredNode<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredNode<T> {
    pub position: f64,
    pub value: T,
    #[serde(default)]
    #[serde(rename = "in")]
    pub r#in: Option<InterpolationType>,
    #[serde(default)]
    pub out: Option<InterpolationType>,
    #[serde(default)]
    pub in_amount: Option<f64>,
    #[serde(default)]
    pub out_amount: Option<f64>,
}
