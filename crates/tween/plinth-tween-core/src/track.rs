//! Keyframe tracks.
//!
//! Model:
//! - A Track owns nodes sorted by position (stable on insert, so ties keep
//!   insertion order).
//! - Each node carries an inbound and outbound `InterpolationType` and ease
//!   strength. Segment [lo -> hi] is shaped by `lo.out_*` and `hi.in_*`:
//!   - Step on either side holds `lo.value` until `hi` is reached.
//!   - Linear on both sides blends linearly.
//!   - Otherwise a cubic Bezier ease with in strength `lo.out_amount` and out
//!     strength `hi.in_amount`; a side that is Linear contributes strength 0.
//! - Queries outside the node range clamp to the first/last node.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ease::eased_alpha;
use crate::error::{Result, TweenError};
use crate::interp::functions::linear;
use crate::segment::{find_segment, sort_by_position, Segment};
use crate::value::{Position, Tweenable};

/// How one side of a node blends into its neighbour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationType {
    /// Hold the earlier value until the next node.
    Step,
    #[default]
    Linear,
    /// Cubic Bezier ease scaled by the side's strength.
    Ease,
}

/// A keyframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node<P, T> {
    pub position: P,
    pub value: T,
    #[serde(default)]
    pub in_type: InterpolationType,
    #[serde(default)]
    pub out_type: InterpolationType,
    #[serde(default)]
    pub in_amount: f64,
    #[serde(default)]
    pub out_amount: f64,
}

impl<P, T> Node<P, T> {
    /// Linear on both sides with no ease strength.
    pub fn new(position: P, value: T) -> Self {
        Self {
            position,
            value,
            in_type: InterpolationType::Linear,
            out_type: InterpolationType::Linear,
            in_amount: 0.0,
            out_amount: 0.0,
        }
    }

    /// Ease on both sides with the given strengths.
    pub fn with_eases(mut self, in_amount: f64, out_amount: f64) -> Self {
        self.in_type = InterpolationType::Ease;
        self.out_type = InterpolationType::Ease;
        self.in_amount = in_amount;
        self.out_amount = out_amount;
        self
    }

    pub fn with_interpolation(
        mut self,
        in_type: InterpolationType,
        out_type: InterpolationType,
    ) -> Self {
        self.in_type = in_type;
        self.out_type = out_type;
        self
    }
}

/// Ordered keyframes queried at arbitrary positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "TrackRepr<P, T>",
    bound(deserialize = "P: Position + Deserialize<'de>, T: Deserialize<'de>")
)]
pub struct Track<P, T> {
    nodes: Vec<Node<P, T>>,
    config: Config,
}

#[derive(Deserialize)]
struct TrackRepr<P, T> {
    nodes: Vec<Node<P, T>>,
    #[serde(default)]
    config: Config,
}

impl<P: Position, T> TryFrom<TrackRepr<P, T>> for Track<P, T> {
    type Error = TweenError;

    fn try_from(repr: TrackRepr<P, T>) -> Result<Self> {
        let mut nodes = repr.nodes;
        for node in &nodes {
            TweenError::check_position(node.position)?;
        }
        sort_by_position(&mut nodes, |n| n.position);
        Ok(Self {
            nodes,
            config: repr.config,
        })
    }
}

impl<P: Position, T> Default for Track<P, T> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<P: Position, T> Track<P, T> {
    pub fn with_config(config: Config) -> Self {
        Self {
            nodes: Vec::new(),
            config,
        }
    }
}

impl<P: Position, T: Tweenable> Track<P, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Insert keeping positions ascending. Duplicate positions are accepted;
    /// an exact query on a shared position returns the latest inserted node.
    /// Non-finite positions are rejected and leave the track unchanged.
    pub fn add_node(&mut self, node: Node<P, T>) -> Result<()> {
        TweenError::check_position(node.position)?;
        if self.nodes.iter().any(|n| n.position == node.position) {
            log::debug!(
                "track node inserted at occupied position {}",
                node.position.to_f64()
            );
        }
        self.nodes.push(node);
        self.sort();
        Ok(())
    }

    /// Value at `position`. Fails with `EmptyTrack` when there are no nodes.
    pub fn get_value(&self, position: P) -> Result<T> {
        match find_segment(&self.nodes, position, |n| n.position) {
            None => Err(TweenError::EmptyTrack),
            Some(Segment::Node(i)) => Ok(self.nodes[i].value.clone()),
            Some(Segment::Between { lo, hi, alpha }) => {
                Ok(self.blend(&self.nodes[lo], &self.nodes[hi], alpha))
            }
        }
    }

    fn blend(&self, lo: &Node<P, T>, hi: &Node<P, T>, alpha: f64) -> T {
        use InterpolationType::{Ease, Linear, Step};
        match (lo.out_type, hi.in_type) {
            (Step, _) | (_, Step) => lo.value.clone(),
            (Linear, Linear) => linear(&lo.value, &hi.value, alpha),
            (out_type, in_type) => {
                let in_strength = if out_type == Ease { lo.out_amount } else { 0.0 };
                let out_strength = if in_type == Ease { hi.in_amount } else { 0.0 };
                let eased = eased_alpha(
                    alpha,
                    in_strength,
                    out_strength,
                    self.config.solver_iterations,
                );
                linear(&lo.value, &hi.value, eased)
            }
        }
    }

    pub fn change_node_position(&mut self, index: usize, position: P) -> Result<()> {
        let node = self.node_mut(index)?;
        TweenError::check_position(position)?;
        node.position = position;
        self.sort();
        Ok(())
    }

    pub fn change_node_value(&mut self, index: usize, value: T) -> Result<()> {
        self.node_mut(index)?.value = value;
        Ok(())
    }

    pub fn change_node_ease_in(&mut self, index: usize, amount: f64) -> Result<()> {
        self.node_mut(index)?.in_amount = amount;
        Ok(())
    }

    pub fn change_node_ease_out(&mut self, index: usize, amount: f64) -> Result<()> {
        self.node_mut(index)?.out_amount = amount;
        Ok(())
    }

    pub fn change_node_eases(&mut self, index: usize, in_amount: f64, out_amount: f64) -> Result<()> {
        let node = self.node_mut(index)?;
        node.in_amount = in_amount;
        node.out_amount = out_amount;
        Ok(())
    }

    pub fn change_node_interpolation_type_in(
        &mut self,
        index: usize,
        in_type: InterpolationType,
    ) -> Result<()> {
        self.node_mut(index)?.in_type = in_type;
        Ok(())
    }

    pub fn change_node_interpolation_type_out(
        &mut self,
        index: usize,
        out_type: InterpolationType,
    ) -> Result<()> {
        self.node_mut(index)?.out_type = out_type;
        Ok(())
    }

    pub fn change_node_interpolation_types(
        &mut self,
        index: usize,
        in_type: InterpolationType,
        out_type: InterpolationType,
    ) -> Result<()> {
        let node = self.node_mut(index)?;
        node.in_type = in_type;
        node.out_type = out_type;
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node<P, T>] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Result<&Node<P, T>> {
        self.nodes
            .get(index)
            .ok_or(TweenError::index(index, self.nodes.len()))
    }

    /// First and last node positions.
    pub fn position_range(&self) -> Option<(P, P)> {
        Some((self.nodes.first()?.position, self.nodes.last()?.position))
    }

    fn node_mut(&mut self, index: usize) -> Result<&mut Node<P, T>> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(index)
            .ok_or(TweenError::index(index, len))
    }

    fn sort(&mut self) {
        sort_by_position(&mut self.nodes, |n| n.position);
    }
}
