//! Piecewise linear lookup table.
//!
//! A sorted set of `(position, value)` samples queried by linear
//! interpolation between neighbours and clamped at both ends. Used as the
//! backing table of [`crate::ease::FastEase`] and usable on its own.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweenError};
use crate::interp::functions::linear;
use crate::segment::{find_segment, sort_by_position, Segment};
use crate::value::{Position, Tweenable};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseNode<P, T> {
    pub position: P,
    pub value: T,
}

/// Nodes are kept sorted by position (stable, so ties keep insertion order).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "PiecewiseRepr<P, T>",
    bound(deserialize = "P: Position + Deserialize<'de>, T: Deserialize<'de>")
)]
pub struct Piecewise<P, T> {
    nodes: Vec<PiecewiseNode<P, T>>,
}

#[derive(Deserialize)]
struct PiecewiseRepr<P, T> {
    nodes: Vec<PiecewiseNode<P, T>>,
}

impl<P: Position, T> TryFrom<PiecewiseRepr<P, T>> for Piecewise<P, T> {
    type Error = TweenError;

    fn try_from(repr: PiecewiseRepr<P, T>) -> Result<Self> {
        let mut nodes = repr.nodes;
        for node in &nodes {
            TweenError::check_position(node.position)?;
        }
        sort_by_position(&mut nodes, |n| n.position);
        Ok(Self { nodes })
    }
}

impl<P: Position, T> Default for Piecewise<P, T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<P: Position, T: Tweenable> Piecewise<P, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_nodes(&mut self) {
        self.nodes.clear();
    }

    /// Insert a sample. Non-finite positions are rejected.
    pub fn add_node(&mut self, position: P, value: T) -> Result<()> {
        TweenError::check_position(position)?;
        self.nodes.push(PiecewiseNode { position, value });
        self.sort();
        Ok(())
    }

    /// Linear interpolation between the bracketing samples, clamped to the
    /// first/last sample outside the table's range.
    pub fn get_value(&self, position: P) -> Result<T> {
        match find_segment(&self.nodes, position, |n| n.position) {
            None => Err(TweenError::EmptyTable),
            Some(Segment::Node(i)) => Ok(self.nodes[i].value.clone()),
            Some(Segment::Between { lo, hi, alpha }) => Ok(linear(
                &self.nodes[lo].value,
                &self.nodes[hi].value,
                alpha,
            )),
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

    pub fn remove_node(&mut self, index: usize) -> Result<PiecewiseNode<P, T>> {
        if index >= self.nodes.len() {
            return Err(TweenError::index(index, self.nodes.len()));
        }
        Ok(self.nodes.remove(index))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[PiecewiseNode<P, T>] {
        &self.nodes
    }

    fn node_mut(&mut self, index: usize) -> Result<&mut PiecewiseNode<P, T>> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(index)
            .ok_or(TweenError::index(index, len))
    }

    fn sort(&mut self) {
        sort_by_position(&mut self.nodes, |n| n.position);
    }
}
