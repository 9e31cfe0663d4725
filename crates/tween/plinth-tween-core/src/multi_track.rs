//! Fixed-width bundles of independent tracks (2D/3D positions, colors).
//!
//! Each channel is a full [`Track`] with its own nodes and transitions; a
//! `MultiNode` is a convenience for keying every channel at one position.

use crate::config::Config;
use crate::error::{Result, TweenError};
use crate::track::{Node, Track};
use crate::value::{Position, Tweenable};

/// One node per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiNode<P, T, const N: usize> {
    pub nodes: [Node<P, T>; N],
}

impl<P: Copy, T, const N: usize> MultiNode<P, T, N> {
    /// Linear nodes for every channel at the same position.
    pub fn uniform(position: P, values: [T; N]) -> Self {
        Self {
            nodes: values.map(|value| Node::new(position, value)),
        }
    }

    pub fn from_nodes(nodes: [Node<P, T>; N]) -> Self {
        Self { nodes }
    }

    /// Apply the same ease strengths to every channel.
    pub fn with_eases(self, in_amount: f64, out_amount: f64) -> Self {
        Self {
            nodes: self.nodes.map(|n| n.with_eases(in_amount, out_amount)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MultiTrack<P, T, const N: usize> {
    channels: [Track<P, T>; N],
}

pub type Track2<P, T> = MultiTrack<P, T, 2>;
pub type Track3<P, T> = MultiTrack<P, T, 3>;

impl<P: Position, T, const N: usize> Default for MultiTrack<P, T, N> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<P: Position, T, const N: usize> MultiTrack<P, T, N> {
    pub fn with_config(config: Config) -> Self {
        Self {
            channels: std::array::from_fn(|_| Track::with_config(config)),
        }
    }
}

impl<P: Position, T: Tweenable, const N: usize> MultiTrack<P, T, N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key every channel. Positions are checked up front so a rejected
    /// node leaves all channels untouched.
    pub fn add_node(&mut self, node: MultiNode<P, T, N>) -> Result<()> {
        for n in &node.nodes {
            TweenError::check_position(n.position)?;
        }
        for (channel, n) in self.channels.iter_mut().zip(node.nodes) {
            channel.add_node(n)?;
        }
        Ok(())
    }

    pub fn add_channel_node(&mut self, channel: usize, node: Node<P, T>) -> Result<()> {
        self.channel_mut(channel)?.add_node(node)
    }

    pub fn channel(&self, channel: usize) -> Result<&Track<P, T>> {
        self.channels
            .get(channel)
            .ok_or(TweenError::index(channel, N))
    }

    pub fn channel_mut(&mut self, channel: usize) -> Result<&mut Track<P, T>> {
        self.channels
            .get_mut(channel)
            .ok_or(TweenError::index(channel, N))
    }

    pub fn channels(&self) -> &[Track<P, T>; N] {
        &self.channels
    }

    pub fn clear(&mut self) {
        self.channels.iter_mut().for_each(Track::clear);
    }

    /// Every channel sampled at `position`. Fails with `EmptyTrack` if any
    /// channel has no nodes.
    pub fn get_value(&self, position: P) -> Result<[T; N]> {
        let values = self
            .channels
            .iter()
            .map(|channel| channel.get_value(position))
            .collect::<Result<Vec<T>>>()?;
        // One value per channel, so the length is always N.
        values.try_into().map_err(|_| TweenError::EmptyTrack)
    }
}
