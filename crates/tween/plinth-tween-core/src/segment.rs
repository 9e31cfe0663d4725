//! Sorted-node helpers shared by `Piecewise` and `Track`.

use crate::value::Position;

/// Where a query position falls within a sorted node list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Segment {
    /// Use this node's value unchanged (clamped or exact hit).
    Node(usize),
    /// Strictly inside `[lo, hi)`, with `alpha` in (0,1).
    Between { lo: usize, hi: usize, alpha: f64 },
}

/// Stable sort by position. Ties keep insertion order.
pub(crate) fn sort_by_position<N, P: Position>(nodes: &mut [N], position: impl Fn(&N) -> P) {
    nodes.sort_by(|a, b| position(a).to_f64().total_cmp(&position(b).to_f64()));
}

/// Find the segment for `position`. Returns `None` only for an empty slice.
/// - position < first: the first node.
/// - position >= last: the last node (the latest inserted among ties).
/// - otherwise `lo` is the last node at or before `position` and `hi` the
///   node after it; an exact hit on `lo` returns `lo` itself.
pub(crate) fn find_segment<N, P: Position>(
    nodes: &[N],
    query: P,
    position: impl Fn(&N) -> P,
) -> Option<Segment> {
    let n = nodes.len();
    let first = position(nodes.first()?);
    let last = position(&nodes[n - 1]);
    if n == 1 || query < first {
        return Some(Segment::Node(0));
    }
    if query >= last {
        return Some(Segment::Node(n - 1));
    }
    let idx = nodes.partition_point(|node| position(node) <= query);
    if idx == 0 {
        // Unordered query (NaN); hold the first node.
        return Some(Segment::Node(0));
    }
    if idx >= n {
        return Some(Segment::Node(n - 1));
    }
    let lo = idx - 1;
    let lo_pos = position(&nodes[lo]);
    if query == lo_pos {
        return Some(Segment::Node(lo));
    }
    let lo_f = lo_pos.to_f64();
    let alpha = (query.to_f64() - lo_f) / (position(&nodes[idx]).to_f64() - lo_f);
    Some(Segment::Between { lo, hi: idx, alpha })
}
