use alloc::vec::Vec;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::amount::Amount;
use crate::error::Error;
use crate::network::FlowNetwork;
use crate::solution::FlowSolution;

pub mod breadth_first;
pub mod edmonds_karp;

/// A pluggable augmenting-path search over the residual network.
pub trait PathSearch<Amt: Amount> {
    /// Find one source-to-sink path of edges with positive residual
    /// capacity, returned in path order, when `must_reach_sink` is set; an
    /// empty result means no augmenting path remains.
    ///
    /// When `must_reach_sink` is unset the entire component reachable from
    /// `source` is swept instead and every traversed edge is returned in
    /// discovery order. The sweep always crosses the edges leaving `source`
    /// itself, so a cut derived from it separates vertices of the original
    /// graph rather than stopping at the synthetic terminal edges.
    fn find_path(
        &self,
        network: &FlowNetwork<Amt>,
        source: NodeIndex,
        sink: NodeIndex,
        must_reach_sink: bool,
    ) -> Vec<EdgeIndex>;
}

/// A maximum-flow algorithm over a constructed flow network.
pub trait FlowAlgorithm<Amt: Amount> {
    /// Run to completion, consuming the network and returning the immutable
    /// solution record.
    fn solve(&self, network: FlowNetwork<Amt>) -> Result<FlowSolution<Amt>, Error>;
}
