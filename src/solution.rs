use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::network::FlowNetwork;

/// Immutable result of one max-flow solve.
///
/// Owns the finished network so callers can inspect the final per-edge flow
/// assignment; nothing mutates the record after creation.
#[derive(Clone, Debug)]
pub struct FlowSolution<Amt> {
    network: FlowNetwork<Amt>,
    max_flow: Amt,
    iterations: usize,
    source_cut: Vec<usize>,
}

impl<Amt: Amount> FlowSolution<Amt> {
    pub(crate) fn new(
        network: FlowNetwork<Amt>,
        max_flow: Amt,
        iterations: usize,
        source_cut: Vec<usize>,
    ) -> Self {
        Self {
            network,
            max_flow,
            iterations,
            source_cut,
        }
    }

    /// The maximum flow routed from source to sink.
    pub fn max_flow(&self) -> Amt {
        self.max_flow
    }

    /// Number of augmenting iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Internal vertex ids on the source side of the minimum cut, ascending.
    pub fn source_cut(&self) -> &[usize] {
        &self.source_cut
    }

    /// The finished network in its final residual state.
    pub fn network(&self) -> &FlowNetwork<Amt> {
        &self.network
    }

    /// Per-edge flow over the original graph, synthetic edges excluded.
    pub fn flow_matrix(&self) -> Vec<Vec<Amt>> {
        self.network.flow_matrix()
    }

    /// Plain serializable summary of the solve.
    pub fn report(&self) -> FlowReport<Amt> {
        FlowReport {
            max_flow: self.max_flow,
            flows: self.flow_matrix(),
            min_cut: self.source_cut.clone(),
            iterations: self.iterations,
        }
    }

    /// Release the finished network, e.g. to run an engine over it again.
    pub fn into_network(self) -> FlowNetwork<Amt> {
        self.network
    }
}

/// Serializable summary of a solve; this is the record the text renderer
/// consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowReport<Amt> {
    pub max_flow: Amt,
    pub flows: Vec<Vec<Amt>>,
    pub min_cut: Vec<usize>,
    pub iterations: usize,
}
