use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::amount::Amount;

/// The capacity/flow pair carried by one directed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowStatus<Amt> {
    capacity: Amt,
    flow: Amt,
}

impl<Amt: Amount> FlowStatus<Amt> {
    pub fn new(capacity: Amt) -> Self {
        Self {
            capacity,
            flow: Amt::zero(),
        }
    }

    pub fn capacity(&self) -> Amt {
        self.capacity
    }

    pub fn flow(&self) -> Amt {
        self.flow
    }

    /// Additional flow the edge can still carry.
    pub fn residual(&self) -> Amt {
        self.capacity - self.flow
    }

    pub(crate) fn add_flow(&mut self, amount: Amt) {
        self.flow += amount;
    }
}

/// A directed edge of the flow network.
///
/// Endpoints and the paired reverse edge are held as arena indices, never as
/// owning pointers; the network's graph owns every vertex and edge. The
/// reverse link is assigned at most once while the network is finalized and
/// never reassigned.
#[derive(Clone, Copy, Debug)]
pub struct FlowEdge<Amt> {
    from: NodeIndex,
    to: NodeIndex,
    status: FlowStatus<Amt>,
    reverse: Option<EdgeIndex>,
}

impl<Amt: Amount> FlowEdge<Amt> {
    pub(crate) fn new(from: NodeIndex, to: NodeIndex, capacity: Amt) -> Self {
        Self {
            from,
            to,
            status: FlowStatus::new(capacity),
            reverse: None,
        }
    }

    pub fn from(&self) -> NodeIndex {
        self.from
    }

    pub fn to(&self) -> NodeIndex {
        self.to
    }

    pub fn capacity(&self) -> Amt {
        self.status.capacity()
    }

    pub fn flow(&self) -> Amt {
        self.status.flow()
    }

    pub fn residual(&self) -> Amt {
        self.status.residual()
    }

    pub fn status(&self) -> &FlowStatus<Amt> {
        &self.status
    }

    /// The paired opposite edge, when one exists in the graph.
    pub fn reverse(&self) -> Option<EdgeIndex> {
        self.reverse
    }

    pub(crate) fn add_flow(&mut self, amount: Amt) {
        self.status.add_flow(amount);
    }

    pub(crate) fn set_reverse(&mut self, edge: EdgeIndex) {
        self.reverse = Some(edge);
    }
}
