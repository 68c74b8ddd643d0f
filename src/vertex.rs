use alloc::vec::Vec;

use petgraph::graph::EdgeIndex;

/// A vertex of the flow network.
///
/// The id is stable for the lifetime of the network: 0 is the synthetic
/// source, `1..=n` are the internal vertices in matrix order and `n + 1` is
/// the synthetic sink. The edge lists keep insertion order; traversal
/// tie-breaking follows that order, which is why the lists live here instead
/// of relying on the graph's own adjacency iteration.
#[derive(Clone, Debug)]
pub struct Vertex {
    id: usize,
    out_edges: Vec<EdgeIndex>,
    in_edges: Vec<EdgeIndex>,
}

impl Vertex {
    pub(crate) fn new(id: usize) -> Self {
        Self {
            id,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn indegree(&self) -> usize {
        self.in_edges.len()
    }

    pub fn outdegree(&self) -> usize {
        self.out_edges.len()
    }

    /// Outgoing edges in insertion order.
    pub fn out_edges(&self) -> &[EdgeIndex] {
        &self.out_edges
    }

    /// Incoming edges in insertion order.
    pub fn in_edges(&self) -> &[EdgeIndex] {
        &self.in_edges
    }

    pub(crate) fn register_out(&mut self, edge: EdgeIndex) {
        self.out_edges.push(edge);
    }

    pub(crate) fn register_in(&mut self, edge: EdgeIndex) {
        self.in_edges.push(edge);
    }
}
