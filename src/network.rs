use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use petgraph::graph::{EdgeIndex, Graph, NodeIndex};

use crate::amount::Amount;
use crate::edge::FlowEdge;
use crate::error::Error;
use crate::vertex::Vertex;

/// A capacitated flow network owning its vertices and edges in a flat arena.
///
/// External ids are stable: 0 is the synthetic source, `1..=n` the internal
/// vertices in matrix order, `n + 1` the synthetic sink. Node indices are
/// assigned in the same order, so `NodeIndex::index` and the external id
/// agree. After construction only the augmenting engine mutates edge flows.
#[derive(Clone, Debug)]
pub struct FlowNetwork<Amt> {
    graph: Graph<Vertex, FlowEdge<Amt>>,
    source: NodeIndex,
    sink: NodeIndex,
    internal: usize,
}

impl<Amt: Amount> FlowNetwork<Amt> {
    /// Build and validate a network from an `n x n` capacity matrix.
    ///
    /// Row `i`, column `j` holds the capacity of the edge from internal
    /// vertex `i + 1` to `j + 1`; zero means no edge. Construction follows a
    /// fixed order: vertices, matrix edges, validation, source synthesis,
    /// sink synthesis, reverse linking. Any failure aborts the whole solve.
    pub fn from_capacity_matrix(matrix: &[Vec<Amt>]) -> Result<Self, Error> {
        let n = matrix.len();
        let mut graph = Graph::with_capacity(n + 2, n * n);

        let source = graph.add_node(Vertex::new(0));
        for id in 1..=n {
            graph.add_node(Vertex::new(id));
        }
        let sink = graph.add_node(Vertex::new(n + 1));

        let mut network = Self {
            graph,
            source,
            sink,
            internal: n,
        };
        network.create_edges(matrix)?;
        network.verify()?;
        network.synthesize_source();
        network.synthesize_sink();
        network.link_reverses();

        log::debug!(
            "flow network built: {} internal vertices, {} edges",
            n,
            network.graph.edge_count()
        );
        Ok(network)
    }

    /// The synthetic source, id 0.
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// The synthetic sink, id `n + 1`.
    pub fn sink(&self) -> NodeIndex {
        self.sink
    }

    /// Number of internal vertices, i.e. the capacity matrix dimension.
    pub fn internal_count(&self) -> usize {
        self.internal
    }

    /// Number of vertices including both synthetic terminals.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn vertex(&self, index: NodeIndex) -> &Vertex {
        &self.graph[index]
    }

    pub fn edge(&self, index: EdgeIndex) -> &FlowEdge<Amt> {
        &self.graph[index]
    }

    pub(crate) fn edge_mut(&mut self, index: EdgeIndex) -> &mut FlowEdge<Amt> {
        &mut self.graph[index]
    }

    /// All vertices in id order, terminals included.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.graph.node_weights()
    }

    /// All edges in insertion order, synthetic terminal edges included.
    pub fn edges(&self) -> impl Iterator<Item = &FlowEdge<Amt>> {
        self.graph.edge_weights()
    }

    /// The internal vertices, ids `1..=n`.
    pub fn internal_vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.internal_indices().map(|v| &self.graph[v])
    }

    /// Assert the capacity bound and flow conservation over the current
    /// state. Both hold trivially on a freshly built network and must keep
    /// holding after every completed augmentation.
    pub fn check_invariants(&self) -> Result<(), Error> {
        for edge in self.graph.edge_weights() {
            if edge.flow() > edge.capacity() {
                return Err(Error::CapacityViolation(
                    self.graph[edge.from()].id(),
                    self.graph[edge.to()].id(),
                ));
            }
        }
        for vertex in self.internal_vertices() {
            if vertex.indegree() == 0 || vertex.outdegree() == 0 {
                continue;
            }
            let inflow: Amt = vertex
                .in_edges()
                .iter()
                .map(|&e| self.graph[e].flow())
                .sum();
            let outflow: Amt = vertex
                .out_edges()
                .iter()
                .map(|&e| self.graph[e].flow())
                .sum();
            if inflow != outflow {
                return Err(Error::ConservationViolation(vertex.id()));
            }
        }
        Ok(())
    }

    /// The per-edge flow assignment over the original graph as an `n x n`
    /// matrix, synthetic terminal edges excluded.
    pub fn flow_matrix(&self) -> Vec<Vec<Amt>> {
        let n = self.internal;
        let mut matrix = vec![vec![Amt::zero(); n]; n];
        for edge in self.graph.edge_weights() {
            if edge.from() == self.source || edge.to() == self.sink {
                continue;
            }
            let from = self.graph[edge.from()].id() - 1;
            let to = self.graph[edge.to()].id() - 1;
            matrix[from][to] = edge.flow();
        }
        matrix
    }

    fn internal_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (1..=self.internal).map(NodeIndex::new)
    }

    fn create_edges(&mut self, matrix: &[Vec<Amt>]) -> Result<(), Error> {
        let n = self.internal;
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(Error::MalformedInput(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &capacity) in row.iter().enumerate() {
                if capacity < Amt::zero() {
                    return Err(Error::MalformedInput(format!(
                        "negative capacity at ({i}, {j})"
                    )));
                }
                if capacity.is_zero() {
                    continue;
                }
                self.add_edge(NodeIndex::new(i + 1), NodeIndex::new(j + 1), capacity);
            }
        }
        Ok(())
    }

    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, capacity: Amt) -> EdgeIndex {
        let edge = self
            .graph
            .add_edge(from, to, FlowEdge::new(from, to, capacity));
        self.graph[from].register_out(edge);
        self.graph[to].register_in(edge);
        edge
    }

    /// Conditions for a valid flow network, checked before the terminals are
    /// synthesized: at least one source and one sink candidate must exist,
    /// and the generic capacity/conservation invariants must hold.
    fn verify(&self) -> Result<(), Error> {
        if !self.has_source_candidate() || !self.has_sink_candidate() {
            return Err(Error::MissingTerminal);
        }
        self.check_invariants()
    }

    /// A source candidate is an internal vertex no edge points to.
    fn has_source_candidate(&self) -> bool {
        self.internal_vertices().any(|v| v.indegree() == 0)
    }

    /// A sink candidate is an internal vertex with no outgoing edge.
    fn has_sink_candidate(&self) -> bool {
        self.internal_vertices().any(|v| v.outdegree() == 0)
    }

    /// Attach the synthetic source: every source candidate gets an edge from
    /// vertex 0 carrying the candidate's total outgoing capacity.
    fn synthesize_source(&mut self) {
        let candidates: Vec<NodeIndex> = self
            .internal_indices()
            .filter(|&v| self.graph[v].indegree() == 0)
            .collect();
        for to in candidates {
            let capacity = self.graph[to]
                .out_edges()
                .iter()
                .map(|&e| self.graph[e].capacity())
                .sum();
            self.add_edge(self.source, to, capacity);
        }
    }

    /// Attach the synthetic sink: every sink candidate gets an edge to
    /// vertex `n + 1` carrying the candidate's total incoming capacity.
    fn synthesize_sink(&mut self) {
        let candidates: Vec<NodeIndex> = self
            .internal_indices()
            .filter(|&v| self.graph[v].outdegree() == 0)
            .collect();
        for from in candidates {
            let capacity = self.graph[from]
                .in_edges()
                .iter()
                .map(|&e| self.graph[e].capacity())
                .sum();
            self.add_edge(from, self.sink, capacity);
        }
    }

    /// Pair up opposite edges: whenever both `u -> v` and `v -> u` exist,
    /// each records the other as its reverse. Edges without a counterpart
    /// keep no link, so residual cancellation through them stays unavailable.
    fn link_reverses(&mut self) {
        for index in 0..self.graph.edge_count() {
            let edge = EdgeIndex::new(index);
            let (from, to) = (self.graph[edge].from(), self.graph[edge].to());
            let reverse = self.graph[from]
                .in_edges()
                .iter()
                .copied()
                .find(|&r| self.graph[r].from() == to);
            if let Some(reverse) = reverse {
                self.graph[edge].set_reverse(reverse);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Vec<Vec<i32>> {
        vec![
            vec![0, 3, 2, 0],
            vec![0, 0, 0, 2],
            vec![0, 0, 0, 3],
            vec![0, 0, 0, 0],
        ]
    }

    fn edge_between(network: &FlowNetwork<i32>, from: usize, to: usize) -> EdgeIndex {
        network
            .vertex(NodeIndex::new(from))
            .out_edges()
            .iter()
            .copied()
            .find(|&e| network.vertex(network.edge(e).to()).id() == to)
            .unwrap()
    }

    #[test]
    fn builds_vertices_and_terminals_in_id_order() {
        let network = FlowNetwork::from_capacity_matrix(&diamond()).unwrap();
        assert_eq!(network.internal_count(), 4);
        assert_eq!(network.vertex_count(), 6);
        assert_eq!(network.vertex(network.source()).id(), 0);
        assert_eq!(network.vertex(network.sink()).id(), 5);
        let ids: Vec<usize> = network.vertices().map(Vertex::id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn synthesizes_terminal_edges_with_aggregate_capacity() {
        let network = FlowNetwork::from_capacity_matrix(&diamond()).unwrap();
        let source_caps: Vec<i32> = network
            .vertex(network.source())
            .out_edges()
            .iter()
            .map(|&e| network.edge(e).capacity())
            .collect();
        // vertex 1 is the only source candidate and emits 3 + 2
        assert_eq!(source_caps, vec![5]);
        let sink_caps: Vec<i32> = network
            .vertex(network.sink())
            .in_edges()
            .iter()
            .map(|&e| network.edge(e).capacity())
            .collect();
        // vertex 4 is the only sink candidate and receives 2 + 3
        assert_eq!(sink_caps, vec![5]);
    }

    #[test]
    fn links_reverse_edges_for_opposite_pairs_only() {
        // 2 -> 3 and 3 -> 2 form a pair; everything else stays unpaired
        let matrix = vec![
            vec![0, 4, 0, 0],
            vec![0, 0, 2, 0],
            vec![0, 2, 0, 5],
            vec![0, 0, 0, 0],
        ];
        let network = FlowNetwork::from_capacity_matrix(&matrix).unwrap();
        let forward = edge_between(&network, 2, 3);
        let backward = edge_between(&network, 3, 2);
        assert_eq!(network.edge(forward).reverse(), Some(backward));
        assert_eq!(network.edge(backward).reverse(), Some(forward));
        assert_eq!(network.edge(edge_between(&network, 1, 2)).reverse(), None);
        assert_eq!(network.edge(edge_between(&network, 0, 1)).reverse(), None);
        assert_eq!(network.edge(edge_between(&network, 4, 5)).reverse(), None);
    }

    #[test]
    fn rejects_graph_without_terminal_candidates() {
        // a plain 2-cycle has neither an indegree-0 nor an outdegree-0 vertex
        let matrix = vec![vec![0, 1], vec![1, 0]];
        assert_eq!(
            FlowNetwork::from_capacity_matrix(&matrix).unwrap_err(),
            Error::MissingTerminal
        );
    }

    #[test]
    fn rejects_empty_matrix() {
        let matrix: Vec<Vec<i32>> = Vec::new();
        assert_eq!(
            FlowNetwork::from_capacity_matrix(&matrix).unwrap_err(),
            Error::MissingTerminal
        );
    }

    #[test]
    fn rejects_negative_capacity() {
        let matrix = vec![vec![0, -5], vec![0, 0]];
        assert!(matches!(
            FlowNetwork::from_capacity_matrix(&matrix).unwrap_err(),
            Error::MalformedInput(_)
        ));
    }

    #[test]
    fn rejects_ragged_matrix() {
        let matrix = vec![vec![0, 5], vec![0]];
        assert!(matches!(
            FlowNetwork::from_capacity_matrix(&matrix).unwrap_err(),
            Error::MalformedInput(_)
        ));
    }

    #[test]
    fn invariant_check_catches_capacity_violation() {
        let matrix = vec![vec![0, 5], vec![0, 0]];
        let mut network = FlowNetwork::from_capacity_matrix(&matrix).unwrap();
        let edge = edge_between(&network, 1, 2);
        network.edge_mut(edge).add_flow(9);
        assert_eq!(
            network.check_invariants().unwrap_err(),
            Error::CapacityViolation(1, 2)
        );
    }

    #[test]
    fn invariant_check_catches_conservation_violation() {
        // chain 1 -> 2 -> 3; flow leaves vertex 2 without having entered it
        let matrix = vec![
            vec![0, 5, 0],
            vec![0, 0, 5],
            vec![0, 0, 0],
        ];
        let mut network = FlowNetwork::from_capacity_matrix(&matrix).unwrap();
        let edge = edge_between(&network, 2, 3);
        network.edge_mut(edge).add_flow(3);
        assert_eq!(
            network.check_invariants().unwrap_err(),
            Error::ConservationViolation(2)
        );
    }

    #[test]
    fn flow_matrix_starts_at_zero_and_excludes_terminals() {
        let network = FlowNetwork::from_capacity_matrix(&diamond()).unwrap();
        let flows = network.flow_matrix();
        assert_eq!(flows, vec![vec![0; 4]; 4]);
    }
}
