use alloc::collections::{BTreeMap, VecDeque};
use alloc::vec;
use alloc::vec::Vec;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::algo::PathSearch;
use crate::amount::Amount;
use crate::network::FlowNetwork;

/// Breadth-first search strategy: augmenting paths are shortest in edge
/// count, ties broken by edge insertion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

impl<Amt: Amount> PathSearch<Amt> for BreadthFirst {
    fn find_path(
        &self,
        network: &FlowNetwork<Amt>,
        source: NodeIndex,
        sink: NodeIndex,
        must_reach_sink: bool,
    ) -> Vec<EdgeIndex> {
        let mut visited = vec![false; network.vertex_count()];
        let mut parent: BTreeMap<NodeIndex, EdgeIndex> = BTreeMap::new();
        let mut traversed = Vec::new();
        let mut queue = VecDeque::new();
        let mut found = false;

        visited[source.index()] = true;
        queue.push_back(source);

        'sweep: while let Some(current) = queue.pop_front() {
            // The cut sweep crosses the terminal edges attached to the start
            // vertex regardless of saturation; everywhere else only positive
            // residual capacity may be traversed.
            let unrestricted = !must_reach_sink && current == source;
            for &index in network.vertex(current).out_edges() {
                let edge = network.edge(index);
                let next = edge.to();
                if visited[next.index()]
                    || (!unrestricted && edge.residual() <= Amt::zero())
                {
                    continue;
                }
                visited[next.index()] = true;
                parent.insert(next, index);
                traversed.push(index);
                queue.push_back(next);
                if must_reach_sink && next == sink {
                    found = true;
                    break 'sweep;
                }
            }
        }

        if !must_reach_sink {
            return traversed;
        }
        if !found {
            return Vec::new();
        }

        // walk the parent edges back from the sink, then flip into path order
        let mut path = Vec::new();
        let mut current = sink;
        while current != source {
            let index = parent[&current];
            path.push(index);
            current = network.edge(index).from();
        }
        path.reverse();
        path
    }
}
