use alloc::vec::Vec;

use crate::algo::{FlowAlgorithm, PathSearch};
use crate::amount::Amount;
use crate::error::Error;
use crate::network::FlowNetwork;
use crate::solution::FlowSolution;

/// The Edmonds-Karp augmenting engine.
///
/// Repeats the plugged-in path search and saturates the bottleneck of each
/// returned path until no augmenting path remains, then derives the minimum
/// source-side cut from the final residual network.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdmondsKarp<S> {
    path_finder: S,
}

impl<S> EdmondsKarp<S> {
    pub fn new(path_finder: S) -> Self {
        Self { path_finder }
    }
}

impl<Amt, S> FlowAlgorithm<Amt> for EdmondsKarp<S>
where
    Amt: Amount,
    S: PathSearch<Amt>,
{
    fn solve(&self, mut network: FlowNetwork<Amt>) -> Result<FlowSolution<Amt>, Error> {
        let source = network.source();
        let sink = network.sink();
        let mut iterations = 0;

        loop {
            let path = self.path_finder.find_path(&network, source, sink, true);
            let Some(bottleneck) = path.iter().map(|&e| network.edge(e).residual()).min() else {
                break;
            };

            // every edge on the path takes the same increase; a paired
            // reverse edge appearing here cancels previously routed flow
            for &index in &path {
                network.edge_mut(index).add_flow(bottleneck);
            }
            iterations += 1;
            log::trace!("augmented {} edge(s) by {bottleneck}", path.len());
        }

        let max_flow: Amt = network
            .vertex(source)
            .out_edges()
            .iter()
            .map(|&e| network.edge(e).flow())
            .sum();

        let sweep = self.path_finder.find_path(&network, source, sink, false);
        let mut source_cut: Vec<usize> = sweep
            .iter()
            .map(|&e| network.vertex(network.edge(e).to()).id())
            .collect();
        source_cut.sort_unstable();

        log::debug!(
            "max flow {max_flow} after {iterations} iteration(s), source cut size {}",
            source_cut.len()
        );

        Ok(FlowSolution::new(network, max_flow, iterations, source_cut))
    }
}
