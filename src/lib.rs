#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
mod amount;
mod edge;
mod error;
mod network;
mod report;
mod solution;
mod vertex;

use alloc::vec::Vec;

pub use crate::amount::Amount;
pub use crate::edge::{FlowEdge, FlowStatus};
pub use crate::error::Error;
pub use crate::network::FlowNetwork;
pub use crate::report::{parse_capacity_matrix, render_report};
pub use crate::solution::{FlowReport, FlowSolution};
pub use crate::vertex::Vertex;

use crate::algo::breadth_first::BreadthFirst;
use crate::algo::edmonds_karp::EdmondsKarp;
use crate::algo::FlowAlgorithm;

//
// Solve a capacity matrix end to end
//

/// Build a flow network from `matrix` and run Edmonds-Karp with
/// breadth-first path selection over it.
pub fn solve<Amt: Amount>(matrix: &[Vec<Amt>]) -> Result<FlowSolution<Amt>, Error> {
    let network = FlowNetwork::from_capacity_matrix(matrix)?;
    EdmondsKarp::new(BreadthFirst).solve(network)
}
