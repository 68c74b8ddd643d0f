use alloc::string::String;

use displaydoc::Display;

/// Failures raised while parsing a capacity matrix or building a flow
/// network. All of them are fatal: the solve aborts and no partial result
/// is produced.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// No indegree-0 source candidate or no outdegree-0 sink candidate exists
    MissingTerminal,
    /// Flow conservation violated at vertex {0}: inflow differs from outflow
    ConservationViolation(usize),
    /// Flow exceeds capacity on edge {0} -> {1}
    CapacityViolation(usize, usize),
    /// Malformed capacity matrix: {0}
    MalformedInput(String),
}
