//! Graph-specific error types.

use hn_core::HnError;
use thiserror::Error;

use crate::diagnostic::ConnectivityReport;

/// Errors raised by checked topology lookups and by the fail-fast validation gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node or element index lies outside the built network.
    #[error("{what} index {index} is out of bounds (len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// The connectivity check reported at least one structural defect.
    #[error("Invalid hydraulic network topology:\n{}", .report.message())]
    InvalidTopology { report: ConnectivityReport },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for HnError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::IndexOob { what, index, len } => HnError::IndexOob { what, index, len },
            GraphError::InvalidTopology { .. } => HnError::InvalidNetwork {
                what: err.to_string(),
            },
        }
    }
}
