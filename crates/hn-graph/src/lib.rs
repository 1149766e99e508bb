//! hn-graph: hydraulic network topology for hydronet.
//!
//! Provides:
//! - Topology builder: external flow element list to dense node/element arrays
//! - Connectivity validator: open ends, invalid cyclic connections, disjoint networks
//! - Sparse connectivity pattern and union-find used by the validator
//! - Graphviz export
//!
//! # Example
//!
//! ```
//! use hn_graph::{ExternalElement, check, setup};
//!
//! let network = setup(&[
//!     ExternalElement::new(10, 100, 200),
//!     ExternalElement::new(11, 200, 300),
//!     ExternalElement::new(12, 300, 100),
//! ]);
//!
//! assert_eq!(network.node_count(), 3);
//! assert!(check(&network).is_valid());
//! ```

pub mod builder;
pub mod diagnostic;
pub mod disjoint;
pub mod dot;
pub mod element;
pub mod error;
pub mod graph;
pub(crate) mod indexing;
pub mod pattern;
pub mod validate;

// Re-exports for ergonomics
pub use builder::{NetworkBuilder, setup};
pub use diagnostic::{ConnectivityReport, Diagnostic, DiagnosticKind};
pub use element::{ExternalElement, FlowElementRef};
pub use error::{GraphError, GraphResult};
pub use graph::{Element, Network, NetworkSummary, Node, PortKind};
pub use pattern::SparseMatrixPattern;
pub use validate::{CheckOptions, ComponentAlgorithm, check, check_with, connected_components};
