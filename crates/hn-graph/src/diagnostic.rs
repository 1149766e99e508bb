//! Structural diagnostics produced by the connectivity check.

use std::fmt;

use hn_core::ElementId;
use serde::Serialize;

use crate::error::{GraphError, GraphResult};

/// One structural defect of a hydraulic network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A node has exactly one incident element.
    OpenEnd { element_id: ElementId },

    /// The element's inlet and outlet are the same node.
    InvalidCyclicConnection { element_id: ElementId },

    /// A group of elements is not connected to the rest of the network.
    DisconnectedComponent { element_ids: Vec<ElementId> },
}

/// Discriminant of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    OpenEnd,
    InvalidCyclicConnection,
    DisconnectedComponent,
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::OpenEnd { .. } => DiagnosticKind::OpenEnd,
            Diagnostic::InvalidCyclicConnection { .. } => DiagnosticKind::InvalidCyclicConnection,
            Diagnostic::DisconnectedComponent { .. } => DiagnosticKind::DisconnectedComponent,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OpenEnd { element_id } => {
                write!(
                    f,
                    "FlowElement with id {} is an open end of hydraulic network!",
                    element_id
                )
            }
            Diagnostic::InvalidCyclicConnection { element_id } => {
                write!(
                    f,
                    "FlowElement with id {} is an invalid cyclic connection!",
                    element_id
                )
            }
            Diagnostic::DisconnectedComponent { element_ids } => {
                let list = element_ids
                    .iter()
                    .map(ElementId::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                write!(
                    f,
                    "Network is not completely connected! Distinct network formed by flow elements ({})!",
                    list
                )
            }
        }
    }
}

/// Accumulated result of [`crate::check`]. Empty means the network is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ConnectivityReport {
    diagnostics: Vec<Diagnostic>,
}

impl ConnectivityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics of one kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind() == kind).count()
    }

    /// Human-readable text: one line per diagnostic, empty when valid.
    pub fn message(&self) -> String {
        self.diagnostics
            .iter()
            .map(Diagnostic::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Fail-fast gate for callers that refuse to simulate an invalid network.
    pub fn into_result(self) -> GraphResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GraphError::InvalidTopology { report: self })
        }
    }
}

impl IntoIterator for ConnectivityReport {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConnectivityReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl fmt::Display for ConnectivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
