//! Core topology data structures.

use hn_core::{ElemIdx, ElementId, NodeIdx};

use crate::error::{GraphError, GraphResult};

/// Role of a node relative to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    /// The node is the element's inlet (upstream connection).
    Inlet,
    /// The node is the element's outlet (downstream connection).
    Outlet,
}

/// A flow element (pipe, pump, valve, ...) in the dense element index space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElemIdx,
    /// Id in the caller's data model, kept for diagnostics.
    pub element_id: ElementId,
    pub inlet: NodeIdx,
    pub outlet: NodeIdx,
}

impl Element {
    /// Node on the given side of the element.
    pub fn node(&self, kind: PortKind) -> NodeIdx {
        match kind {
            PortKind::Inlet => self.inlet,
            PortKind::Outlet => self.outlet,
        }
    }

    /// Inlet and outlet resolve to the same node.
    pub fn is_self_loop(&self) -> bool {
        self.inlet == self.outlet
    }
}

/// A connection point in the dense node index space.
///
/// Nodes hold no physical data, only fast-access incidence lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeIdx,
    /// Elements whose inlet is this node, in element order.
    pub inlet_elements: Vec<ElemIdx>,
    /// Elements whose outlet is this node, in element order.
    pub outlet_elements: Vec<ElemIdx>,
    /// Every incidence in processing order. A self-loop element appears twice.
    pub all_elements: Vec<ElemIdx>,
}

impl Node {
    pub(crate) fn new(id: NodeIdx) -> Self {
        Self {
            id,
            inlet_elements: Vec::new(),
            outlet_elements: Vec::new(),
            all_elements: Vec::new(),
        }
    }

    /// Number of incidences (inlet plus outlet side).
    pub fn degree(&self) -> usize {
        self.all_elements.len()
    }

    /// Incidences on one side of the node.
    pub fn elements(&self, kind: PortKind) -> &[ElemIdx] {
        match kind {
            PortKind::Inlet => &self.inlet_elements,
            PortKind::Outlet => &self.outlet_elements,
        }
    }
}

/// Counts reported after a network has been set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkSummary {
    pub node_count: usize,
    pub element_count: usize,
    pub max_degree: usize,
    /// Nodes with exactly one incident element.
    pub open_end_count: usize,
}

/// The built topology: dense node and element arrays with incidence lists.
///
/// This is the read-only handoff to the flow/pressure solver. It is rebuilt
/// from scratch by [`crate::setup`] and never updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Network {
    pub(crate) nodes: Vec<Node>,
    pub(crate) elements: Vec<Element>,
}

impl Network {
    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all elements.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get a node by index (returns None if out of bounds).
    pub fn node(&self, id: NodeIdx) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get an element by index (returns None if out of bounds).
    pub fn element(&self, id: ElemIdx) -> Option<&Element> {
        self.elements.get(id.index())
    }

    fn checked_element(&self, id: ElemIdx) -> GraphResult<&Element> {
        self.element(id).ok_or(GraphError::IndexOob {
            what: "element",
            index: id.index(),
            len: self.elements.len(),
        })
    }

    fn checked_node(&self, id: NodeIdx) -> GraphResult<&Node> {
        self.node(id).ok_or(GraphError::IndexOob {
            what: "node",
            index: id.index(),
            len: self.nodes.len(),
        })
    }

    /// Inlet node of element `k`.
    pub fn inlet_node_index(&self, k: ElemIdx) -> GraphResult<NodeIdx> {
        Ok(self.checked_element(k)?.inlet)
    }

    /// Outlet node of element `k`.
    pub fn outlet_node_index(&self, k: ElemIdx) -> GraphResult<NodeIdx> {
        Ok(self.checked_element(k)?.outlet)
    }

    /// External element id of element `k`.
    pub fn element_id(&self, k: ElemIdx) -> GraphResult<ElementId> {
        Ok(self.checked_element(k)?.element_id)
    }

    /// All elements incident to node `i` (inlet side first per element).
    pub fn incident_elements(&self, i: NodeIdx) -> GraphResult<&[ElemIdx]> {
        Ok(&self.checked_node(i)?.all_elements)
    }

    /// Elements for which node `i` is the inlet.
    pub fn inlet_elements(&self, i: NodeIdx) -> GraphResult<&[ElemIdx]> {
        Ok(&self.checked_node(i)?.inlet_elements)
    }

    /// Elements for which node `i` is the outlet.
    pub fn outlet_elements(&self, i: NodeIdx) -> GraphResult<&[ElemIdx]> {
        Ok(&self.checked_node(i)?.outlet_elements)
    }

    pub fn degree(&self, i: NodeIdx) -> GraphResult<usize> {
        Ok(self.checked_node(i)?.degree())
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            node_count: self.nodes.len(),
            element_count: self.elements.len(),
            max_degree: self.nodes.iter().map(Node::degree).max().unwrap_or(0),
            open_end_count: self.nodes.iter().filter(|n| n.degree() == 1).count(),
        }
    }
}
