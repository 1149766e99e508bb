//! Topology builder: external element list to dense node/element arrays.

use hn_core::{ElemIdx, ElementId, ExternalId, Idx};

use crate::element::{ExternalElement, FlowElementRef};
use crate::graph::{Element, Network, Node};
use crate::indexing::NodeIndexMap;

/// Build the dense topology for an ordered list of flow elements.
///
/// 1. every distinct inlet/outlet id becomes a node, ranked by id
/// 2. elements keep their input order and get their endpoints resolved
/// 3. each node collects its inlet and outlet incidences
///
/// Never fails: structural defects (open ends, self-loops, islands) are
/// reported by [`crate::check`]. Calling it again on the same input yields an
/// identical network.
pub fn setup<E: FlowElementRef>(elements: &[E]) -> Network {
    let index_map = NodeIndexMap::from_elements(elements);

    let mut indexed = Vec::with_capacity(elements.len());
    for (k, fe) in elements.iter().enumerate() {
        // Both ids were collected by the map above.
        let (Some(inlet), Some(outlet)) = (
            index_map.node_idx(fe.inlet_id()),
            index_map.node_idx(fe.outlet_id()),
        ) else {
            unreachable!("connection point ids are collected from the same element list");
        };
        indexed.push(Element {
            id: Idx::from_index(k),
            element_id: fe.element_id(),
            inlet,
            outlet,
        });
    }

    let mut nodes: Vec<Node> = (0..index_map.node_count())
        .map(|i| Node::new(Idx::from_index(i)))
        .collect();
    for elem in &indexed {
        let inlet = &mut nodes[elem.inlet.index()];
        inlet.inlet_elements.push(elem.id);
        inlet.all_elements.push(elem.id);

        let outlet = &mut nodes[elem.outlet.index()];
        outlet.outlet_elements.push(elem.id);
        outlet.all_elements.push(elem.id);
    }

    tracing::debug!(
        nodes = nodes.len(),
        flow_elements = indexed.len(),
        "hydraulic network topology set up"
    );

    Network {
        nodes,
        elements: indexed,
    }
}

/// Builder collecting flow elements before [`setup`].
///
/// Useful when the caller walks its own data model element by element, e.g.
/// after an edit in the network editor; `build` can be called repeatedly and
/// always rebuilds from scratch.
#[derive(Debug, Default, Clone)]
pub struct NetworkBuilder {
    elements: Vec<ExternalElement>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flow element and return the index it will get in the network.
    pub fn add_element(
        &mut self,
        element_id: ElementId,
        inlet: ExternalId,
        outlet: ExternalId,
    ) -> ElemIdx {
        let idx = Idx::from_index(self.elements.len());
        self.elements.push(ExternalElement::new(element_id, inlet, outlet));
        idx
    }

    /// Append every element of another data model.
    pub fn extend<E: FlowElementRef>(&mut self, elements: impl IntoIterator<Item = E>) {
        self.elements.extend(elements.into_iter().map(|fe| {
            ExternalElement::new(fe.element_id(), fe.inlet_id(), fe.outlet_id())
        }));
    }

    /// Drop all collected elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build the topology from the collected elements.
    pub fn build(&self) -> Network {
        setup(&self.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = NetworkBuilder::new();
        let e0 = builder.add_element(10, 100, 200);
        let e1 = builder.add_element(11, 200, 300);

        assert_eq!(e0.index(), 0);
        assert_eq!(e1.index(), 1);
        assert_eq!(builder.len(), 2);

        let net = builder.build();
        assert_eq!(net.node_count(), 3);
        assert_eq!(net.element_count(), 2);
    }

    #[test]
    fn node_records_split_by_side() {
        let net = setup(&[
            ExternalElement::new(10, 100, 200),
            ExternalElement::new(11, 200, 300),
        ]);

        let middle = &net.nodes()[1];
        assert_eq!(middle.inlet_elements, vec![Idx::from_index(1)]);
        assert_eq!(middle.outlet_elements, vec![Idx::from_index(0)]);
        assert_eq!(
            middle.all_elements,
            vec![Idx::from_index(0), Idx::from_index(1)]
        );
    }

    #[test]
    fn self_loop_counts_twice() {
        let net = setup(&[ExternalElement::new(7, 5, 5)]);
        assert_eq!(net.node_count(), 1);
        let node = &net.nodes()[0];
        assert_eq!(node.degree(), 2);
        assert_eq!(node.inlet_elements.len(), 1);
        assert_eq!(node.outlet_elements.len(), 1);
        assert!(net.elements()[0].is_self_loop());
    }

    #[test]
    fn rebuild_after_clear() {
        let mut builder = NetworkBuilder::new();
        builder.add_element(1, 1, 2);
        let first = builder.build();
        assert_eq!(first, builder.build());

        builder.clear();
        assert!(builder.is_empty());
        builder.add_element(2, 3, 4);
        builder.add_element(3, 4, 5);
        let second = builder.build();
        assert_eq!(second.element_count(), 2);
        assert_eq!(second.node_count(), 3);
    }

    #[test]
    fn extend_from_tuples() {
        let mut builder = NetworkBuilder::new();
        let tuples: [(u32, u32, u32); 2] = [(1, 10, 20), (2, 20, 10)];
        builder.extend(tuples.map(ExternalElement::from));
        let net = builder.build();
        assert_eq!(net.element_id(Idx::from_index(1)).unwrap(), 2);
    }
}
