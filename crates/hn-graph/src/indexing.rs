//! External id to dense node index mapping.
//!
//! Only lives for the duration of a single `setup` call.

use std::collections::{BTreeMap, BTreeSet};

use hn_core::{ExternalId, Idx, NodeIdx};

use crate::element::FlowElementRef;

/// Rank of every distinct connection point id, in strictly increasing id order.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeIndexMap {
    ranks: BTreeMap<ExternalId, NodeIdx>,
}

impl NodeIndexMap {
    /// Collect every inlet and outlet id and rank them.
    pub(crate) fn from_elements<E: FlowElementRef>(elements: &[E]) -> Self {
        let distinct: BTreeSet<ExternalId> = elements
            .iter()
            .flat_map(|e| [e.inlet_id(), e.outlet_id()])
            .collect();

        let ranks = distinct
            .into_iter()
            .enumerate()
            .map(|(rank, id)| (id, Idx::from_index(rank)))
            .collect();

        Self { ranks }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.ranks.len()
    }

    pub(crate) fn node_idx(&self, id: ExternalId) -> Option<NodeIdx> {
        self.ranks.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ExternalElement;

    #[test]
    fn ranks_follow_sorted_ids() {
        let elements = [
            ExternalElement::new(1, 300, 100),
            ExternalElement::new(2, 100, 200),
        ];
        let map = NodeIndexMap::from_elements(&elements);

        assert_eq!(map.node_count(), 3);
        assert_eq!(map.node_idx(100).unwrap().index(), 0);
        assert_eq!(map.node_idx(200).unwrap().index(), 1);
        assert_eq!(map.node_idx(300).unwrap().index(), 2);
    }

    #[test]
    fn unknown_id_is_none() {
        let map = NodeIndexMap::from_elements(&[ExternalElement::new(1, 5, 6)]);
        assert!(map.node_idx(7).is_none());
    }

    #[test]
    fn shared_ids_collapse() {
        let elements = [
            ExternalElement::new(1, 9, 9),
            ExternalElement::new(2, 9, 4),
        ];
        let map = NodeIndexMap::from_elements(&elements);
        assert_eq!(map.node_count(), 2);
        assert_eq!(map.node_idx(4).unwrap().index(), 0);
    }

    #[test]
    fn empty_input() {
        let map = NodeIndexMap::from_elements::<ExternalElement>(&[]);
        assert_eq!(map.node_count(), 0);
    }
}
