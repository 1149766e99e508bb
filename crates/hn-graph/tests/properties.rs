//! Property tests for the topology builder and the connectivity check.

use std::collections::BTreeSet;

use hn_graph::{
    CheckOptions, ComponentAlgorithm, DiagnosticKind, ExternalElement, check, check_with,
    connected_components, setup,
};
use proptest::prelude::*;

fn element_list() -> impl Strategy<Value = Vec<ExternalElement>> {
    prop::collection::vec((0_u32..1000, 0_u32..24, 0_u32..24), 0..40).prop_map(|triples| {
        triples
            .into_iter()
            .map(ExternalElement::from)
            .collect()
    })
}

proptest! {
    #[test]
    fn node_count_is_distinct_ids(input in element_list()) {
        let network = setup(&input);
        let distinct: BTreeSet<u32> = input.iter().flat_map(|e| [e.inlet, e.outlet]).collect();
        prop_assert_eq!(network.node_count(), distinct.len());
    }

    #[test]
    fn element_order_preserved(input in element_list()) {
        let network = setup(&input);
        prop_assert_eq!(network.element_count(), input.len());
        for (elem, fe) in network.elements().iter().zip(&input) {
            prop_assert_eq!(elem.element_id, fe.id);
        }
    }

    #[test]
    fn endpoints_in_range(input in element_list()) {
        let network = setup(&input);
        for elem in network.elements() {
            prop_assert!(elem.inlet.index() < network.node_count());
            prop_assert!(elem.outlet.index() < network.node_count());
        }
    }

    #[test]
    fn degree_splits_by_side(input in element_list()) {
        let network = setup(&input);
        for node in network.nodes() {
            prop_assert!(node.degree() >= 1);
            prop_assert_eq!(
                node.degree(),
                node.inlet_elements.len() + node.outlet_elements.len()
            );
        }
    }

    #[test]
    fn setup_is_idempotent(input in element_list()) {
        prop_assert_eq!(setup(&input), setup(&input));
    }

    #[test]
    fn node_rank_is_monotone(input in element_list()) {
        let network = setup(&input);
        for (a, fa) in network.elements().iter().zip(&input) {
            for (b, fb) in network.elements().iter().zip(&input) {
                prop_assert_eq!(fa.inlet < fb.outlet, a.inlet < b.outlet);
                prop_assert_eq!(fa.inlet == fb.outlet, a.inlet == b.outlet);
            }
        }
    }

    #[test]
    fn algorithms_give_same_report(input in element_list()) {
        let network = setup(&input);
        let closure = CheckOptions { algorithm: ComponentAlgorithm::TransitiveClosure };
        prop_assert_eq!(check(&network), check_with(&network, &closure));
    }

    #[test]
    fn one_report_per_extra_component(input in element_list()) {
        let network = setup(&input);
        let components = connected_components(&network, ComponentAlgorithm::UnionFind);
        let report = check(&network);
        prop_assert_eq!(
            report.count(DiagnosticKind::DisconnectedComponent),
            components.len().saturating_sub(1)
        );
    }

    #[test]
    fn open_ends_match_degree_one_nodes(input in element_list()) {
        let network = setup(&input);
        prop_assert_eq!(
            check(&network).count(DiagnosticKind::OpenEnd),
            network.summary().open_end_count
        );
    }

    #[test]
    fn cyclic_reports_match_self_loops(input in element_list()) {
        let network = setup(&input);
        let loops = input.iter().filter(|e| e.inlet == e.outlet).count();
        prop_assert_eq!(
            check(&network).count(DiagnosticKind::InvalidCyclicConnection),
            loops
        );
    }
}
