//! Connectivity validation of a built network.
//!
//! Three checks run in sequence and accumulate into one report:
//! open ends, invalid cyclic connections, and a single connected component.
//! The network is only read.

use std::collections::HashSet;

use hn_core::{ElemIdx, Idx, NodeIdx};
use serde::{Deserialize, Serialize};

use crate::diagnostic::{ConnectivityReport, Diagnostic};
use crate::disjoint::DisjointSets;
use crate::graph::Network;
use crate::pattern::SparseMatrixPattern;

/// How disjoint components are computed. Both give identical diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentAlgorithm {
    /// Disjoint-set forest over element endpoints, `O(M log N)`.
    #[default]
    UnionFind,
    /// Transitive closure of the sparse node connectivity pattern, `O(N^3)`.
    TransitiveClosure,
}

/// Options for [`check_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    pub algorithm: ComponentAlgorithm,
}

/// Check a network with default options.
pub fn check(network: &Network) -> ConnectivityReport {
    check_with(network, &CheckOptions::default())
}

/// Check a network for open ends, self-loops and disjoint components.
///
/// Never fails for bad user data; every defect found is reported.
///
/// # Panics
///
/// Panics if a disjoint component has no incident elements, which the
/// topology builder cannot produce.
pub fn check_with(network: &Network, options: &CheckOptions) -> ConnectivityReport {
    let mut report = ConnectivityReport::new();

    check_open_ends(network, &mut report);
    check_cyclic_connections(network, &mut report);
    check_connected(network, options.algorithm, &mut report);

    if report.is_valid() {
        tracing::debug!(
            nodes = network.node_count(),
            flow_elements = network.element_count(),
            "hydraulic network is connected"
        );
    } else {
        tracing::warn!(
            diagnostics = report.len(),
            "hydraulic network has structural defects"
        );
    }
    report
}

fn check_open_ends(network: &Network, report: &mut ConnectivityReport) {
    for node in network.nodes() {
        if let [only] = node.all_elements.as_slice() {
            report.push(Diagnostic::OpenEnd {
                element_id: network.elements()[only.index()].element_id,
            });
        }
    }
}

fn check_cyclic_connections(network: &Network, report: &mut ConnectivityReport) {
    for node in network.nodes() {
        let mut seen: HashSet<ElemIdx> = HashSet::with_capacity(node.degree());
        for &k in &node.all_elements {
            if !seen.insert(k) {
                report.push(Diagnostic::InvalidCyclicConnection {
                    element_id: network.elements()[k.index()].element_id,
                });
            }
        }
    }
}

fn check_connected(
    network: &Network,
    algorithm: ComponentAlgorithm,
    report: &mut ConnectivityReport,
) {
    let components = connected_components(network, algorithm);
    tracing::debug!(
        components = components.len(),
        ?algorithm,
        "computed connected components"
    );

    let incident: Vec<Vec<ElemIdx>> = components
        .iter()
        .map(|component| {
            let mut incident: Vec<ElemIdx> = component
                .iter()
                .flat_map(|&i| network.nodes()[i.index()].all_elements.iter().copied())
                .collect();
            incident.sort_unstable();
            incident.dedup();
            assert!(
                !incident.is_empty(),
                "disjoint component without flow elements: nodes {component:?}"
            );
            incident
        })
        .collect();

    // The component holding node 0 is the network; every other one is reported.
    for elements in incident.iter().skip(1) {
        report.push(Diagnostic::DisconnectedComponent {
            element_ids: elements
                .iter()
                .map(|k| network.elements()[k.index()].element_id)
                .collect(),
        });
    }
}

/// Connected components of the node set, ignoring flow direction.
///
/// Each component is sorted ascending; components are ordered by their
/// smallest node. An empty network has no components.
pub fn connected_components(
    network: &Network,
    algorithm: ComponentAlgorithm,
) -> Vec<Vec<NodeIdx>> {
    let groups = match algorithm {
        ComponentAlgorithm::UnionFind => union_find_groups(network),
        ComponentAlgorithm::TransitiveClosure => closure_groups(network),
    };
    groups
        .into_iter()
        .map(|g| g.into_iter().map(Idx::from_index).collect())
        .collect()
}

fn union_find_groups(network: &Network) -> Vec<Vec<usize>> {
    let mut sets = DisjointSets::new(network.node_count());
    for elem in network.elements() {
        sets.union(elem.inlet.index(), elem.outlet.index());
    }
    sets.groups()
}

/// Symmetric connectivity pattern of all element endpoints.
pub fn connectivity_pattern(network: &Network) -> SparseMatrixPattern {
    let mut pattern = SparseMatrixPattern::new(network.node_count());
    for elem in network.elements() {
        pattern.set_symmetric(elem.inlet.index(), elem.outlet.index());
    }
    pattern
}

fn closure_groups(network: &Network) -> Vec<Vec<usize>> {
    let n = network.node_count();
    let mut pattern = connectivity_pattern(network);
    pattern.transitive_closure();

    let mut assigned = vec![false; n];
    let mut groups = Vec::new();
    for i in 0..n {
        if assigned[i] {
            continue;
        }
        // A node without elements reaches nothing; it forms its own group.
        let reach = match pattern.indexes_per_row(i) {
            [] => vec![i],
            row => row.to_vec(),
        };
        for &j in &reach {
            assigned[j] = true;
        }
        groups.push(reach);
    }
    groups
}
