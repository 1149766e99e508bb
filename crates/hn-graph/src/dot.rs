//! Graphviz export of a network topology.

use std::fmt::Write;

use crate::graph::{Element, Network};

/// Render the network as a `digraph`, one `inlet -> outlet` edge per element.
///
/// Nodes are labelled with their 1-based index.
pub fn to_dot(network: &Network) -> String {
    to_dot_with(network, |_| None)
}

/// Like [`to_dot`], but edges for which `highlight` returns a label are drawn
/// emphasized with that label (used for pumps).
pub fn to_dot_with<F>(network: &Network, highlight: F) -> String
where
    F: Fn(&Element) -> Option<String>,
{
    let mut dot = String::from("digraph {\n");
    for elem in network.elements() {
        // Writing into a `String` cannot fail.
        let _ = write!(
            dot,
            "  {} -> {}",
            elem.inlet.index() + 1,
            elem.outlet.index() + 1
        );
        if let Some(label) = highlight(elem) {
            let _ = write!(
                dot,
                "[fontsize=7, label=\"{}\", weight=200, color=red]",
                label.replace('"', "\\\"")
            );
        }
        dot.push_str(";\n");
    }
    dot.push_str("}\n");
    dot
}
