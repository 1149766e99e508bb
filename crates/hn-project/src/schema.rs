//! Network description file schema.

use hn_core::{ElementId, ExternalId};
use hn_graph::{CheckOptions, Element, FlowElementRef, Network};
use serde::{Deserialize, Serialize};

/// Latest supported schema version.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkFile {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "is_default_check")]
    pub check: CheckOptions,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
}

fn is_default_check(options: &CheckOptions) -> bool {
    *options == CheckOptions::default()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementDef {
    pub id: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: ElementKind,
    pub inlet: ExternalId,
    pub outlet: ExternalId,
}

/// Component type of a flow element. Opaque to the topology; used for labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    #[default]
    Pipe,
    Pump,
    Valve,
    HeatExchanger,
    Other,
}

impl ElementKind {
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Pipe => "pipe",
            ElementKind::Pump => "pump",
            ElementKind::Valve => "valve",
            ElementKind::HeatExchanger => "heat exchanger",
            ElementKind::Other => "other",
        }
    }
}

impl FlowElementRef for ElementDef {
    fn element_id(&self) -> ElementId {
        self.id
    }

    fn inlet_id(&self) -> ExternalId {
        self.inlet
    }

    fn outlet_id(&self) -> ExternalId {
        self.outlet
    }
}

impl NetworkFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            check: CheckOptions::default(),
            elements: Vec::new(),
        }
    }

    /// Build the topology of the described network.
    pub fn network(&self) -> Network {
        hn_graph::setup(&self.elements)
    }

    /// Graphviz rendering of `network` (built from this file) with pumps highlighted.
    pub fn to_dot(&self, network: &Network) -> String {
        hn_graph::dot::to_dot_with(network, |elem: &Element| {
            self.elements
                .get(elem.id.index())
                .filter(|def| def.kind == ElementKind::Pump)
                .map(|def| def.kind.label().to_string())
        })
    }
}
