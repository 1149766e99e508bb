//! Flow element descriptors consumed by the topology builder.

use hn_core::{ElementId, ExternalId};
use serde::{Deserialize, Serialize};

/// Read-only view of one flow element in the caller's data model.
///
/// Only the element id and the two connection point ids are consumed;
/// everything else the caller stores (diameters, pump curves, ...) stays opaque.
pub trait FlowElementRef {
    /// External element id, used only for diagnostics.
    fn element_id(&self) -> ElementId;
    /// External id of the inlet connection point.
    fn inlet_id(&self) -> ExternalId;
    /// External id of the outlet connection point.
    fn outlet_id(&self) -> ExternalId;
}

/// Minimal `(id, inlet, outlet)` descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalElement {
    pub id: ElementId,
    pub inlet: ExternalId,
    pub outlet: ExternalId,
}

impl ExternalElement {
    pub fn new(id: ElementId, inlet: ExternalId, outlet: ExternalId) -> Self {
        Self { id, inlet, outlet }
    }
}

impl FlowElementRef for ExternalElement {
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

impl<T: FlowElementRef + ?Sized> FlowElementRef for &T {
    fn element_id(&self) -> ElementId {
        (**self).element_id()
    }

    fn inlet_id(&self) -> ExternalId {
        (**self).inlet_id()
    }

    fn outlet_id(&self) -> ExternalId {
        (**self).outlet_id()
    }
}

impl From<(ElementId, ExternalId, ExternalId)> for ExternalElement {
    fn from((id, inlet, outlet): (ElementId, ExternalId, ExternalId)) -> Self {
        Self { id, inlet, outlet }
    }
}
