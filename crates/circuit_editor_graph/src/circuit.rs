// SPDX-License-Identifier: MIT OR Apache-2.0
//! Circuit: elements and wires kept mutually consistent.

use crate::config::EditorConfig;
use crate::element::{Element, ElementId, ElementStore, ElementType, PortName, VisualState};
use crate::error::{EndpointFault, GraphError, Result};
use crate::geometry::Point;
use crate::snapshot::{ElementSnapshot, WireSnapshot};
use crate::wire::{Endpoint, Wire, WireId, WireStore};

/// A combinational circuit.
///
/// Every live wire has both endpoint elements alive, and each of those
/// ports points back at the wire. All mutation of cross references goes
/// through this type.
#[derive(Debug, Clone)]
pub struct Circuit {
    elements: ElementStore,
    wires: WireStore,
    spawn_point: Point,
}

impl Circuit {
    /// Create an empty circuit with default geometry
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    /// Create an empty circuit using the configured sizes and spawn point
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            elements: ElementStore::with_sizes(config.sizes),
            wires: WireStore::new(),
            spawn_point: config.spawn_point,
        }
    }

    /// Two inputs feeding an AND gate
    pub fn sample() -> Self {
        let mut circuit = Self::new();
        let a = circuit.add_element(ElementType::Input, 60.0, 100.0);
        let b = circuit.add_element(ElementType::Input, 60.0, 200.0);
        let and = circuit.add_element(ElementType::And, 250.0, 120.0);
        let first = circuit.connect(a, PortName::O, and, PortName::I1);
        let second = circuit.connect(b, PortName::O, and, PortName::I2);
        debug_assert!(
            first.is_ok() && second.is_ok(),
            "sample wiring failed: {first:?}, {second:?}"
        );
        circuit
    }

    /// Add an element at `(x, y)`
    pub fn add_element(&mut self, element_type: ElementType, x: f32, y: f32) -> ElementId {
        let id = self.elements.create(element_type, x, y);
        tracing::debug!("Added {} element {id} at ({x}, {y})", element_type.label());
        id
    }

    /// Add an element at the configured spawn point
    pub fn add_element_default(&mut self, element_type: ElementType) -> ElementId {
        let Point { x, y } = self.spawn_point;
        self.add_element(element_type, x, y)
    }

    /// Remove an element after detaching every wire on its ports.
    ///
    /// A vacant id is a no-op.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let element_type = self.elements.get(id).ok()?.element_type;
        for &port in element_type.ports() {
            self.disconnect(id, port);
        }
        let removed = self.elements.remove(id);
        tracing::debug!("Removed element {id}");
        removed
    }

    /// Get an element by ID
    pub fn element(&self, id: ElementId) -> Result<&Element> {
        self.elements.get(id)
    }

    /// All live elements in slot order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Read access to the element store
    pub fn element_store(&self) -> &ElementStore {
        &self.elements
    }

    /// Number of live elements
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Move an element so its top-left corner sits at `position`
    pub fn move_element(&mut self, id: ElementId, position: Point) -> Result<()> {
        self.elements.get_mut(id)?.position = position;
        Ok(())
    }

    /// Change how an element is drawn
    pub fn set_visual_state(&mut self, id: ElementId, state: VisualState) -> Result<()> {
        self.elements.get_mut(id)?.visual_state = state;
        Ok(())
    }

    /// Topmost-by-slot element under `point`
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.elements.hit_test(point)
    }

    /// Where wires attach to `endpoint`
    pub fn connection_point(&self, endpoint: Endpoint) -> Result<Point> {
        self.elements.connection_point(endpoint.element, endpoint.port)
    }

    /// Wire currently attached to `endpoint`
    pub fn wire_at(&self, endpoint: Endpoint) -> Option<WireId> {
        self.elements.get(endpoint.element).ok()?.wire_at(endpoint.port)
    }

    /// Connect two unconnected ports on different elements.
    ///
    /// Nothing changes unless the whole connection succeeds.
    pub fn connect(
        &mut self,
        id1: ElementId,
        port1: PortName,
        id2: ElementId,
        port2: PortName,
    ) -> Result<WireId> {
        let from = Endpoint::new(id1, port1);
        let to = Endpoint::new(id2, port2);

        self.check_endpoint(from)?;
        self.check_endpoint(to)?;
        if id1 == id2 {
            return Err(GraphError::InvalidEndpoint {
                endpoint: to,
                fault: EndpointFault::SelfLoop,
            });
        }
        for endpoint in [from, to] {
            if let Some(wire) = self.wire_at(endpoint) {
                return Err(GraphError::PortOccupied { endpoint, wire });
            }
        }

        let wire = self.wires.create(from, to);
        for endpoint in [from, to] {
            self.elements.get_mut(endpoint.element)?.set_wire(endpoint.port, Some(wire));
        }
        tracing::debug!("Connected {from} -> {to} with wire {wire}");
        Ok(wire)
    }

    /// Validate that `endpoint` names a live element and a port of its type
    fn check_endpoint(&self, endpoint: Endpoint) -> Result<()> {
        let element = self
            .elements
            .get(endpoint.element)
            .map_err(|_| GraphError::InvalidEndpoint {
                endpoint,
                fault: EndpointFault::VacantElement,
            })?;
        if element.has_port(endpoint.port) {
            Ok(())
        } else {
            Err(GraphError::InvalidEndpoint {
                endpoint,
                fault: EndpointFault::PortNotOnType(element.element_type),
            })
        }
    }

    /// Remove the wire on `(id, port)` and clear both of its ends.
    ///
    /// Returns `None` without touching anything when the element is vacant,
    /// the port is unconnected or undefined, or the wire is already gone.
    pub fn disconnect(&mut self, id: ElementId, port: PortName) -> Option<Wire> {
        let here = Endpoint::new(id, port);
        let wire_id = self.wire_at(here)?;
        let Ok(wire) = self.wires.get(wire_id) else {
            // Stale reference, nothing to free
            return None;
        };
        let ends = wire.opposite(here).map_or(wire.endpoints, |there| [here, there]);

        for endpoint in ends {
            if let Ok(element) = self.elements.get_mut(endpoint.element) {
                if element.wire_at(endpoint.port) == Some(wire_id) {
                    element.set_wire(endpoint.port, None);
                }
            }
        }
        let removed = self.wires.remove(wire_id);
        tracing::debug!("Disconnected wire {wire_id} at {here}");
        removed
    }

    /// Get a wire by ID
    pub fn wire(&self, id: WireId) -> Result<&Wire> {
        self.wires.get(id)
    }

    /// All live wires in slot order
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.wires.iter()
    }

    /// Number of live wires
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Read-only view of every live element for a renderer
    pub fn element_snapshots(&self) -> Vec<ElementSnapshot> {
        self.elements.iter().map(ElementSnapshot::from).collect()
    }

    /// Every live wire resolved to its two attachment points
    pub fn wire_snapshots(&self) -> Vec<WireSnapshot> {
        self.wires
            .iter()
            .filter_map(|wire| {
                let [a, b] = wire.endpoints;
                Some(WireSnapshot {
                    id: wire.id,
                    from: self.connection_point(a).ok()?,
                    to: self.connection_point(b).ok()?,
                    active: wire.active,
                })
            })
            .collect()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}
