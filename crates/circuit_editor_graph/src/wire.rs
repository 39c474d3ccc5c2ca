// SPDX-License-Identifier: MIT OR Apache-2.0
//! Wire (edge) definitions and the slot-allocated wire store.

use crate::element::{ElementId, PortName};
use crate::error::{GraphError, Result};
use crate::slots::SlotArena;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a wire slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WireId(usize);

impl WireId {
    /// Create a handle from a raw slot index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw slot index
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One side of a wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// Element the wire attaches to
    pub element: ElementId,
    /// Port on that element
    pub port: PortName,
}

impl Endpoint {
    /// Create a new endpoint
    pub const fn new(element: ElementId, port: PortName) -> Self {
        Self { element, port }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.element, self.port)
    }
}

/// A wire between two ports
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    /// Slot handle
    pub id: WireId,
    /// Both ends, in the order they were connected
    pub endpoints: [Endpoint; 2],
    /// Signal state, reserved for simulation
    pub active: bool,
}

impl Wire {
    /// Index (0 or 1) of `endpoint` within this wire
    pub fn endpoint_index(&self, endpoint: Endpoint) -> Option<usize> {
        self.endpoints.iter().position(|e| *e == endpoint)
    }

    /// The end opposite `endpoint`, resolved by index so self-loops stay unambiguous
    pub fn opposite(&self, endpoint: Endpoint) -> Option<Endpoint> {
        self.endpoint_index(endpoint).map(|i| self.endpoints[1 - i])
    }

    /// Check if this wire touches a specific element
    pub fn involves_element(&self, element: ElementId) -> bool {
        self.endpoints.iter().any(|e| e.element == element)
    }
}

/// Slot-allocated collection of wires
#[derive(Debug, Clone, Default)]
pub struct WireStore {
    slots: SlotArena<Wire>,
}

impl WireStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a wire in the lowest free slot.
    ///
    /// Does not touch element ports; [`Circuit::connect`](crate::Circuit::connect)
    /// maintains the back-references.
    pub fn create(&mut self, from: Endpoint, to: Endpoint) -> WireId {
        let index = self.slots.insert(|index| Wire {
            id: WireId::new(index),
            endpoints: [from, to],
            active: false,
        });
        WireId::new(index)
    }

    /// Id the next [`create`](Self::create) will return
    pub fn next_id(&self) -> WireId {
        WireId::new(self.slots.next_index())
    }

    /// Get a wire by ID
    pub fn get(&self, id: WireId) -> Result<&Wire> {
        self.slots.get(id.index()).ok_or(GraphError::WireNotFound(id))
    }

    /// Free a wire's slot
    pub fn remove(&mut self, id: WireId) -> Option<Wire> {
        self.slots.remove(id.index())
    }

    /// Live wires in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = &Wire> {
        self.slots.iter().map(|(_, wire)| wire)
    }

    /// Number of live wires
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end(element: usize, port: PortName) -> Endpoint {
        Endpoint::new(ElementId::new(element), port)
    }

    #[test]
    fn test_opposite_by_index() {
        let wire = Wire {
            id: WireId::new(0),
            endpoints: [end(4, PortName::O), end(4, PortName::I1)],
            active: false,
        };
        assert_eq!(wire.opposite(end(4, PortName::O)), Some(end(4, PortName::I1)));
        assert_eq!(wire.opposite(end(4, PortName::I1)), Some(end(4, PortName::O)));
        assert_eq!(wire.opposite(end(4, PortName::I2)), None);
        assert!(wire.involves_element(ElementId::new(4)));
    }

    #[test]
    fn test_wire_slot_reuse() {
        let mut store = WireStore::new();
        let a = store.create(end(0, PortName::O), end(1, PortName::I1));
        let b = store.create(end(2, PortName::O), end(1, PortName::I2));
        assert_eq!((a, b), (WireId::new(0), WireId::new(1)));
        assert!(store.remove(a).is_some());
        assert_eq!(store.next_id(), a);
        assert_eq!(store.get(a).unwrap_err(), GraphError::WireNotFound(a));
        assert_eq!(store.create(end(3, PortName::O), end(1, PortName::I1)), a);
        assert_eq!(store.len(), 2);
    }
}
