// SPDX-License-Identifier: MIT OR Apache-2.0
//! Logic elements, their fixed ports, and the slot-allocated element store.

use crate::config::ElementSizes;
use crate::error::{EndpointFault, GraphError, Result};
use crate::geometry::{Point, Rect};
use crate::slots::SlotArena;
use crate::wire::{Endpoint, WireId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Handle to an element slot.
///
/// Indices are reused after removal, so a handle is only meaningful while
/// the element it was issued for is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(usize);

impl ElementId {
    /// Create a handle from a raw slot index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw slot index
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named attachment point on an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortName {
    /// First input
    I1,
    /// Second input
    I2,
    /// Output
    O,
}

impl PortName {
    /// Canonical short name (`i1`, `i2`, `o`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I1 => "i1",
            Self::I2 => "i2",
            Self::O => "o",
        }
    }

    /// Whether this is an input port (sits on the left edge)
    pub fn is_input(self) -> bool {
        !matches!(self, Self::O)
    }

    fn slot(self) -> usize {
        match self {
            Self::I1 => 0,
            Self::I2 => 1,
            Self::O => 2,
        }
    }
}

impl fmt::Display for PortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a port name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown port name: {0:?}")]
pub struct ParsePortError(pub String);

impl FromStr for PortName {
    type Err = ParsePortError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "i1" => Ok(Self::I1),
            "i2" => Ok(Self::I2),
            "o" => Ok(Self::O),
            other => Err(ParsePortError(other.to_string())),
        }
    }
}

/// Kind of logic element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    /// Signal source with a single output
    Input,
    /// Inverter
    Not,
    /// Two-input conjunction
    And,
    /// Two-input disjunction
    Or,
}

impl ElementType {
    /// Every element type, in toolbar order
    pub const ALL: [ElementType; 4] = [Self::Input, Self::And, Self::Or, Self::Not];

    /// Ports of this type, inputs first
    pub fn ports(self) -> &'static [PortName] {
        match self {
            Self::Input => &[PortName::O],
            Self::Not => &[PortName::I1, PortName::O],
            Self::And | Self::Or => &[PortName::I1, PortName::I2, PortName::O],
        }
    }

    /// Whether `port` belongs to this type
    pub fn has_port(self, port: PortName) -> bool {
        self.ports().contains(&port)
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Input => "IN",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// How an element should currently be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisualState {
    /// Idle
    #[default]
    Default,
    /// Carrying an active signal (reserved for simulation)
    Triggered,
    /// Currently selected by the user
    Selected,
}

/// A placed logic element
#[derive(Debug, Clone)]
pub struct Element {
    /// Slot handle
    pub id: ElementId,
    /// Element kind, fixed for the element's lifetime
    pub element_type: ElementType,
    /// Top-left corner
    pub position: Point,
    /// Width and height
    pub size: [f32; 2],
    /// Visual state
    pub visual_state: VisualState,
    /// Wire attached to each port slot; slots outside the type's arity stay `None`
    wires: [Option<WireId>; 3],
}

impl Element {
    fn new(id: ElementId, element_type: ElementType, position: Point, size: [f32; 2]) -> Self {
        Self {
            id,
            element_type,
            position,
            size,
            visual_state: VisualState::Default,
            wires: [None; 3],
        }
    }

    /// Bounding box
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Whether this element's type defines `port`
    pub fn has_port(&self, port: PortName) -> bool {
        self.element_type.has_port(port)
    }

    /// Wire attached to `port`, `None` if unconnected or not defined for this type
    pub fn wire_at(&self, port: PortName) -> Option<WireId> {
        if self.has_port(port) {
            self.wires[port.slot()]
        } else {
            None
        }
    }

    /// Every port of this element with its attached wire
    pub fn ports(&self) -> impl Iterator<Item = (PortName, Option<WireId>)> + '_ {
        self.element_type
            .ports()
            .iter()
            .map(|&port| (port, self.wires[port.slot()]))
    }

    /// Whether any port holds a wire
    pub fn is_connected(&self) -> bool {
        self.ports().any(|(_, wire)| wire.is_some())
    }

    pub(crate) fn set_wire(&mut self, port: PortName, wire: Option<WireId>) {
        debug_assert!(self.has_port(port), "{port} is not a port of {:?}", self.element_type);
        if self.has_port(port) {
            self.wires[port.slot()] = wire;
        }
    }

    /// Where wires attach to `port`, `None` if the type lacks it
    pub fn connection_point(&self, port: PortName) -> Option<Point> {
        if !self.has_port(port) {
            return None;
        }
        let [width, height] = self.size;
        let x = if port.is_input() {
            self.position.x
        } else {
            self.position.x + width
        };
        let y = match port {
            PortName::I1 => self.position.y + height / 4.0,
            PortName::I2 => self.position.y + height * 3.0 / 4.0,
            PortName::O => self.position.y + height / 2.0,
        };
        Some(Point::new(x, y))
    }
}

/// Slot-allocated collection of elements
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    slots: SlotArena<Element>,
    sizes: ElementSizes,
}

impl ElementStore {
    /// Create an empty store with default element sizes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given element sizes
    pub fn with_sizes(sizes: ElementSizes) -> Self {
        Self {
            slots: SlotArena::new(),
            sizes,
        }
    }

    /// Place a new element with every port unconnected
    pub fn create(&mut self, element_type: ElementType, x: f32, y: f32) -> ElementId {
        let size = self.sizes.for_type(element_type);
        let index = self.slots.insert(|index| {
            Element::new(ElementId::new(index), element_type, Point::new(x, y), size)
        });
        ElementId::new(index)
    }

    /// Get an element by ID
    pub fn get(&self, id: ElementId) -> Result<&Element> {
        self.slots
            .get(id.index())
            .ok_or(GraphError::ElementNotFound(id))
    }

    /// Get a mutable element by ID
    pub fn get_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.slots
            .get_mut(id.index())
            .ok_or(GraphError::ElementNotFound(id))
    }

    /// Whether `id` names a live element
    pub fn contains(&self, id: ElementId) -> bool {
        self.slots.contains(id.index())
    }

    /// Free an element's slot.
    ///
    /// The element must have no wires attached; [`Circuit::remove_element`]
    /// detaches them first.
    ///
    /// [`Circuit::remove_element`]: crate::Circuit::remove_element
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        debug_assert!(
            self.slots.get(id.index()).map_or(true, |e| !e.is_connected()),
            "element {id} removed while still wired"
        );
        self.slots.remove(id.index())
    }

    /// Topmost-by-slot element whose bounding box contains `point`
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.iter()
            .find(|element| element.bounds().contains(point))
            .map(|element| element.id)
    }

    /// Where wires attach to `port` of element `id`
    pub fn connection_point(&self, id: ElementId, port: PortName) -> Result<Point> {
        let element = self.get(id)?;
        element
            .connection_point(port)
            .ok_or(GraphError::InvalidEndpoint {
                endpoint: Endpoint::new(id, port),
                fault: EndpointFault::PortNotOnType(element.element_type),
            })
    }

    /// Live elements in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.slots.iter().map(|(_, element)| element)
    }

    /// Number of live elements
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

    #[test]
    fn test_ports_match_arity() {
        assert_eq!(ElementType::Input.ports(), &[PortName::O]);
        assert_eq!(ElementType::Not.ports(), &[PortName::I1, PortName::O]);
        assert_eq!(ElementType::Or.ports().len(), 3);

        let mut store = ElementStore::new();
        let id = store.create(ElementType::Not, 0.0, 0.0);
        let element = store.get(id).unwrap();
        let ports: Vec<_> = element.ports().collect();
        assert_eq!(ports, vec![(PortName::I1, None), (PortName::O, None)]);
        assert!(!element.has_port(PortName::I2));
        assert_eq!(element.visual_state, VisualState::Default);
    }

    #[test]
    fn test_slot_reuse() {
        let mut store = ElementStore::new();
        assert_eq!(store.create(ElementType::And, 0.0, 0.0), ElementId::new(0));
        assert_eq!(store.create(ElementType::And, 0.0, 0.0), ElementId::new(1));
        store.remove(ElementId::new(0));
        assert_eq!(store.create(ElementType::Or, 5.0, 5.0), ElementId::new(0));
        assert_eq!(store.get(ElementId::new(0)).unwrap().element_type, ElementType::Or);
    }

    #[test]
    fn test_get_missing() {
        let store = ElementStore::new();
        assert_eq!(
            store.get(ElementId::new(3)).unwrap_err(),
            GraphError::ElementNotFound(ElementId::new(3))
        );
    }

    #[test]
    fn test_hit_test_tie_break() {
        let mut store = ElementStore::new();
        let first = store.create(ElementType::And, 0.0, 0.0);
        let second = store.create(ElementType::And, 40.0, 40.0);
        assert_eq!(store.hit_test(Point::new(60.0, 60.0)), Some(first));
        assert_eq!(store.hit_test(Point::new(100.0, 100.0)), Some(second));
        assert_eq!(store.hit_test(Point::new(200.0, 5.0)), None);
        // Edge of the box is inside
        assert_eq!(store.hit_test(Point::new(80.0, 0.0)), Some(first));
    }

    #[test]
    fn test_connection_points() {
        let mut store = ElementStore::new();
        let input = store.create(ElementType::Input, 60.0, 100.0);
        let gate = store.create(ElementType::And, 250.0, 120.0);

        assert_eq!(store.connection_point(input, PortName::O).unwrap(), Point::new(90.0, 115.0));
        assert_eq!(store.connection_point(gate, PortName::I1).unwrap(), Point::new(250.0, 140.0));
        assert_eq!(store.connection_point(gate, PortName::I2).unwrap(), Point::new(250.0, 180.0));
        assert_eq!(store.connection_point(gate, PortName::O).unwrap(), Point::new(330.0, 160.0));

        let err = store.connection_point(input, PortName::I1).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidEndpoint {
                fault: EndpointFault::PortNotOnType(ElementType::Input),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_port_name() {
        assert_eq!("i2".parse::<PortName>().unwrap(), PortName::I2);
        assert_eq!("o".parse::<PortName>().unwrap(), PortName::O);
        assert!("out".parse::<PortName>().is_err());
    }
}
