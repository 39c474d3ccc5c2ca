// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pointer and keyboard interaction state machine.
//!
//! In [`Mode::Navigate`] clicks select and drag element bodies. Holding the
//! modifier key switches to [`Mode::ConnectEdit`], where clicks target ports:
//! a click on a wired port removes its wire, and two clicks on free ports
//! connect them.

use crate::circuit::Circuit;
use crate::config::EditorConfig;
use crate::element::{ElementId, ElementType, VisualState};
use crate::error::GraphError;
use crate::geometry::Point;
use crate::snapshot::{PortOverlay, Renderable};
use crate::wire::{Endpoint, WireId};

/// Editor interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Select and drag elements
    #[default]
    Navigate,
    /// Add and remove wires by clicking ports
    ConnectEdit,
}

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Delete the selected element
    Delete,
    /// Held to enter connect mode
    Modifier,
}

/// Raw input forwarded by the shell, in editor-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed
    PointerDown(Point),
    /// Pointer moved
    PointerMove(Point),
    /// Primary button released
    PointerUp(Point),
    /// Key pressed
    KeyDown(Key),
    /// Key released
    KeyUp(Key),
    /// Toolbar/menu command to place a new element
    AddElement(ElementType),
}

/// What handling an event did
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No visible change
    Nothing,
    /// Interaction mode switched
    ModeChanged(Mode),
    /// Element selected
    Selected(ElementId),
    /// Selection cleared by clicking empty space
    SelectionCleared,
    /// Selected element dragged
    Moved(ElementId),
    /// Pointer released after dragging an element
    Dropped(ElementId),
    /// First port of a new wire captured
    WireStarted(Endpoint),
    /// Second port captured and the wire created
    Connected(WireId),
    /// Second port captured but the circuit refused the wire; the gesture is abandoned
    ConnectRejected(GraphError),
    /// Wire removed by clicking one of its ports
    Disconnected(WireId),
    /// Selected element deleted
    Removed(ElementId),
    /// Element added
    Added(ElementId),
}

/// Transient UI state driving edits of a [`Circuit`].
///
/// Holds no graph data of its own; every edit is a whole [`Circuit`] call.
#[derive(Debug, Clone)]
pub struct InteractionController {
    selected: Option<ElementId>,
    drag_offset: Point,
    pointer_down: bool,
    dragged: bool,
    mode: Mode,
    pending_wire: Option<Endpoint>,
    port_tolerance: f32,
}

impl InteractionController {
    /// Create a controller with default settings
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    /// Create a controller using the configured port tolerance
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            selected: None,
            drag_offset: Point::ZERO,
            pointer_down: false,
            dragged: false,
            mode: Mode::Navigate,
            pending_wire: None,
            port_tolerance: config.port_tolerance,
        }
    }

    /// Currently selected element
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// First endpoint of an in-progress two-click wire
    pub fn pending_wire(&self) -> Option<Endpoint> {
        self.pending_wire
    }

    /// Whether the primary button is held after grabbing an element
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Half-width of the square click window around each port
    pub fn port_tolerance(&self) -> f32 {
        self.port_tolerance
    }

    /// Grab point relative to the selected element's corner
    pub fn drag_offset(&self) -> Point {
        self.drag_offset
    }

    /// Apply one input event to `circuit`
    pub fn handle(&mut self, circuit: &mut Circuit, event: InputEvent) -> Action {
        match event {
            InputEvent::KeyDown(Key::Modifier) => self.set_mode(Mode::ConnectEdit),
            InputEvent::KeyUp(Key::Modifier) => self.set_mode(Mode::Navigate),
            InputEvent::KeyDown(Key::Delete) => self.delete_selected(circuit),
            InputEvent::KeyUp(Key::Delete) => Action::Nothing,
            InputEvent::PointerDown(point) => match self.mode {
                Mode::Navigate => self.press_body(circuit, point),
                Mode::ConnectEdit => self.press_port(circuit, point),
            },
            InputEvent::PointerMove(point) => self.drag(circuit, point),
            InputEvent::PointerUp(_) => self.release(circuit),
            InputEvent::AddElement(element_type) => {
                Action::Added(circuit.add_element_default(element_type))
            }
        }
    }

    fn set_mode(&mut self, mode: Mode) -> Action {
        // Entering or leaving connect mode abandons a half-built wire
        self.pending_wire = None;
        if self.mode == mode {
            return Action::Nothing;
        }
        self.mode = mode;
        tracing::debug!("Interaction mode: {mode:?}");
        Action::ModeChanged(mode)
    }

    fn press_body(&mut self, circuit: &mut Circuit, point: Point) -> Action {
        let Some(id) = circuit.hit_test(point) else {
            return self.clear_selection(circuit);
        };
        let Ok(element) = circuit.element(id) else {
            return Action::Nothing;
        };
        self.drag_offset = point - element.position;

        if let Some(previous) = self.selected.filter(|&previous| previous != id) {
            let _ = circuit.set_visual_state(previous, VisualState::Default);
        }
        self.selected = Some(id);
        let _ = circuit.set_visual_state(id, VisualState::Selected);
        self.pointer_down = true;
        Action::Selected(id)
    }

    fn clear_selection(&mut self, circuit: &mut Circuit) -> Action {
        match self.selected.take() {
            Some(previous) => {
                let _ = circuit.set_visual_state(previous, VisualState::Default);
                Action::SelectionCleared
            }
            None => Action::Nothing,
        }
    }

    fn press_port(&mut self, circuit: &mut Circuit, point: Point) -> Action {
        let Some(endpoint) = self.port_at(circuit, point) else {
            return Action::Nothing;
        };

        if circuit.wire_at(endpoint).is_some() {
            return match circuit.disconnect(endpoint.element, endpoint.port) {
                Some(wire) => Action::Disconnected(wire.id),
                None => Action::Nothing,
            };
        }

        let Some(first) = self.pending_wire.take() else {
            self.pending_wire = Some(endpoint);
            return Action::WireStarted(endpoint);
        };
        match circuit.connect(first.element, first.port, endpoint.element, endpoint.port) {
            Ok(wire) => Action::Connected(wire),
            Err(err) => {
                tracing::warn!("Abandoned wire {first} -> {endpoint}: {err}");
                Action::ConnectRejected(err)
            }
        }
    }

    fn drag(&mut self, circuit: &mut Circuit, point: Point) -> Action {
        if self.mode != Mode::Navigate || !self.pointer_down {
            return Action::Nothing;
        }
        let Some(id) = self.selected else {
            return Action::Nothing;
        };
        match circuit.move_element(id, point - self.drag_offset) {
            Ok(()) => {
                self.dragged = true;
                Action::Moved(id)
            }
            Err(_) => Action::Nothing,
        }
    }

    fn release(&mut self, circuit: &Circuit) -> Action {
        self.pointer_down = false;
        if !std::mem::take(&mut self.dragged) {
            return Action::Nothing;
        }
        let Some(element) = self.selected.and_then(|id| circuit.element(id).ok()) else {
            return Action::Nothing;
        };
        let Point { x, y } = element.position;
        tracing::debug!("Moved element {} to ({x}, {y})", element.id);
        Action::Dropped(element.id)
    }

    fn delete_selected(&mut self, circuit: &mut Circuit) -> Action {
        let Some(id) = self.selected.take() else {
            return Action::Nothing;
        };
        circuit.remove_element(id);
        // The slot may be reused by the next element
        if self.pending_wire.is_some_and(|pending| pending.element == id) {
            self.pending_wire = None;
        }
        Action::Removed(id)
    }

    /// First port, scanning elements in slot order, whose attachment point is within tolerance
    pub fn port_at(&self, circuit: &Circuit, point: Point) -> Option<Endpoint> {
        circuit.elements().find_map(|element| {
            element.ports().find_map(|(port, _)| {
                element
                    .connection_point(port)
                    .filter(|p| p.is_near(point, self.port_tolerance))
                    .map(|_| Endpoint::new(element.id, port))
            })
        })
    }

    /// Per-port markers for connect mode; empty in navigate mode
    pub fn port_overlays(&self, circuit: &Circuit) -> Vec<PortOverlay> {
        if self.mode != Mode::ConnectEdit {
            return Vec::new();
        }
        circuit
            .elements()
            .flat_map(|element| {
                element.ports().filter_map(move |(port, wire)| {
                    Some(PortOverlay {
                        element: element.id,
                        port,
                        point: element.connection_point(port)?,
                        occupied: wire.is_some(),
                    })
                })
            })
            .collect()
    }

    /// Hand fresh snapshots of `circuit` to `renderer`
    pub fn render(&self, circuit: &Circuit, renderer: &mut impl Renderable) {
        renderer.draw(&circuit.element_snapshots(), &circuit.wire_snapshots());
        let overlays = self.port_overlays(circuit);
        if !overlays.is_empty() {
            renderer.draw_overlays(&overlays);
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}
