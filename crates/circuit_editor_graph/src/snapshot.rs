// SPDX-License-Identifier: MIT OR Apache-2.0
//! Read-only snapshots handed to renderers.

use crate::element::{Element, ElementId, ElementType, PortName, VisualState};
use crate::geometry::Point;
use crate::wire::WireId;
use serde::Serialize;

/// Drawable view of one element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    /// Element handle
    pub id: ElementId,
    /// Element kind
    pub element_type: ElementType,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// Visual state
    pub visual_state: VisualState,
}

impl From<&Element> for ElementSnapshot {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id,
            element_type: element.element_type,
            x: element.position.x,
            y: element.position.y,
            width: element.size[0],
            height: element.size[1],
            visual_state: element.visual_state,
        }
    }
}

/// Drawable view of one wire, resolved to pixel endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireSnapshot {
    /// Wire handle
    pub id: WireId,
    /// Attachment point of the first endpoint
    pub from: Point,
    /// Attachment point of the second endpoint
    pub to: Point,
    /// Signal state, reserved for simulation
    pub active: bool,
}

impl WireSnapshot {
    /// Orthogonal path: horizontal to the midpoint column, vertical, horizontal again
    pub fn route(&self) -> [Point; 4] {
        let mid_x = (self.from.x + self.to.x) / 2.0;
        [
            self.from,
            Point::new(mid_x, self.from.y),
            Point::new(mid_x, self.to.y),
            self.to,
        ]
    }
}

/// Port marker shown while connect mode is active
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortOverlay {
    /// Owning element
    pub element: ElementId,
    /// Port
    pub port: PortName,
    /// Attachment point
    pub point: Point,
    /// Whether a wire is attached; occupied ports show a "remove" marker
    pub occupied: bool,
}

/// Something that can draw the editor's snapshots
pub trait Renderable {
    /// Draw wires and elements
    fn draw(&mut self, elements: &[ElementSnapshot], wires: &[WireSnapshot]);

    /// Draw connect-mode port markers on top of everything else
    fn draw_overlays(&mut self, _overlays: &[PortOverlay]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_is_orthogonal() {
        let wire = WireSnapshot {
            id: WireId::new(0),
            from: Point::new(90.0, 115.0),
            to: Point::new(250.0, 140.0),
            active: false,
        };
        let route = wire.route();
        assert_eq!(route[1], Point::new(170.0, 115.0));
        assert_eq!(route[2], Point::new(170.0, 140.0));
        for pair in route.windows(2) {
            assert!(pair[0].x == pair[1].x || pair[0].y == pair[1].y);
        }
    }
}
