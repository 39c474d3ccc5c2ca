// SPDX-License-Identifier: MIT OR Apache-2.0
//! Colour table mapping element state to paint.

use circuit_editor_graph::{ElementType, VisualState};
use egui::Color32;

/// Colours used by [`EguiRenderer`](crate::EguiRenderer)
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Canvas background
    pub background: Color32,
    /// Element outline and label
    pub ink: Color32,
    /// Fill per visual state: default, triggered, selected
    pub fills: [Color32; 3],
    /// Idle wire
    pub wire: Color32,
    /// Wire carrying a signal
    pub wire_active: Color32,
    /// Marker on a free port in connect mode
    pub port_free: Color32,
    /// Marker on a wired port in connect mode
    pub port_occupied: Color32,
    /// Ring around the first port of a wire being built
    pub pending: Color32,
}

impl Palette {
    /// Fill colour for an element in `state`
    pub fn fill(&self, state: VisualState) -> Color32 {
        match state {
            VisualState::Default => self.fills[0],
            VisualState::Triggered => self.fills[1],
            VisualState::Selected => self.fills[2],
        }
    }

    /// Stroke colour for a wire
    pub fn wire(&self, active: bool) -> Color32 {
        if active {
            self.wire_active
        } else {
            self.wire
        }
    }

    /// Marker colour for a port in connect mode
    pub fn port(&self, occupied: bool) -> Color32 {
        if occupied {
            self.port_occupied
        } else {
            self.port_free
        }
    }

    /// Text drawn on an element
    pub fn label(&self, element_type: ElementType) -> &'static str {
        match element_type {
            ElementType::Input => "1",
            ElementType::Not => "¬",
            ElementType::And => "&",
            ElementType::Or => "≥1",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            ink: Color32::BLACK,
            fills: [
                Color32::from_rgb(245, 245, 245),
                Color32::from_rgb(170, 230, 170),
                Color32::from_rgb(170, 200, 255),
            ],
            wire: Color32::BLACK,
            wire_active: Color32::from_rgb(40, 160, 40),
            port_free: Color32::from_rgb(60, 160, 60),
            port_occupied: Color32::from_rgb(200, 60, 60),
            pending: Color32::from_rgb(255, 160, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_distinguishable() {
        let palette = Palette::default();
        let default = palette.fill(VisualState::Default);
        assert_ne!(default, palette.fill(VisualState::Selected));
        assert_ne!(default, palette.fill(VisualState::Triggered));
        assert_ne!(palette.port(true), palette.port(false));
    }

    #[test]
    fn test_every_type_has_a_label() {
        let palette = Palette::default();
        for element_type in ElementType::ALL {
            assert!(!palette.label(element_type).is_empty());
        }
    }
}
