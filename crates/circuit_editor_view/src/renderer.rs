// SPDX-License-Identifier: MIT OR Apache-2.0
//! Painting circuit snapshots with egui.

use crate::palette::Palette;
use circuit_editor_graph::{ElementSnapshot, Point, PortOverlay, Renderable, WireSnapshot};
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

const ELEMENT_ROUNDING: f32 = 4.0;
const OUTLINE_THICKNESS: f32 = 2.0;
const WIRE_THICKNESS: f32 = 2.0;
const LABEL_SIZE: f32 = 14.0;

/// [`Renderable`] backed by an [`egui::Painter`]
pub struct EguiRenderer<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    palette: &'a Palette,
    marker_radius: f32,
}

impl<'a> EguiRenderer<'a> {
    /// Paint into `painter` with editor coordinates offset by `origin`.
    ///
    /// `marker_radius` sizes the connect-mode port markers, usually the
    /// controller's port tolerance.
    pub fn new(
        painter: &'a egui::Painter,
        origin: Pos2,
        palette: &'a Palette,
        marker_radius: f32,
    ) -> Self {
        Self {
            painter,
            origin,
            palette,
            marker_radius,
        }
    }

    /// Screen position of an editor point
    pub fn to_screen(&self, point: Point) -> Pos2 {
        self.origin + Vec2::new(point.x, point.y)
    }

    fn draw_wire(&self, wire: &WireSnapshot) {
        let points: Vec<Pos2> = wire.route().iter().map(|&p| self.to_screen(p)).collect();
        self.painter.add(egui::Shape::line(
            points,
            Stroke::new(WIRE_THICKNESS, self.palette.wire(wire.active)),
        ));
    }

    fn draw_element(&self, element: &ElementSnapshot) {
        let rect = Rect::from_min_size(
            self.to_screen(Point::new(element.x, element.y)),
            Vec2::new(element.width, element.height),
        );
        self.painter
            .rect_filled(rect, ELEMENT_ROUNDING, self.palette.fill(element.visual_state));
        self.painter.rect_stroke(
            rect,
            ELEMENT_ROUNDING,
            Stroke::new(OUTLINE_THICKNESS, self.palette.ink),
        );
        self.painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            self.palette.label(element.element_type),
            FontId::proportional(LABEL_SIZE),
            self.palette.ink,
        );
    }

    fn draw_overlay(&self, overlay: &PortOverlay) {
        let center = self.to_screen(overlay.point);
        let color = self.palette.port(overlay.occupied);
        self.painter.circle_filled(center, self.marker_radius * 0.6, Color32::WHITE);
        self.painter
            .circle_stroke(center, self.marker_radius * 0.6, Stroke::new(1.5, color));
        // "×" removes the wire, "+" starts one
        self.painter.text(
            center,
            Align2::CENTER_CENTER,
            if overlay.occupied { "×" } else { "+" },
            FontId::monospace(self.marker_radius),
            color,
        );
    }

    /// Highlight the first port of a wire under construction
    pub fn draw_pending(&self, point: Point) {
        self.painter.circle_stroke(
            self.to_screen(point),
            self.marker_radius * 0.8,
            Stroke::new(2.0, self.palette.pending),
        );
    }
}

impl Renderable for EguiRenderer<'_> {
    fn draw(&mut self, elements: &[ElementSnapshot], wires: &[WireSnapshot]) {
        // Wires below elements
        for wire in wires {
            self.draw_wire(wire);
        }
        for element in elements {
            self.draw_element(element);
        }
    }

    fn draw_overlays(&mut self, overlays: &[PortOverlay]) {
        for overlay in overlays {
            self.draw_overlay(overlay);
        }
    }
}
