// SPDX-License-Identifier: MIT OR Apache-2.0
//! Circuit editor widget.

use crate::input::{Canvas, InputBridge};
use crate::palette::Palette;
use crate::renderer::EguiRenderer;
use circuit_editor_graph::{
    Action, Circuit, EditorConfig, ElementId, ElementType, InputEvent, InteractionController,
};

/// A circuit together with the interaction state that edits it
pub struct CircuitView {
    circuit: Circuit,
    controller: InteractionController,
    bridge: InputBridge,
    /// Colours used when painting
    pub palette: Palette,
}

impl CircuitView {
    /// Create an editor over an empty circuit
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_circuit(Circuit::with_config(config), config)
    }

    /// Create an editor over an existing circuit
    pub fn with_circuit(circuit: Circuit, config: &EditorConfig) -> Self {
        Self {
            circuit,
            controller: InteractionController::with_config(config),
            bridge: InputBridge::new(),
            palette: Palette::default(),
        }
    }

    /// The circuit being edited
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Interaction state
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Feed one event to the controller
    pub fn handle(&mut self, event: InputEvent) -> Action {
        let action = self.controller.handle(&mut self.circuit, event);
        if action != Action::Nothing {
            tracing::trace!("{event:?} -> {action:?}");
        }
        action
    }

    /// Place a new element at the spawn point, as a toolbar button would
    pub fn add_element(&mut self, element_type: ElementType) -> Option<ElementId> {
        match self.handle(InputEvent::AddElement(element_type)) {
            Action::Added(id) => Some(id),
            _ => None,
        }
    }

    /// Handle this frame's input and paint the circuit into the remaining space
    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let rect = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        let focused = ui.memory(|m| m.focused());
        let canvas = Canvas {
            rect,
            hovered: response.hovered(),
            keyboard: !matches!(focused, Some(id) if id != response.id),
        };
        let events = ui.input(|i| self.bridge.translate(&i.events, i.modifiers, &canvas));
        for event in events {
            self.handle(event);
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, self.palette.background);

        let mut renderer =
            EguiRenderer::new(&painter, rect.min, &self.palette, self.controller.port_tolerance());
        self.controller.render(&self.circuit, &mut renderer);
        if let Some(point) = self
            .controller
            .pending_wire()
            .and_then(|pending| self.circuit.connection_point(pending).ok())
        {
            renderer.draw_pending(point);
        }

        response
    }
}

impl Default for CircuitView {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_editor_graph::{Mode, VisualState};

    fn run_frame(
        ctx: &egui::Context,
        view: &mut CircuitView,
        events: Vec<egui::Event>,
        modifiers: egui::Modifiers,
    ) {
        let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let input = egui::RawInput {
            screen_rect: Some(screen),
            events,
            modifiers,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    view.ui(ui);
                });
        });
    }

    #[test]
    fn test_click_selects_element() {
        let ctx = egui::Context::default();
        let mut view = CircuitView::with_circuit(Circuit::sample(), &EditorConfig::default());
        run_frame(&ctx, &mut view, Vec::new(), egui::Modifiers::NONE);

        let press = egui::Event::PointerButton {
            pos: egui::pos2(75.0, 115.0),
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        let events = vec![egui::Event::PointerMoved(egui::pos2(75.0, 115.0)), press];
        run_frame(&ctx, &mut view, events, egui::Modifiers::NONE);

        assert_eq!(view.controller().selected(), Some(ElementId::new(0)));
        assert_eq!(
            view.circuit().element(ElementId::new(0)).unwrap().visual_state,
            VisualState::Selected
        );
    }

    #[test]
    fn test_ctrl_enters_connect_mode() {
        let ctx = egui::Context::default();
        let mut view = CircuitView::default();
        run_frame(&ctx, &mut view, Vec::new(), egui::Modifiers::CTRL);
        assert_eq!(view.controller().mode(), Mode::ConnectEdit);
        run_frame(&ctx, &mut view, Vec::new(), egui::Modifiers::NONE);
        assert_eq!(view.controller().mode(), Mode::Navigate);
    }

    #[test]
    fn test_add_element() {
        let mut view = CircuitView::default();
        assert_eq!(view.add_element(ElementType::Not), Some(ElementId::new(0)));
        assert_eq!(view.circuit().element_count(), 1);
    }
}
