// SPDX-License-Identifier: MIT OR Apache-2.0
//! Translation of raw egui input into editor events.

use circuit_editor_graph::{InputEvent, Key, Point};
use egui::{Event, Modifiers, PointerButton, Pos2, Rect};

/// Where the editor sits on screen and whether it may take input this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Screen area of the editor; event positions are made relative to its min corner
    pub rect: Rect,
    /// The pointer is over the editor and not captured by a widget on top
    pub hovered: bool,
    /// No other widget holds keyboard focus
    pub keyboard: bool,
}

impl Canvas {
    /// A canvas that accepts every press and key
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            hovered: true,
            keyboard: true,
        }
    }

    fn local(&self, pos: Pos2) -> Point {
        Point::new(pos.x - self.rect.min.x, pos.y - self.rect.min.y)
    }
}

/// Stateful translator from one frame's egui input to [`InputEvent`]s.
///
/// egui reports Ctrl only as a modifier flag, so the bridge remembers the
/// previous frame's flag and emits key edges when it changes.
#[derive(Debug, Clone, Default)]
pub struct InputBridge {
    ctrl_held: bool,
}

impl InputBridge {
    /// Create a bridge with no modifier held
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a frame's events into canvas-local editor events.
    ///
    /// Presses are forwarded only inside a hovered canvas and Delete only
    /// while no other widget has focus. Moves and releases always pass so a
    /// drag can leave the canvas. Ctrl edges are tracked regardless.
    pub fn translate(
        &mut self,
        events: &[Event],
        modifiers: Modifiers,
        canvas: &Canvas,
    ) -> Vec<InputEvent> {
        let mut out = Vec::new();

        if modifiers.ctrl != self.ctrl_held {
            self.ctrl_held = modifiers.ctrl;
            out.push(if modifiers.ctrl {
                InputEvent::KeyDown(Key::Modifier)
            } else {
                InputEvent::KeyUp(Key::Modifier)
            });
        }

        for event in events {
            match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if !*pressed {
                        out.push(InputEvent::PointerUp(canvas.local(*pos)));
                    } else if canvas.hovered && canvas.rect.contains(*pos) {
                        out.push(InputEvent::PointerDown(canvas.local(*pos)));
                    }
                }
                Event::PointerMoved(pos) => out.push(InputEvent::PointerMove(canvas.local(*pos))),
                Event::Key {
                    key: egui::Key::Delete,
                    pressed,
                    repeat: false,
                    ..
                } if canvas.keyboard => out.push(if *pressed {
                    InputEvent::KeyDown(Key::Delete)
                } else {
                    InputEvent::KeyUp(Key::Delete)
                }),
                _ => {}
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(400.0, 300.0)))
    }

    fn delete(pressed: bool, repeat: bool) -> Event {
        Event::Key {
            key: egui::Key::Delete,
            physical_key: None,
            pressed,
            repeat,
            modifiers: Modifiers::NONE,
        }
    }

    fn button(x: f32, y: f32, pressed: bool) -> Event {
        Event::PointerButton {
            pos: Pos2::new(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_positions_are_canvas_local() {
        let mut bridge = InputBridge::new();
        let events = [
            button(150.0, 80.0, true),
            Event::PointerMoved(Pos2::new(160.0, 90.0)),
            button(160.0, 90.0, false),
        ];
        let out = bridge.translate(&events, Modifiers::NONE, &canvas());
        assert_eq!(
            out,
            vec![
                InputEvent::PointerDown(Point::new(50.0, 30.0)),
                InputEvent::PointerMove(Point::new(60.0, 40.0)),
                InputEvent::PointerUp(Point::new(60.0, 40.0)),
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_dropped() {
        let mut bridge = InputBridge::new();
        let out = bridge.translate(&[button(10.0, 10.0, true)], Modifiers::NONE, &canvas());
        assert!(out.is_empty());
    }

    #[test]
    fn test_press_ignored_when_canvas_not_hovered() {
        let mut bridge = InputBridge::new();
        let covered = Canvas {
            hovered: false,
            ..canvas()
        };
        let events = [button(150.0, 80.0, true), button(150.0, 80.0, false)];
        let out = bridge.translate(&events, Modifiers::NONE, &covered);
        // The release still arrives so an outstanding drag ends
        assert_eq!(out, vec![InputEvent::PointerUp(Point::new(50.0, 30.0))]);
    }

    #[test]
    fn test_delete_ignored_when_focus_elsewhere() {
        let mut bridge = InputBridge::new();
        let typing = Canvas {
            keyboard: false,
            ..canvas()
        };
        let out = bridge.translate(&[delete(true, false)], Modifiers::CTRL, &typing);
        assert_eq!(out, vec![InputEvent::KeyDown(Key::Modifier)]);
    }

    #[test]
    fn test_ctrl_edges() {
        let mut bridge = InputBridge::new();
        let out = bridge.translate(&[], Modifiers::CTRL, &canvas());
        assert_eq!(out, vec![InputEvent::KeyDown(Key::Modifier)]);
        assert!(bridge.translate(&[], Modifiers::CTRL, &canvas()).is_empty());
        let out = bridge.translate(&[], Modifiers::NONE, &canvas());
        assert_eq!(out, vec![InputEvent::KeyUp(Key::Modifier)]);
    }

    #[test]
    fn test_delete_key_ignores_repeats() {
        let mut bridge = InputBridge::new();
        let events = [delete(true, false), delete(true, true), delete(false, false)];
        let out = bridge.translate(&events, Modifiers::NONE, &canvas());
        assert_eq!(
            out,
            vec![InputEvent::KeyDown(Key::Delete), InputEvent::KeyUp(Key::Delete)]
        );
    }
}
