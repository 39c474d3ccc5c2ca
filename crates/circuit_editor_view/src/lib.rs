// SPDX-License-Identifier: MIT OR Apache-2.0
//! egui front end for the combinational circuit editor.
//!
//! The core crate never draws. This crate supplies the two collaborators it
//! expects:
//! - [`EguiRenderer`], a [`Renderable`](circuit_editor_graph::Renderable)
//!   that paints snapshots with an [`egui::Painter`]
//! - [`InputBridge`], which turns egui's raw input into editor events
//!
//! [`CircuitView`] ties both to a circuit and its interaction controller.

pub mod input;
pub mod palette;
pub mod renderer;
pub mod view;

pub use input::{Canvas, InputBridge};
pub use palette::Palette;
pub use renderer::EguiRenderer;
pub use view::CircuitView;
