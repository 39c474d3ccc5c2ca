// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connectivity core of the combinational circuit editor.
//!
//! This crate holds everything the editor needs except pixels:
//! - Typed logic elements with fixed, named ports
//! - Point-to-point wires between `(element, port)` endpoints
//! - A circuit that keeps both stores mutually consistent
//! - The pointer/keyboard interaction state machine
//!
//! ## Architecture
//!
//! Elements and wires live in slot arenas whose indices are reused
//! lowest-first. [`Circuit`] is the only mutator of cross references, and
//! [`InteractionController`] turns raw input events into whole [`Circuit`]
//! calls. Renderers pull read-only snapshots through [`Renderable`].

pub mod circuit;
pub mod config;
pub mod element;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod slots;
pub mod snapshot;
pub mod wire;

pub use circuit::Circuit;
pub use config::{ConfigError, EditorConfig, ElementSizes};
pub use element::{
    Element, ElementId, ElementStore, ElementType, ParsePortError, PortName, VisualState,
};
pub use error::{EndpointFault, GraphError};
pub use geometry::{Point, Rect};
pub use interaction::{Action, InputEvent, InteractionController, Key, Mode};
pub use snapshot::{ElementSnapshot, PortOverlay, Renderable, WireSnapshot};
pub use wire::{Endpoint, Wire, WireId, WireStore};
