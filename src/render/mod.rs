//! Rendering contract and comparison layouts.
//!
//! The crate produces [`ConnectiveStructure`](crate::geometry::ConnectiveStructure)s;
//! drawing them is left to a [`Renderer`] implementation supplied by the
//! caller.

mod layout;
mod renderer;
mod style;

pub use layout::{render_intervention, render_registration, render_validation};
pub use renderer::{DrawCall, Panel, RecordingRenderer, Renderer};
pub use style::{Color, FillMode, Style};
