//! Synthetic liver-ablation shapes and a radial retraction deformation.
//!
//! Shapes are generated as planar [`Curve`](geometry::Curve)s, displaced
//! by a [`RetractionField`](operations::deformation::RetractionField) and
//! converted into [`ConnectiveStructure`](geometry::ConnectiveStructure)s
//! for a caller-supplied [`Renderer`](render::Renderer).

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod scenario;

pub use error::{RetractionSimError, Result};
