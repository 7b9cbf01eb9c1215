mod params;
mod retraction;

pub use params::RetractionParams;
pub use retraction::{RetractionField, CENTER_EPSILON};
