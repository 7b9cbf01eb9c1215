//! Pre-op / post-op scenario assembly.

mod anatomy;
mod config;
mod intervention;

pub use anatomy::{Anatomy, AnatomyStructures};
pub use config::{ScenarioConfig, VesselSpec};
pub use intervention::InterventionScenario;
