mod connective;
mod curve;
mod vessel_set;

pub use connective::ConnectiveStructure;
pub use curve::Curve;
pub use vessel_set::VesselSet;
