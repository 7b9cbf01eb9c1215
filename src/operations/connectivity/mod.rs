mod build_connectivity;
mod merge_vessels;

pub use build_connectivity::BuildConnectivity;
pub use merge_vessels::MergeVessels;
