mod make_arc_vessel;
mod make_circular_region;
mod make_liver_outline;

pub use make_arc_vessel::MakeArcVessel;
pub use make_circular_region::MakeCircularRegion;
pub use make_liver_outline::MakeLiverOutline;
