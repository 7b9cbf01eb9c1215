pub mod connectivity;
pub mod creation;
pub mod deformation;
