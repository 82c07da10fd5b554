pub mod error;
pub mod incremental;
pub mod params;
