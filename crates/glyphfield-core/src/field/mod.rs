pub mod library;
pub mod params;
