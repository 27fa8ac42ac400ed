pub mod hotspot;

pub use hotspot::Hotspot;
