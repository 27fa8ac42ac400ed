pub mod map;
pub mod trend;

pub use map::render_map;
pub use trend::render_trend;
