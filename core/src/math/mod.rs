pub mod geometry;

pub use geometry::{distance_matrix, euclidean};
