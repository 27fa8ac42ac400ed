pub mod pairwise;

pub use pairwise::{InterferenceModel, InterferenceReport, PairwiseInterference};
