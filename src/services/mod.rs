pub mod people;
pub mod recommendations;
pub mod releases;
pub mod similarity;
pub mod titles;

pub use similarity::SimilarityIndex;
