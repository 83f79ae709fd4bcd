pub mod levenshtein;
pub mod similarity;


pub use levenshtein::{distance, distance_with, sequence_distance, Unit};
pub use similarity::{normalized_distance, similarity};
