//! Class-teacher merge and cell normalization

pub mod normalizer;

pub use normalizer::{dropped_classes, merge_class_teachers, normalize_cell};
