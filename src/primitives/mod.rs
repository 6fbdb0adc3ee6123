//! Core compute primitives.
//!
//! Dense row-major storage shared by rating matrices, TF-IDF feature
//! matrices and similarity matrices.

mod matrix;

pub use matrix::Matrix;
