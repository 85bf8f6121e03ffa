//! Core compute primitives.
//!
//! The similarity matrix is stored as a dense row-major [`Matrix`].

mod matrix;

pub use matrix::Matrix;
