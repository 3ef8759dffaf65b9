//! Face-grid and variance-retention figures for eigenface-style PCA
//! inspection.
//!
//! Renderers draw into a caller-supplied `plotters` drawing area; no global
//! figure state survives a call. Backend choice (bitmap, SVG, in-memory
//! buffer) stays with the caller, as does presenting or saving the result.

pub mod figure;
pub mod grid;
pub mod retention;
