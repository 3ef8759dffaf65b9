//! figure.rs — frame shape, grid layout, and figure geometry.
//!
//! A frame is a row-major flattened grayscale image; `FrameShape` carries
//! its dimensions and the `len == h * w` invariant. `GridLayout` is the
//! serializable layout configuration for grid figures.

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Pixel width of one grid cell at `scaling = 1.0`.
pub const CELL_WIDTH_PX: f32 = 180.0;
/// Pixel height of one grid cell at `scaling = 1.0`.
pub const CELL_HEIGHT_PX: f32 = 240.0;

/// Fraction of figure height reserved for the title band when a title is set.
pub(crate) const TITLE_BAND_FRACTION: f32 = 0.15;
/// Fraction of figure height left empty at the top without a title.
pub(crate) const TOP_HEADROOM_FRACTION: f32 = 0.10;
/// Vertical spacing between grid rows, as a fraction of cell height.
pub(crate) const ROW_GAP_FRACTION: f32 = 0.20;

/// Dimensions of one flattened grayscale frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameShape {
    pub h: usize,
    pub w: usize,
}

impl FrameShape {
    pub fn new(h: usize, w: usize) -> Self {
        assert!(h > 0 && w > 0, "frame shape must be non-empty: {h}x{w}");
        Self { h, w }
    }

    /// Samples per frame.
    #[inline]
    pub fn n_px(&self) -> usize {
        self.h * self.w
    }

    #[inline]
    pub fn assert_frame_len_named(&self, frame: &[f32], name: &str) {
        assert_eq!(
            frame.len(),
            self.n_px(),
            "frame length mismatch: {name} vs {}x{}",
            self.h,
            self.w
        );
    }
}

/// Layout configuration for grid figures.
///
/// Defaults reproduce the conventional 2x8 face sheet at full scale with no
/// title. `scaling` is expected in (0, 1] but is not checked; the backend
/// rejects degenerate figure sizes on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridLayout {
    #[serde(default = "GridLayout::default_n_row")]
    pub n_row: usize,
    #[serde(default = "GridLayout::default_n_col")]
    pub n_col: usize,
    #[serde(default = "GridLayout::default_scaling")]
    pub scaling: f32,
    #[serde(default)]
    pub title: Option<String>,
}

impl GridLayout {
    fn default_n_row() -> usize {
        2
    }
    fn default_n_col() -> usize {
        8
    }
    fn default_scaling() -> f32 {
        1.0
    }

    /// Number of cells the grid holds.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.n_row * self.n_col
    }

    /// Natural figure size in pixels, linear in column/row count and scaling.
    pub fn figure_size(&self) -> (u32, u32) {
        (
            (CELL_WIDTH_PX * self.n_col as f32 * self.scaling) as u32,
            (CELL_HEIGHT_PX * self.n_row as f32 * self.scaling) as u32,
        )
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            n_row: Self::default_n_row(),
            n_col: Self::default_n_col(),
            scaling: Self::default_scaling(),
            title: None,
        }
    }
}

/// Natural figure size for a two-row comparison grid of `n` pairs.
pub fn compare_figure_size(n: usize, scaling: f32) -> (u32, u32) {
    GridLayout {
        n_row: 2,
        n_col: n,
        scaling,
        title: None,
    }
    .figure_size()
}

/// Min and span of one frame, for black..white normalization.
///
/// A constant frame gets a tiny span so every sample maps to black, matching
/// the zero-normalization of the usual grayscale rendering convention.
pub(crate) fn frame_gray_range(frame: &[f32]) -> (f32, f32) {
    let lo = frame.iter().copied().fold(f32::INFINITY, f32::min);
    let hi = frame.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    (lo, (hi - lo).max(1e-12))
}

/// Map one sample onto the black..white ramp given the frame's min and span.
#[inline]
pub(crate) fn gray_color(v: f32, lo: f32, span: f32) -> RGBColor {
    let level = (((v - lo) / span) * 255.0).round().clamp(0.0, 255.0) as u8;
    RGBColor(level, level, level)
}
