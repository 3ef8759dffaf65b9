//! grid.rs — face-sheet figures.
//!
//! Lays flattened grayscale frames out as an `n_row x n_col` grid of cells,
//! row-major, each cell normalized to its own min..max and drawn without
//! axes or ticks. The caller supplies the drawing area and keeps ownership
//! of the backend.

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::figure::{
    frame_gray_range, gray_color, FrameShape, GridLayout, ROW_GAP_FRACTION, TITLE_BAND_FRACTION,
    TOP_HEADROOM_FRACTION,
};

/// Render `layout.n_cells()` frames into a grid, row-major.
///
/// Panics if the collection holds fewer than `n_row * n_col` frames or if
/// any consumed frame's length differs from `h * w`.
pub fn render_face_grid<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    images: &[Vec<f32>],
    shape: FrameShape,
    layout: &GridLayout,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let n_cells = layout.n_cells();
    assert!(
        images.len() >= n_cells,
        "image collection too short: {} frames for a {}x{} grid",
        images.len(),
        layout.n_row,
        layout.n_col
    );
    for (i, frame) in images[..n_cells].iter().enumerate() {
        shape.assert_frame_len_named(frame, &format!("images[{i}]"));
    }
    debug!(
        n_row = layout.n_row,
        n_col = layout.n_col,
        "rendering face grid"
    );

    area.fill(&WHITE)?;
    let grid_area = split_title_band(area, layout.title.as_deref())?;
    let cells = grid_area.split_evenly((layout.n_row, layout.n_col));
    for (cell, frame) in cells.iter().zip(images) {
        draw_frame_cell(cell, frame, shape)?;
    }
    Ok(())
}

/// Render two collections as a two-row comparison grid of `n` pairs:
/// `images1[i]` in the top row, `images2[i]` directly below it.
///
/// Preconditions mirror [`render_face_grid`], checked independently for
/// each collection.
pub fn render_face_grid_compare<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    images1: &[Vec<f32>],
    images2: &[Vec<f32>],
    shape: FrameShape,
    n: usize,
    title: Option<&str>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    assert!(
        images1.len() >= n,
        "first image collection too short: {} frames for {n} pairs",
        images1.len()
    );
    assert!(
        images2.len() >= n,
        "second image collection too short: {} frames for {n} pairs",
        images2.len()
    );
    for (i, frame) in images1[..n].iter().enumerate() {
        shape.assert_frame_len_named(frame, &format!("images1[{i}]"));
    }
    for (i, frame) in images2[..n].iter().enumerate() {
        shape.assert_frame_len_named(frame, &format!("images2[{i}]"));
    }
    debug!(n, "rendering face comparison grid");

    area.fill(&WHITE)?;
    let grid_area = split_title_band(area, title)?;
    let cells = grid_area.split_evenly((2, n));
    let frames = images1[..n].iter().chain(images2[..n].iter());
    for (cell, frame) in cells.iter().zip(frames) {
        draw_frame_cell(cell, frame, shape)?;
    }
    Ok(())
}

/// Reserve the top band of the area: a centered title when one is set,
/// empty headroom otherwise. Returns the area left for the grid.
fn split_title_band<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: Option<&str>,
) -> Result<DrawingArea<DB, Shift>, DrawingAreaErrorKind<DB::ErrorType>> {
    let (_, height) = area.dim_in_pixel();
    match title {
        Some(text) => {
            let band_h = (height as f32 * TITLE_BAND_FRACTION) as u32;
            let (band, rest) = area.split_vertically(band_h);
            let (band_w, _) = band.dim_in_pixel();
            let style = ("sans-serif", 24)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center));
            band.draw(&Text::new(
                text.to_string(),
                (band_w as i32 / 2, band_h as i32 / 2),
                style,
            ))?;
            Ok(rest)
        }
        None => {
            let band_h = (height as f32 * TOP_HEADROOM_FRACTION) as u32;
            let (_, rest) = area.split_vertically(band_h);
            Ok(rest)
        }
    }
}

/// Draw one frame into one cell as per-pixel rectangles, row 0 at the top.
fn draw_frame_cell<DB: DrawingBackend>(
    cell: &DrawingArea<DB, Shift>,
    frame: &[f32],
    shape: FrameShape,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (_, cell_h) = cell.dim_in_pixel();
    // Half the row gap above and below each cell adds up to ROW_GAP_FRACTION
    // of spacing between adjacent rows.
    let vgap = (cell_h as f32 * ROW_GAP_FRACTION * 0.5) as u32;

    let h = shape.h as i32;
    let w = shape.w as i32;
    let mut chart = ChartBuilder::on(cell)
        .margin_top(vgap)
        .margin_bottom(vgap)
        .margin_left(1)
        .margin_right(1)
        .build_cartesian_2d(0..w, 0..h)?;

    let (lo, span) = frame_gray_range(frame);
    chart.draw_series(frame.iter().enumerate().map(|(i, &v)| {
        let row = i as i32 / w;
        let col = i as i32 % w;
        Rectangle::new(
            [(col, h - row - 1), (col + 1, h - row)],
            gray_color(v, lo, span).filled(),
        )
    }))?;
    Ok(())
}
