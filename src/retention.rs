//! retention.rs — variance-retention figure.
//!
//! Plots a cumulative normalized eigenvalue curve and marks the component
//! count at which a target retention level is reached.

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::debug;

/// Visible y-range of the retention figure.
const Y_FLOOR: f32 = 0.80;
const Y_CEIL: f32 = 1.01;

/// Natural pixel size of the retention figure.
pub fn retention_figure_size() -> (u32, u32) {
    (1200, 400)
}

/// Component index marked on the retention figure: one before the first
/// curve element that reaches `threshold`.
///
/// Returns `-1` when the first element already meets the threshold; the
/// marker's y-value then wraps to the last curve element. Panics when no
/// element reaches the threshold.
pub fn marked_component(curve: &[f32], threshold: f32) -> isize {
    let crossing = curve
        .iter()
        .position(|&v| v >= threshold)
        .unwrap_or_else(|| {
            panic!(
                "retention threshold {threshold} never reached: curve tops out at {}",
                curve.iter().copied().fold(f32::NEG_INFINITY, f32::max)
            )
        });
    crossing as isize - 1
}

/// Render the retention curve with the threshold component marked.
///
/// The curve is drawn against component index, y-range clipped to
/// [0.80, 1.01] with percent tick labels on 5% steps and mesh grid lines.
/// Panics propagate from [`marked_component`]; drawing errors return `Err`.
pub fn render_variance_retention<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    curve: &[f32],
    threshold: f32,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let marked = marked_component(curve, threshold);
    // A negative marked index wraps to the last curve element.
    let marked_y = if marked >= 0 {
        curve[marked as usize]
    } else {
        curve[curve.len() - 1]
    };
    debug!(marked, threshold, "rendering variance retention curve");

    area.fill(&WHITE)?;
    let x_lo = (marked as f32).min(0.0) - 0.5;
    let mut chart = ChartBuilder::on(area)
        .caption(
            "Variance Retention over number of Eigenvectors",
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..(curve.len() as f32), Y_FLOOR..Y_CEIL)?;

    chart
        .configure_mesh()
        .x_desc("Number of Eigenvectors")
        .y_desc("Variance Retained")
        .y_labels(5)
        .y_label_formatter(&|y| format!("{:.0}%", *y * 100.0))
        .draw()?;

    chart.draw_series(LineSeries::new(
        curve
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v >= Y_FLOOR)
            .map(|(i, &v)| (i as f32, v)),
        &BLUE,
    ))?;

    if marked_y >= Y_FLOOR {
        chart.draw_series(std::iter::once(Circle::new(
            (marked as f32, marked_y),
            4,
            RED.filled(),
        )))?;
    }

    Ok(())
}
