// Renders sample figures to target/plots: a face sheet, an original-vs-blur
// comparison grid, and a variance-retention curve with a CSV sidecar.
use std::error::Error;
use std::fs::{create_dir_all, write};
use std::path::Path;

use plotters::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use eigenviz::figure::{compare_figure_size, FrameShape, GridLayout};
use eigenviz::grid::{render_face_grid, render_face_grid_compare};
use eigenviz::retention::{marked_component, render_variance_retention, retention_figure_size};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir)?;

    let shape = FrameShape::new(32, 24);
    let mut rng = StdRng::seed_from_u64(0xFACE5);

    let faces: Vec<Vec<f32>> = (0..16).map(|i| synthetic_face(shape, i, &mut rng)).collect();
    let blurred: Vec<Vec<f32>> = faces.iter().map(|f| box_blur(f, shape)).collect();

    let layout = GridLayout {
        title: Some("Sample Faces".to_string()),
        ..GridLayout::default()
    };
    let (grid_w, grid_h) = layout.figure_size();
    let grid_path = out_dir.join("face_grid.png");
    {
        let root = BitMapBackend::new(&grid_path, (grid_w, grid_h)).into_drawing_area();
        render_face_grid(&root, &faces, shape, &layout)?;
        root.present()?;
    }

    let n_pairs = 8;
    let (cmp_w, cmp_h) = compare_figure_size(n_pairs, 1.0);
    let compare_path = out_dir.join("face_grid_compare.png");
    {
        let root = BitMapBackend::new(&compare_path, (cmp_w, cmp_h)).into_drawing_area();
        render_face_grid_compare(
            &root,
            &faces,
            &blurred,
            shape,
            n_pairs,
            Some("Original vs Blurred"),
        )?;
        root.present()?;
    }

    let curve = retention_curve(60, &mut rng);
    let target = 0.95;
    let marked = marked_component(&curve, target);
    println!(
        "{:.0}% variance retained after {marked} eigenvectors",
        target * 100.0
    );

    let mut csv = String::from("component,cumulative_retention\n");
    for (i, v) in curve.iter().enumerate() {
        csv.push_str(&format!("{i},{v:.6}\n"));
    }
    write(out_dir.join("variance_retention.csv"), csv)?;

    let retention_path = out_dir.join("variance_retention.png");
    {
        let root =
            BitMapBackend::new(&retention_path, retention_figure_size()).into_drawing_area();
        render_variance_retention(&root, &curve, target)?;
        root.present()?;
    }

    println!("Saved sample plots to {}", out_dir.display());
    Ok(())
}

/// A soft elliptical blob with per-frame jitter, vaguely face-like once
/// normalized to the gray ramp.
fn synthetic_face(shape: FrameShape, seed_idx: usize, rng: &mut StdRng) -> Vec<f32> {
    let cy = shape.h as f32 / 2.0 + rng.random_range(-2.0..2.0);
    let cx = shape.w as f32 / 2.0 + rng.random_range(-2.0..2.0);
    let ry = shape.h as f32 / 3.0;
    let rx = shape.w as f32 / 3.5;
    let tilt = (seed_idx as f32 * 0.37).sin() * 0.3;

    (0..shape.n_px())
        .map(|i| {
            let y = (i / shape.w) as f32;
            let x = (i % shape.w) as f32;
            let dy = (y - cy) / ry;
            let dx = (x - cx) / rx + tilt * dy;
            let blob = (-(dx * dx + dy * dy)).exp();
            blob + rng.random_range(-0.05..0.05)
        })
        .collect()
}

/// 3x3 mean filter, clamped at the frame border.
fn box_blur(frame: &[f32], shape: FrameShape) -> Vec<f32> {
    let h = shape.h as isize;
    let w = shape.w as isize;
    (0..shape.n_px())
        .map(|i| {
            let y = (i / shape.w) as isize;
            let x = (i % shape.w) as isize;
            let mut sum = 0.0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let yy = (y + dy).clamp(0, h - 1);
                    let xx = (x + dx).clamp(0, w - 1);
                    sum += frame[(yy * w + xx) as usize];
                }
            }
            sum / 9.0
        })
        .collect()
}

/// Cumulative normalized spectrum with exponential decay and mild jitter.
fn retention_curve(n: usize, rng: &mut StdRng) -> Vec<f32> {
    let eigs: Vec<f32> = (0..n)
        .map(|i| (-(i as f32) / 6.0).exp() * rng.random_range(0.8..1.2))
        .collect();
    let total: f32 = eigs.iter().sum();
    let mut acc = 0.0;
    eigs.iter()
        .map(|&e| {
            acc += e;
            acc / total
        })
        .collect()
}
