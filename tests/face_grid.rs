use plotters::prelude::*;

use eigenviz::figure::{compare_figure_size, FrameShape, GridLayout};
use eigenviz::grid::{render_face_grid, render_face_grid_compare};

/// Horizontal ramp frames; index offsets the ramp so frames differ.
fn ramp_frames(shape: FrameShape, count: usize) -> Vec<Vec<f32>> {
    (0..count)
        .map(|k| {
            (0..shape.n_px())
                .map(|i| (i % shape.w + k) as f32)
                .collect()
        })
        .collect()
}

#[test]
fn grid_renders_all_cells_into_buffer() {
    let shape = FrameShape::new(4, 3);
    let layout = GridLayout {
        n_row: 2,
        n_col: 3,
        scaling: 1.0,
        title: None,
    };
    let frames = ramp_frames(shape, layout.n_cells());
    let (w, h) = layout.figure_size();

    let mut buf = vec![0u8; (w * h * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        render_face_grid(&root, &frames, shape, &layout).unwrap();
        root.present().unwrap();
    }

    assert!(
        buf.iter().any(|&b| b == 255),
        "white background should survive outside the cells"
    );
    assert!(
        buf.iter().any(|&b| b < 64),
        "ramp frames should produce near-black pixels"
    );
}

#[test]
fn grid_consumes_only_the_first_cells() {
    let shape = FrameShape::new(4, 3);
    let layout = GridLayout {
        n_row: 1,
        n_col: 2,
        scaling: 1.0,
        title: None,
    };
    // Extra frames beyond n_row * n_col are legal and ignored.
    let frames = ramp_frames(shape, 5);
    let (w, h) = layout.figure_size();

    let mut buf = vec![0u8; (w * h * 3) as usize];
    let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
    render_face_grid(&root, &frames, shape, &layout).unwrap();
    root.present().unwrap();
}

#[test]
fn compare_renders_pairs_into_buffer() {
    let shape = FrameShape::new(4, 3);
    let top = ramp_frames(shape, 4);
    let bottom = ramp_frames(shape, 4);
    let (w, h) = compare_figure_size(4, 1.0);

    let mut buf = vec![0u8; (w * h * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        render_face_grid_compare(&root, &top, &bottom, shape, 4, None).unwrap();
        root.present().unwrap();
    }

    assert!(buf.iter().any(|&b| b < 64));
}

#[test]
#[should_panic(expected = "image collection too short")]
fn grid_panics_when_collection_too_short() {
    let shape = FrameShape::new(4, 3);
    let layout = GridLayout::default();
    let frames = ramp_frames(shape, layout.n_cells() - 1);

    let mut buf = vec![0u8; 64 * 64 * 3];
    let root = BitMapBackend::with_buffer(&mut buf, (64, 64)).into_drawing_area();
    let _ = render_face_grid(&root, &frames, shape, &layout);
}

#[test]
#[should_panic(expected = "frame length mismatch: images[2]")]
fn grid_panics_on_frame_length_mismatch() {
    let shape = FrameShape::new(4, 3);
    let layout = GridLayout {
        n_row: 1,
        n_col: 4,
        scaling: 1.0,
        title: None,
    };
    let mut frames = ramp_frames(shape, layout.n_cells());
    frames[2].pop();

    let mut buf = vec![0u8; 64 * 64 * 3];
    let root = BitMapBackend::with_buffer(&mut buf, (64, 64)).into_drawing_area();
    let _ = render_face_grid(&root, &frames, shape, &layout);
}

#[test]
#[should_panic(expected = "second image collection too short")]
fn compare_panics_when_second_collection_short() {
    let shape = FrameShape::new(4, 3);
    let top = ramp_frames(shape, 4);
    let bottom = ramp_frames(shape, 3);

    let mut buf = vec![0u8; 64 * 64 * 3];
    let root = BitMapBackend::with_buffer(&mut buf, (64, 64)).into_drawing_area();
    let _ = render_face_grid_compare(&root, &top, &bottom, shape, 4, None);
}

#[test]
#[ignore]
fn plot_sample_face_grid() {
    let shape = FrameShape::new(16, 12);
    let layout = GridLayout {
        title: Some("Ramp Frames".to_string()),
        ..GridLayout::default()
    };
    let frames = ramp_frames(shape, layout.n_cells());
    let (w, h) = layout.figure_size();

    std::fs::create_dir_all("target/plots").unwrap();
    let root =
        BitMapBackend::new("target/plots/test_face_grid.png", (w, h)).into_drawing_area();
    render_face_grid(&root, &frames, shape, &layout).unwrap();
    root.present().unwrap();
}
