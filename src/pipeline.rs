use std::path::Path;

use kurbo::Point;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{Board, Raster};
use crate::components::draw_components;
use crate::error::{TraceError, TraceResult};
use crate::grid::{GRID_JITTER, GRID_SPACING, lattice_points, sample_components};
use crate::network::plan_overlay;
use crate::palette::{Palette, Rgb8, grid_line_color, pick_background};
use crate::post::post_process;
use crate::wires::{WireStyle, plan_wires};

/// Output raster width, in pixels.
pub const BOARD_WIDTH: u32 = 1200;
/// Output raster height, in pixels.
pub const BOARD_HEIGHT: u32 = 630;
/// Overlay edges at or beyond this length are dropped.
const MAX_OVERLAY_DISTANCE: f64 = BOARD_WIDTH as f64 / 3.5;

/// What to render: wire style, seed, and the optional network overlay.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardOptions {
    pub style: WireStyle,
    pub seed: Option<u64>,
    pub network: bool,
}

/// Render one finished cover-art raster.
///
/// A seeded run is byte-for-byte reproducible; an unseeded run draws
/// its stream from entropy.
#[tracing::instrument]
pub fn render_board(options: &BoardOptions) -> TraceResult<Raster> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let bg_hex = pick_background(&mut rng);
    let background = Rgb8::from_hex(bg_hex)?;

    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT)?;
    board.fill_background(background);

    match grid_line_color(bg_hex) {
        Ok(line) => draw_grid_overlay(&mut board, line),
        Err(err) => tracing::warn!(%err, "skipping grid overlay"),
    }

    let palette = Palette::pick(&mut rng)?;

    let jitter = if options.style == WireStyle::Grid {
        0
    } else {
        GRID_JITTER
    };
    let lattice = lattice_points(&mut rng, BOARD_WIDTH, BOARD_HEIGHT, jitter);
    let components = sample_components(&mut rng, &lattice);
    tracing::debug!(
        anchors = lattice.len(),
        components = components.len(),
        "planned board"
    );

    let wires = plan_wires(
        &mut rng,
        options.style,
        &lattice,
        &palette,
        BOARD_WIDTH,
        BOARD_HEIGHT,
    );
    for stroke in &wires {
        board.stroke_polyline(&stroke.polyline(), stroke.color, stroke.width);
    }

    if options.network && components.len() > 1 {
        let edges = plan_overlay(&mut rng, &components, &palette, MAX_OVERLAY_DISTANCE);
        tracing::debug!(edges = edges.len(), "planned network overlay");
        for edge in &edges {
            board.stroke_line(edge.a, edge.b, edge.color, edge.width);
        }
    }

    draw_components(&mut rng, &mut board, &components, &palette);

    let raster = board.finish();
    post_process(&raster)
}

/// Render and encode straight to `path`; the format follows the file
/// extension.
pub fn render_to_file(path: &Path, options: &BoardOptions) -> TraceResult<()> {
    let raster = render_board(options)?;
    let rgb = raster.to_rgb8();
    image::save_buffer(
        path,
        &rgb,
        raster.width,
        raster.height,
        image::ColorType::Rgb8,
    )
    .map_err(|err| TraceError::render(format!("write image '{}': {err}", path.display())))?;
    Ok(())
}

/// Faint full-length lines at every spacing multiple. The ranges stop
/// short of the far edges, so no line lands on them.
fn draw_grid_overlay(board: &mut Board, color: Rgb8) {
    let (w, h) = (f64::from(board.width()), f64::from(board.height()));
    for x in (0..board.width()).step_by(GRID_SPACING as usize) {
        let x = f64::from(x);
        board.stroke_line(Point::new(x, 0.0), Point::new(x, h), color, 1.0);
    }
    for y in (0..board.height()).step_by(GRID_SPACING as usize) {
        let y = f64::from(y);
        board.stroke_line(Point::new(0.0, y), Point::new(w, y), color, 1.0);
    }
}
