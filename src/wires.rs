use kurbo::Point;
use rand::Rng;
use rand::rngs::StdRng;

use crate::grid::GRID_SPACING;
use crate::palette::{Palette, Rgb8};

/// Bounds for the number of wire strokes per board.
pub const MIN_WIRES: usize = 0;
pub const MAX_WIRES: usize = 4;
/// Candidate stroke widths; width 1 is twice as likely as width 2.
const WIRE_WIDTHS: [f64; 3] = [1.0, 1.0, 2.0];
/// Minimum rightward travel of a flow stroke, one lattice spacing.
const FLOW_MIN_ADVANCE: f64 = GRID_SPACING as f64;
/// Chance that a random-style stroke bends at a right angle.
const ELBOW_CHANCE: f64 = 0.2;

/// Routing style for the wire strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WireStyle {
    /// Right-angle traces between unjittered lattice anchors.
    #[default]
    Grid,
    /// Straight traces between any two anchors, occasionally bent.
    Random,
    /// Traces radiating from a single hub near the board center.
    Radial,
    /// Traces that always advance rightward from the left half.
    Flow,
}

/// One planned wire, drawn as a one- or two-segment polyline.
#[derive(Clone, Copy, Debug)]
pub struct WireStroke {
    pub start: Point,
    pub end: Point,
    pub elbow: Option<Point>,
    pub color: Rgb8,
    pub width: f64,
}

impl WireStroke {
    /// Vertex sequence for the stroke, with the elbow inserted when present.
    pub fn polyline(&self) -> Vec<Point> {
        match self.elbow {
            Some(mid) => vec![self.start, mid, self.end],
            None => vec![self.start, self.end],
        }
    }
}

/// Plan up to `MAX_WIRES` strokes between lattice anchors.
///
/// Radial picks its hub once, so every stroke of a run radiates from the
/// same point. Flow re-filters candidate endpoints per stroke and skips
/// a stroke when nothing lies far enough to the right of its start.
pub fn plan_wires(
    rng: &mut StdRng,
    style: WireStyle,
    lattice: &[Point],
    palette: &Palette,
    width: u32,
    height: u32,
) -> Vec<WireStroke> {
    if lattice.is_empty() {
        return Vec::new();
    }
    let count = rng.gen_range(MIN_WIRES..=MAX_WIRES);
    let mut strokes = Vec::with_capacity(count);

    match style {
        WireStyle::Radial => {
            let (w, h) = (width as f64, height as f64);
            let hub = Point::new(
                w / 2.0 + rng.gen_range(-w / 4.0..w / 4.0),
                h / 2.0 + rng.gen_range(-h / 4.0..h / 4.0),
            );
            for _ in 0..count {
                let end = lattice[rng.gen_range(0..lattice.len())];
                strokes.push(WireStroke {
                    start: hub,
                    end,
                    elbow: None,
                    color: palette.choose(rng),
                    width: WIRE_WIDTHS[rng.gen_range(0..WIRE_WIDTHS.len())],
                });
            }
        }
        WireStyle::Flow => {
            let half = width as f64 / 2.0;
            let starts: Vec<Point> = lattice.iter().copied().filter(|p| p.x < half).collect();
            if starts.is_empty() {
                tracing::debug!("no anchors left of center, skipping flow strokes");
                return strokes;
            }
            for _ in 0..count {
                let start = starts[rng.gen_range(0..starts.len())];
                let ends: Vec<Point> = lattice
                    .iter()
                    .copied()
                    .filter(|p| p.x > start.x + FLOW_MIN_ADVANCE)
                    .collect();
                if ends.is_empty() {
                    tracing::debug!(start.x, "no anchor far enough right, skipping stroke");
                    continue;
                }
                let end = ends[rng.gen_range(0..ends.len())];
                strokes.push(WireStroke {
                    start,
                    end,
                    elbow: None,
                    color: palette.choose(rng),
                    width: WIRE_WIDTHS[rng.gen_range(0..WIRE_WIDTHS.len())],
                });
            }
        }
        WireStyle::Grid | WireStyle::Random => {
            for _ in 0..count {
                let start = lattice[rng.gen_range(0..lattice.len())];
                let end = lattice[rng.gen_range(0..lattice.len())];
                // Grid always bends; random bends one time in five.
                let elbow = if style == WireStyle::Grid || rng.gen_bool(ELBOW_CHANCE) {
                    Some(if rng.gen_bool(0.5) {
                        Point::new(start.x, end.y)
                    } else {
                        Point::new(end.x, start.y)
                    })
                } else {
                    None
                };
                strokes.push(WireStroke {
                    start,
                    end,
                    elbow,
                    color: palette.choose(rng),
                    width: WIRE_WIDTHS[rng.gen_range(0..WIRE_WIDTHS.len())],
                });
            }
        }
    }
    strokes
}
