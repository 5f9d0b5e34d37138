use kurbo::{Circle, CircleSegment, Point, Shape};
use rand::Rng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::geometry::{hexagon_vertices, polygon, polyline, star_vertices};
use crate::palette::Palette;

/// Bounds for a component's half extent, in pixels.
pub const COMPONENT_MIN_SIZE: i32 = 15;
pub const COMPONENT_MAX_SIZE: i32 = 100;
/// Candidate parabola stroke widths; width 2 is twice as likely.
const PARABOLA_WIDTHS: [f64; 4] = [1.0, 2.0, 2.0, 3.0];
/// Candidate star point counts.
const STAR_POINTS: [u32; 3] = [5, 6, 7];
/// Bounds for the pie-slice sweep, in degrees.
const MIN_SWEEP: i32 = 45;
const MAX_SWEEP: i32 = 300;

/// The component shape recipes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Ellipse,
    PieSlice,
    Hexagon,
    Star,
    RightTriangle,
    Parabola,
    ScatterTriangle,
}

/// Per-recipe weights, in percent.
const SHAPE_WEIGHTS: [(u32, ShapeKind); 8] = [
    (15, ShapeKind::Rect),
    (15, ShapeKind::Ellipse),
    (15, ShapeKind::PieSlice),
    (15, ShapeKind::Hexagon),
    (10, ShapeKind::Star),
    (15, ShapeKind::RightTriangle),
    (10, ShapeKind::Parabola),
    (5, ShapeKind::ScatterTriangle),
];

/// Weighted pick among the shape recipes.
pub fn pick_shape(rng: &mut StdRng) -> ShapeKind {
    let roll = rng.gen_range(0..100u32);
    let mut acc = 0;
    for (weight, kind) in SHAPE_WEIGHTS {
        acc += weight;
        if roll < acc {
            return kind;
        }
    }
    // The weights sum to 100, so the loop always returns.
    ShapeKind::ScatterTriangle
}

/// Right-triangle vertices with both legs of length `size`, pointing
/// into one of the four quadrants around the anchor.
fn right_triangle_vertices(center: Point, size: f64, quadrant: u8) -> [Point; 3] {
    let (dx, dy) = match quadrant {
        1 => (size, size),
        2 => (-size, size),
        3 => (-size, -size),
        _ => (size, -size),
    };
    [
        center,
        Point::new(center.x + dx, center.y),
        Point::new(center.x, center.y + dy),
    ]
}

/// Sampled parabola arc near the anchor. Each sample lands on one of
/// two perpendicular orientations, chosen per point, which scatters the
/// arc instead of tracing it cleanly.
fn parabola_points(rng: &mut StdRng, center: Point, size: i32) -> Vec<Point> {
    let s = size as f64;
    (-size..=size)
        .map(|x_local| {
            let y_local = ((x_local as f64 / s).powi(2) * s) as i32;
            if rng.gen_bool(0.5) {
                Point::new(center.x + f64::from(x_local), center.y - s + f64::from(y_local))
            } else {
                Point::new(center.x - s + f64::from(y_local), center.y + f64::from(x_local))
            }
        })
        .collect()
}

/// Draw one weighted-random shape at every component anchor.
pub fn draw_components(
    rng: &mut StdRng,
    board: &mut Board,
    anchors: &[Point],
    palette: &Palette,
) {
    for &anchor in anchors {
        let size = rng.gen_range(COMPONENT_MIN_SIZE..=COMPONENT_MAX_SIZE);
        let s = size as f64;
        let color = palette.choose(rng);

        match pick_shape(rng) {
            ShapeKind::Rect => {
                board.fill_rect(anchor.x - s, anchor.y - s, anchor.x + s, anchor.y + s, color);
            }
            ShapeKind::Ellipse => {
                board.fill_path(&Circle::new(anchor, s).to_path(0.1), color);
            }
            ShapeKind::PieSlice => {
                let start = f64::from(rng.gen_range(0..=360));
                let sweep = f64::from(rng.gen_range(MIN_SWEEP..=MAX_SWEEP));
                let wedge =
                    CircleSegment::new(anchor, s, 0.0, start.to_radians(), sweep.to_radians());
                board.fill_path(&wedge.to_path(0.1), color);
            }
            ShapeKind::Hexagon => {
                board.fill_path(&polygon(&hexagon_vertices(anchor, s)), color);
            }
            ShapeKind::Star => {
                let points = STAR_POINTS[rng.gen_range(0..STAR_POINTS.len())];
                board.fill_path(&polygon(&star_vertices(anchor, s, points)), color);
            }
            ShapeKind::RightTriangle => {
                let quadrant = rng.gen_range(1..=4);
                board.fill_path(&polygon(&right_triangle_vertices(anchor, s, quadrant)), color);
            }
            ShapeKind::Parabola => {
                let arc = parabola_points(rng, anchor, size);
                let width = PARABOLA_WIDTHS[rng.gen_range(0..PARABOLA_WIDTHS.len())];
                board.stroke_path(&polyline(&arc), color, width);
            }
            ShapeKind::ScatterTriangle => {
                let mut vert = || {
                    Point::new(
                        anchor.x + f64::from(rng.gen_range(-size..=size)),
                        anchor.y + f64::from(rng.gen_range(-size..=size)),
                    )
                };
                let tri = [vert(), vert(), vert()];
                board.fill_path(&polygon(&tri), color);
            }
        }
    }
}
