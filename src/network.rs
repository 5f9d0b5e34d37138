use kurbo::Point;
use rand::Rng;
use rand::rngs::StdRng;

use crate::palette::{Palette, Rgb8};

/// Most neighbors any anchor connects to.
pub const MAX_NEIGHBORS: usize = 4;
/// Bounds for the overlay stroke width, in pixels.
const MIN_EDGE_WIDTH: u32 = 8;
const MAX_EDGE_WIDTH: u32 = 15;

/// One planned overlay edge between two lattice anchors.
#[derive(Clone, Copy, Debug)]
pub struct OverlayEdge {
    pub a: Point,
    pub b: Point,
    pub color: Rgb8,
    pub width: f64,
}

/// Connect each component anchor to up to `MAX_NEIGHBORS` of its
/// nearest peers.
///
/// Every anchor draws its own neighbor count, so a close pair may be
/// connected from both sides. Edges at or beyond `max_distance` are
/// dropped after the nearest-neighbor ranking, not before.
pub fn plan_overlay(
    rng: &mut StdRng,
    anchors: &[Point],
    palette: &Palette,
    max_distance: f64,
) -> Vec<OverlayEdge> {
    let mut edges = Vec::new();
    for (i, &a) in anchors.iter().enumerate() {
        let mut others: Vec<(Point, f64)> = anchors
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &p)| (p, a.distance(p)))
            .collect();
        others.sort_by(|x, y| x.1.total_cmp(&y.1));

        let k = rng.gen_range(0..=MAX_NEIGHBORS).min(others.len());
        for &(b, dist) in &others[..k] {
            if dist < max_distance {
                edges.push(OverlayEdge {
                    a,
                    b,
                    color: palette.choose(rng),
                    width: rng.gen_range(MIN_EDGE_WIDTH..=MAX_EDGE_WIDTH) as f64,
                });
            }
        }
    }
    edges
}
