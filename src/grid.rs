use kurbo::Point;
use rand::Rng;
use rand::rngs::StdRng;

/// Distance between neighboring lattice anchors, in pixels.
pub const GRID_SPACING: u32 = 60;
/// Largest per-axis offset applied to a lattice anchor.
pub const GRID_JITTER: i32 = 5;
/// Bounds for the number of component shapes placed per board.
pub const MIN_COMPONENTS: usize = 15;
pub const MAX_COMPONENTS: usize = 40;

/// Jittered lattice anchors covering the board at `GRID_SPACING` intervals.
///
/// Both axes run one spacing past the far edge so strokes and shapes
/// anchored near the border can bleed off-canvas.
pub fn lattice_points(rng: &mut StdRng, width: u32, height: u32, jitter: i32) -> Vec<Point> {
    let mut points = Vec::new();
    for x in (0..width + GRID_SPACING).step_by(GRID_SPACING as usize) {
        for y in (0..height + GRID_SPACING).step_by(GRID_SPACING as usize) {
            let jx = x as i32 + rng.gen_range(-jitter..=jitter);
            let jy = y as i32 + rng.gen_range(-jitter..=jitter);
            points.push(Point::new(jx as f64, jy as f64));
        }
    }
    points
}

/// Sample component anchors with replacement from the lattice.
pub fn sample_components(rng: &mut StdRng, lattice: &[Point]) -> Vec<Point> {
    if lattice.is_empty() {
        return Vec::new();
    }
    let count = rng.gen_range(MIN_COMPONENTS..=MAX_COMPONENTS);
    (0..count)
        .map(|_| lattice[rng.gen_range(0..lattice.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn offset_from_lattice(v: f64) -> i32 {
        let rem = (v as i32).rem_euclid(GRID_SPACING as i32);
        rem.min(GRID_SPACING as i32 - rem)
    }

    #[test]
    fn zero_jitter_lands_exactly_on_the_lattice() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = lattice_points(&mut rng, 1200, 630, 0);
        assert_eq!(points.len(), 21 * 12);
        for p in &points {
            assert_eq!(p.x as i32 % GRID_SPACING as i32, 0);
            assert_eq!(p.y as i32 % GRID_SPACING as i32, 0);
        }
    }

    #[test]
    fn lattice_covers_both_far_edges() {
        let mut rng = StdRng::seed_from_u64(2);
        let points = lattice_points(&mut rng, 1200, 630, 0);
        assert!(points.iter().any(|p| p.x == 1200.0));
        assert!(points.iter().any(|p| p.y == 660.0));
    }

    #[test]
    fn jitter_stays_within_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = lattice_points(&mut rng, 1200, 630, GRID_JITTER);
        for p in &points {
            assert!(offset_from_lattice(p.x) <= GRID_JITTER);
            assert!(offset_from_lattice(p.y) <= GRID_JITTER);
        }
    }

    #[test]
    fn component_sample_draws_from_the_lattice() {
        let mut rng = StdRng::seed_from_u64(4);
        let lattice = lattice_points(&mut rng, 1200, 630, GRID_JITTER);
        let sample = sample_components(&mut rng, &lattice);
        assert!((MIN_COMPONENTS..=MAX_COMPONENTS).contains(&sample.len()));
        for p in &sample {
            assert!(lattice.contains(p));
        }
    }

    #[test]
    fn empty_lattice_samples_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(sample_components(&mut rng, &[]).is_empty());
    }
}
