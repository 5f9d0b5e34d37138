use kurbo::{BezPath, Point};

/// Vertices of a regular hexagon of circumradius `size`.
///
/// Angles step by 60 degrees from a -30 degree offset, so in raster
/// coordinates the topmost and bottommost points are single vertices.
pub fn hexagon_vertices(center: Point, size: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        Point::new(center.x + size * angle.cos(), center.y + size * angle.sin())
    })
}

/// Vertices of an `n`-pointed star, alternating between the outer radius
/// `size` and an inner radius at 0.4 of it, starting from the top tip.
pub fn star_vertices(center: Point, size: f64, points: u32) -> Vec<Point> {
    let inner = size * 0.4;
    let step = 360.0 / (2 * points) as f64;
    (0..2 * points)
        .map(|i| {
            let radius = if i % 2 == 0 { size } else { inner };
            let angle = (step * i as f64 - 90.0).to_radians();
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Closed polygon path through `vertices`. Empty input yields an empty path.
pub fn polygon(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = vertices.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
    path
}

/// Open polyline path through `vertices`. Empty input yields an empty path.
pub fn polyline(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = vertices.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path
}

#[cfg(test)]
mod tests {
    use kurbo::PathEl;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn hexagon_sits_on_its_circumcircle() {
        let center = Point::new(10.0, -4.0);
        let verts = hexagon_vertices(center, 25.0);
        assert_eq!(verts.len(), 6);
        for v in verts {
            assert!((center.distance(v) - 25.0).abs() < EPS);
        }
        // First vertex at -30 degrees.
        assert!((verts[0].x - (10.0 + 25.0 * (3.0f64).sqrt() / 2.0)).abs() < EPS);
        assert!((verts[0].y - (-4.0 - 12.5)).abs() < EPS);
    }

    #[test]
    fn star_alternates_radii_from_top_tip() {
        let center = Point::new(0.0, 0.0);
        let verts = star_vertices(center, 50.0, 5);
        assert_eq!(verts.len(), 10);
        for (i, v) in verts.iter().enumerate() {
            let expected = if i % 2 == 0 { 50.0 } else { 20.0 };
            assert!((center.distance(*v) - expected).abs() < EPS);
        }
        // Tip straight up in raster coordinates.
        assert!(verts[0].x.abs() < EPS);
        assert!((verts[0].y + 50.0).abs() < EPS);
    }

    #[test]
    fn polygon_closes_and_polyline_does_not() {
        let verts = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
        ];
        let closed = polygon(&verts);
        assert_eq!(closed.elements().last(), Some(&PathEl::ClosePath));

        let open = polyline(&verts);
        assert!(!open.elements().is_empty());
        assert_ne!(open.elements().last(), Some(&PathEl::ClosePath));
    }

    #[test]
    fn empty_vertex_lists_yield_empty_paths() {
        assert!(polygon(&[]).elements().is_empty());
        assert!(polyline(&[]).elements().is_empty());
    }
}
