use kurbo::{BezPath, Point};

use crate::error::{TraceError, TraceResult};
use crate::geometry::polyline;
use crate::palette::Rgb8;

/// Finished board raster, RGBA8 with straight alpha.
#[derive(Clone, Debug)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Raster {
    /// Drop the alpha channel for RGB encoders.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.data.len() / 4 * 3);
        for px in self.data.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
        }
        rgb
    }
}

/// Drawing surface backed by the CPU renderer.
///
/// All paints are opaque, so the finished raster carries alpha 255
/// everywhere and premultiplied output equals straight output.
pub struct Board {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl Board {
    pub fn new(width: u32, height: u32) -> TraceResult<Board> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| TraceError::validation("board width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| TraceError::validation("board height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(TraceError::validation("board dimensions must be nonzero"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(Board {
            ctx,
            width: width_u16,
            height: height_u16,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Flood the whole surface with `color`.
    pub fn fill_background(&mut self, color: Rgb8) {
        self.set_paint(color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    /// Fill the axis-aligned rectangle spanning the two corners.
    pub fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb8) {
        self.set_paint(color);
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(x0, y0, x1, y1));
    }

    pub fn fill_path(&mut self, path: &BezPath, color: Rgb8) {
        self.set_paint(color);
        let cpu_path = bezpath_to_cpu(path);
        self.ctx.fill_path(&cpu_path);
    }

    pub fn stroke_path(&mut self, path: &BezPath, color: Rgb8, width: f64) {
        self.set_paint(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        let cpu_path = bezpath_to_cpu(path);
        self.ctx.stroke_path(&cpu_path);
    }

    /// Stroke one straight segment.
    pub fn stroke_line(&mut self, from: Point, to: Point, color: Rgb8, width: f64) {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        self.stroke_path(&path, color, width);
    }

    /// Stroke the open polyline through `points`. Fewer than two points
    /// is a no-op.
    pub fn stroke_polyline(&mut self, points: &[Point], color: Rgb8, width: f64) {
        if points.len() < 2 {
            return;
        }
        self.stroke_path(&polyline(points), color, width);
    }

    /// Resolve all queued paints into a raster.
    pub fn finish(mut self) -> Raster {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Raster {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }

    fn set_paint(&mut self, color: Rgb8) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, 255,
        ));
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(raster: &Raster, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * raster.width + x) * 4) as usize;
        [
            raster.data[idx],
            raster.data[idx + 1],
            raster.data[idx + 2],
            raster.data[idx + 3],
        ]
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Board::new(0, 10).is_err());
        assert!(Board::new(10, 0).is_err());
        assert!(Board::new(70_000, 10).is_err());
    }

    #[test]
    fn background_floods_every_pixel() {
        let mut board = Board::new(8, 8).unwrap();
        board.fill_background(Rgb8::new(10, 20, 30));
        let raster = board.finish();
        assert_eq!(raster.data.len(), 8 * 8 * 4);
        for x in 0..8 {
            for y in 0..8 {
                assert_eq!(pixel(&raster, x, y), [10, 20, 30, 255]);
            }
        }
    }

    #[test]
    fn rect_fill_covers_only_its_half() {
        let mut board = Board::new(8, 8).unwrap();
        board.fill_background(Rgb8::new(0, 0, 0));
        board.fill_rect(0.0, 0.0, 4.0, 8.0, Rgb8::new(255, 255, 255));
        let raster = board.finish();
        assert_eq!(pixel(&raster, 1, 1), [255, 255, 255, 255]);
        assert_eq!(pixel(&raster, 6, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn stroked_line_marks_pixels_along_its_center() {
        let mut board = Board::new(8, 8).unwrap();
        board.fill_background(Rgb8::new(0, 0, 0));
        board.stroke_line(
            Point::new(0.0, 4.0),
            Point::new(8.0, 4.0),
            Rgb8::new(255, 255, 255),
            2.0,
        );
        let raster = board.finish();
        // Row 3 and row 4 sit inside the two-pixel stroke band.
        assert!(pixel(&raster, 4, 3)[0] > 200);
        assert!(pixel(&raster, 4, 4)[0] > 200);
        assert_eq!(pixel(&raster, 4, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn rgb_conversion_drops_alpha() {
        let mut board = Board::new(4, 2).unwrap();
        board.fill_background(Rgb8::new(7, 8, 9));
        let raster = board.finish();
        let rgb = raster.to_rgb8();
        assert_eq!(rgb.len(), 4 * 2 * 3);
        assert_eq!(&rgb[..3], &[7, 8, 9]);
    }
}
