use crate::types::*;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
pub(crate) struct Painter {
    pub(crate) canvas: Pixmap,
    paint: Paint<'static>,
    background: Color,
}
impl Painter {
    pub(crate) fn new(background: Color, anti_alias: bool, canvas: Pixmap) -> Self {
        let mut paint = Paint::default();
        paint.anti_alias = anti_alias;
        Self {
            canvas,
            paint,
            background,
        }
    }
    pub(crate) fn clear(&mut self) {
        self.canvas.fill(self.background.to_col())
    }
    ///turtle space to pixels, origin in the middle and y pointing down
    pub(crate) fn to_screen(&self, v: Vec2) -> Pos {
        let center = Vec2::new(
            self.canvas.width() as f64 / 2.0,
            self.canvas.height() as f64 / 2.0,
        );
        Vec2::new(center.x + v.x, center.y - v.y).to_pos()
    }
    pub(crate) fn dot(&mut self, center: Pos, diameter: f32, color: &Color) {
        if diameter <= 0.0 {
            return;
        }
        let Some(path) = PathBuilder::from_circle(center.x, center.y, diameter / 2.0) else {
            return;
        };
        self.paint.set_color(color.to_col());
        self.canvas.fill_path(
            &path,
            &self.paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        )
    }
    pub(crate) fn line_segment(&mut self, line: [Pos; 2], width: f32, color: &Color) {
        let mut path = PathBuilder::new();
        path.move_to(line[0].x, line[0].y);
        path.line_to(line[1].x, line[1].y);
        let Some(path) = path.finish() else {
            return;
        };
        self.paint.set_color(color.to_col());
        let stroke = Stroke {
            width,
            ..Default::default()
        };
        self.canvas
            .stroke_path(&path, &self.paint, &stroke, Transform::identity(), None)
    }
    ///classic turtle arrow with its tip on the turtle, heading east
    pub(crate) fn cursor(&mut self, tip: Pos, color: &Color) {
        let mut path = PathBuilder::new();
        path.move_to(tip.x, tip.y);
        path.line_to(tip.x - 9.0, tip.y - 5.0);
        path.line_to(tip.x - 6.0, tip.y);
        path.line_to(tip.x - 9.0, tip.y + 5.0);
        path.close();
        let Some(path) = path.finish() else {
            return;
        };
        self.paint.set_color(color.to_col());
        self.canvas.fill_path(
            &path,
            &self.paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        )
    }
    pub(crate) fn draw(&mut self, item: &Draw) {
        match *item {
            Draw::Dot(center, diameter, color) => {
                let center = self.to_screen(center);
                self.dot(center, diameter, &color)
            }
            Draw::Line(start, end, width, color) => {
                if (end - start).norm() == 0.0 {
                    return;
                }
                let line = [self.to_screen(start), self.to_screen(end)];
                self.line_segment(line, width, &color)
            }
        }
    }
    ///copies the canvas into a 0x00RRGGBB buffer
    pub(crate) fn save<T>(&self, buffer: &mut T)
    where
        T: std::ops::DerefMut<Target = [u32]>,
    {
        for (dst, src) in buffer.iter_mut().zip(self.canvas.data().chunks_exact(4)) {
            *dst = u32::from_le(bytemuck::pod_read_unaligned(src)) & 0x00FF_FFFF;
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn painter(width: u32, height: u32) -> Painter {
        let mut painter = Painter::new(Color::BLACK, true, Pixmap::new(width, height).unwrap());
        painter.clear();
        painter
    }
    #[test]
    fn origin_maps_to_center() {
        let painter = painter(800, 600);
        assert_eq!(painter.to_screen(Vec2::splat(0.0)), Pos::new(400.0, 300.0));
        assert_eq!(
            painter.to_screen(Vec2::new(100.0, 80.0)),
            Pos::new(500.0, 220.0)
        );
    }
    #[test]
    fn dot_paints_red_over_black() {
        let mut painter = painter(64, 64);
        painter.draw(&Draw::Dot(Vec2::splat(0.0), 10.0, Color::RED));
        let mut buffer = vec![0xdead_beef; 64 * 64];
        painter.save(&mut buffer);
        assert_eq!(buffer[32 * 64 + 32], 0x00FF_0000);
        assert_eq!(buffer[0], 0);
        assert_eq!(buffer[64 * 64 - 1], 0);
    }
    #[test]
    fn empty_dot_is_skipped() {
        let mut painter = painter(16, 16);
        painter.dot(Pos::new(8.0, 8.0), 0.0, &Color::RED);
        let mut buffer = vec![1; 16 * 16];
        painter.save(&mut buffer);
        assert!(buffer.iter().all(|p| *p == 0));
    }
    #[test]
    fn cursor_points_at_the_turtle() {
        let mut painter = painter(32, 32);
        let tip = painter.to_screen(Vec2::splat(0.0));
        painter.cursor(tip, &Color::RED);
        let mut buffer = vec![0; 32 * 32];
        painter.save(&mut buffer);
        assert_eq!(buffer[16 * 32 + 13], 0x00FF_0000);
        //nothing ahead of the tip
        assert_eq!(buffer[16 * 32 + 20], 0);
        assert_eq!(buffer[0], 0);
    }
    #[test]
    fn line_is_stroked() {
        let mut painter = painter(32, 32);
        painter.draw(&Draw::Line(
            Vec2::new(-10.0, 0.5),
            Vec2::new(10.0, 0.5),
            3.0,
            Color::new(0, 255, 0),
        ));
        let mut buffer = vec![0; 32 * 32];
        painter.save(&mut buffer);
        assert_eq!(buffer[15 * 32 + 16], 0x0000_FF00);
    }
}
