use std::ops::{Mul, Sub};
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub const BLACK: Color = Color::splat(0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    pub const fn splat(c: u8) -> Self {
        Self { r: c, g: c, b: c }
    }
    ///softbuffer wants 0x00RRGGBB, so red and blue trade places in the pixmap
    pub(crate) fn to_col(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.b, self.g, self.r, 255)
    }
}
///screen position in pixels, origin at the top left
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}
impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
///turtle space position, origin at the center of the screen with y going up
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}
impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
    pub fn norm(&self) -> f64 {
        self.y.hypot(self.x)
    }
    pub(crate) fn to_pos(self) -> Pos {
        Pos {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}
impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}
///turtle speed, 0 draws everything at once, 1 is the slowest animated speed and 10 the fastest
#[derive(Copy, Debug, Clone, PartialEq, Eq, Default)]
pub struct Speed(u8);
impl Speed {
    pub const FASTEST: Speed = Speed(0);
    pub const SLOWEST: Speed = Speed(1);
    pub const FAST: Speed = Speed(10);
    ///values over 10 are treated as 10
    pub fn new(speed: u8) -> Self {
        Self(speed.min(10))
    }
    pub fn get(self) -> u8 {
        self.0
    }
    ///how many display items a frame reveals, None means all of them
    pub fn batch(self) -> Option<usize> {
        match self.0 {
            0 => None,
            s => Some(s as usize * 64),
        }
    }
}
///an item the turtle has drawn, in turtle space
#[derive(Copy, Debug, Clone, PartialEq)]
pub enum Draw {
    ///filled circle, center and diameter
    Dot(Vec2, f32, Color),
    ///pen down move, start end and pen width
    Line(Vec2, Vec2, f32, Color),
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn speed_clamps_to_ten() {
        assert_eq!(Speed::new(42), Speed::FAST);
        assert_eq!(Speed::new(3).get(), 3);
    }
    #[test]
    fn fastest_speed_reveals_everything() {
        assert_eq!(Speed::FASTEST.batch(), None);
        assert_eq!(Speed::default(), Speed::FASTEST);
        assert_eq!(Speed::SLOWEST.batch(), Some(64));
        assert_eq!(Speed::FAST.batch(), Some(640));
    }
    #[test]
    fn vec2_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(a - Vec2::new(1.0, -1.0), Vec2::new(2.0, 5.0));
    }
    #[test]
    fn pixmap_color_swaps_red_and_blue() {
        let c = Color::RED.to_col().to_color_u8();
        assert_eq!((c.red(), c.green(), c.blue()), (0, 0, 255));
    }
}
