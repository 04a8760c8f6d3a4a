pub mod error;
#[cfg(feature = "winit")]
pub mod screen;
pub mod turtle;
pub mod types;
#[cfg_attr(not(feature = "winit"), allow(dead_code))]
mod ui;
pub use crate::error::{Error, Result};
#[cfg(feature = "winit")]
pub use crate::screen::{Screen, ScreenConfig};
pub use crate::turtle::{Surface, Turtle};
use crate::types::*;
use tracing::{debug, info};
///number of points in the sweep
pub const STEPS: usize = 10_000;
///parameter increment between points, in radians
pub const STEP: f64 = 0.02;
///turtle units per curve unit
pub const SCALE: f64 = 20.0;
///diameter of every dot, in turtle units
pub const DOT_SIZE: f32 = 2.0;
///window title
pub const TITLE: &str = "Coração Interativo";
///horizontal part of the heart, 15 sin(k)^3
pub fn heart_x(k: f64) -> f64 {
    15.0 * k.sin().powi(3)
}
///vertical part of the heart, 12 cos(k) - 5 cos(2k) - 2 cos(3k) - cos(4k)
pub fn heart_y(k: f64) -> f64 {
    12.0 * k.cos() - 5.0 * (2.0 * k).cos() - 2.0 * (3.0 * k).cos() - (4.0 * k).cos()
}
///parameter of the ith point, computed from i so there is no accumulated error
pub fn param(i: usize) -> f64 {
    i as f64 * STEP
}
///scaled position of the ith point
pub fn point(i: usize) -> Vec2 {
    let k = param(i);
    Vec2::new(heart_x(k), heart_y(k)) * SCALE
}
///every point of the sweep in order
pub fn points() -> impl ExactSizeIterator<Item = Vec2> {
    (0..STEPS).map(point)
}
///draws the heart as dots, the pen is only down while marking a dot
pub fn render<S: Surface + ?Sized>(surface: &mut S) {
    surface.set_speed(Speed::FASTEST);
    surface.set_background(Color::BLACK);
    surface.pen_up();
    surface.set_title(TITLE);
    debug!(steps = STEPS, step = STEP, scale = SCALE, "drawing heart");
    for p in points() {
        surface.goto(p);
        surface.pen_down();
        surface.set_color(Color::RED);
        surface.dot(DOT_SIZE);
        surface.pen_up();
    }
    info!(points = STEPS, "heart drawn");
}
