use crate::types::*;
use tracing::trace;
///operations a turtle style drawing surface provides
pub trait Surface {
    fn set_speed(&mut self, speed: Speed);
    fn set_background(&mut self, color: Color);
    ///lift the pen, moves leave no mark
    fn pen_up(&mut self);
    ///lower the pen, moves draw a line
    fn pen_down(&mut self);
    ///move to an absolute turtle space position
    fn goto(&mut self, pos: Vec2);
    fn set_color(&mut self, color: Color);
    ///filled circle at the current position, drawn regardless of pen state
    fn dot(&mut self, diameter: f32);
    fn set_title(&mut self, title: &str);
}
///a cursor which records everything it draws into a display list
#[derive(Debug, Clone)]
pub struct Turtle {
    position: Vec2,
    down: bool,
    color: Color,
    background: Color,
    speed: Speed,
    pen_width: f32,
    title: String,
    display: Vec<Draw>,
}
impl Default for Turtle {
    fn default() -> Self {
        Self {
            position: Vec2::splat(0.0),
            down: true,
            color: Color::BLACK,
            background: Color::splat(255),
            speed: Speed::new(3),
            pen_width: 1.0,
            title: String::from("turtle"),
            display: Vec::new(),
        }
    }
}
impl Turtle {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn position(&self) -> Vec2 {
        self.position
    }
    pub fn is_down(&self) -> bool {
        self.down
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn background(&self) -> Color {
        self.background
    }
    pub fn speed(&self) -> Speed {
        self.speed
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn display_list(&self) -> &[Draw] {
        &self.display
    }
    ///forgets everything drawn, pen state is kept
    pub fn clear(&mut self) {
        self.display.clear()
    }
}
impl Surface for Turtle {
    fn set_speed(&mut self, speed: Speed) {
        self.speed = speed
    }
    fn set_background(&mut self, color: Color) {
        self.background = color
    }
    fn pen_up(&mut self) {
        self.down = false
    }
    fn pen_down(&mut self) {
        self.down = true
    }
    fn goto(&mut self, pos: Vec2) {
        if self.down {
            self.display
                .push(Draw::Line(self.position, pos, self.pen_width, self.color));
        }
        self.position = pos;
    }
    fn set_color(&mut self, color: Color) {
        self.color = color
    }
    fn dot(&mut self, diameter: f32) {
        self.display
            .push(Draw::Dot(self.position, diameter, self.color));
    }
    fn set_title(&mut self, title: &str) {
        trace!(title, "title set");
        title.clone_into(&mut self.title)
    }
}
