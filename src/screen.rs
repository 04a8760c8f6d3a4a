use crate::error::{Error, Result};
use crate::turtle::Turtle;
use crate::types::*;
use crate::ui::Painter;
use softbuffer::Surface;
use std::num::NonZeroU32;
use std::sync::Arc;
use tiny_skia::Pixmap;
use tracing::{debug, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};
///window settings, turtle units are pixels
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    pub anti_alias: bool,
}
impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            anti_alias: true,
        }
    }
}
impl ScreenConfig {
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    pub fn anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}
///a drawing session, the window is shown once done is called
///
///the event loop is acquired up front so a missing display fails before anything is drawn
pub struct Screen {
    event_loop: EventLoop<()>,
    config: ScreenConfig,
    turtle: Turtle,
}
impl Screen {
    pub fn new() -> Result<Self> {
        Self::with_config(ScreenConfig::default())
    }
    pub fn with_config(config: ScreenConfig) -> Result<Self> {
        check_size(config.width, config.height)?;
        let event_loop = EventLoop::new()?;
        debug!(width = config.width, height = config.height, "event loop ready");
        Ok(Self {
            event_loop,
            config,
            turtle: Turtle::new(),
        })
    }
    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }
    pub fn turtle_mut(&mut self) -> &mut Turtle {
        &mut self.turtle
    }
    ///shows what the turtle drew and blocks until the window is closed
    pub fn done(self) -> Result<()> {
        let Screen {
            event_loop,
            config,
            turtle,
        } = self;
        let mut app = App {
            config,
            turtle,
            shown: 0,
            state: None,
            error: None,
        };
        event_loop.run_app(&mut app)?;
        match app.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
fn check_size(width: u32, height: u32) -> Result<(NonZeroU32, NonZeroU32)> {
    match (NonZeroU32::new(width), NonZeroU32::new(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(Error::InvalidDimensions { width, height }),
    }
}
///how many display items are visible after the next frame
fn reveal(shown: usize, len: usize, speed: Speed) -> usize {
    match speed.batch() {
        None => len,
        Some(batch) => shown.saturating_add(batch).min(len),
    }
}
struct State {
    surface: Surface<Arc<Window>, Arc<Window>>,
    canvas: Option<Pixmap>,
}
struct App {
    config: ScreenConfig,
    turtle: Turtle,
    shown: usize,
    state: Option<State>,
    error: Option<Error>,
}
impl App {
    fn open(&self, event_loop: &ActiveEventLoop) -> Result<State> {
        let attributes = Window::default_attributes()
            .with_title(self.turtle.title())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(attributes)?);
        let context = softbuffer::Context::new(window.clone())?;
        let surface = Surface::new(&context, window.clone())?;
        info!(
            width = self.config.width,
            height = self.config.height,
            title = self.turtle.title(),
            items = self.turtle.display_list().len(),
            "window opened"
        );
        Ok(State {
            surface,
            canvas: None,
        })
    }
    fn redraw(&mut self) -> Result<()> {
        let Some(state) = self.state.as_mut() else {
            return Ok(());
        };
        let size = state.surface.window().inner_size();
        //minimized
        let Ok((width, height)) = check_size(size.width, size.height) else {
            return Ok(());
        };
        state.surface.resize(width, height)?;
        let canvas = match state.canvas.take() {
            Some(canvas) if (canvas.width(), canvas.height()) == (size.width, size.height) => {
                canvas
            }
            _ => Pixmap::new(size.width, size.height).ok_or(Error::InvalidDimensions {
                width: size.width,
                height: size.height,
            })?,
        };
        let mut painter = Painter::new(self.turtle.background(), self.config.anti_alias, canvas);
        painter.clear();
        let display = self.turtle.display_list();
        self.shown = reveal(self.shown, display.len(), self.turtle.speed());
        for item in &display[..self.shown] {
            painter.draw(item)
        }
        if self.shown == display.len() {
            let tip = painter.to_screen(self.turtle.position());
            painter.cursor(tip, &self.turtle.color());
        }
        let mut buffer = state.surface.buffer_mut()?;
        painter.save(&mut buffer);
        buffer.present()?;
        state.canvas = Some(painter.canvas);
        if self.shown < display.len() {
            state.surface.window().request_redraw();
        }
        Ok(())
    }
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        self.error = Some(err);
        event_loop.exit()
    }
}
impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.open(event_loop) {
            Ok(state) => {
                state.surface.window().request_redraw();
                self.state = Some(state)
            }
            Err(err) => self.fail(event_loop, err),
        }
    }
    fn window_event(&mut self, el: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::Resized(d) => {
                debug!(width = d.width, height = d.height, "resized");
                if let Some(state) = self.state.as_ref() {
                    state.surface.window().request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(el, err)
                }
            }
            WindowEvent::CloseRequested => {
                info!("window closed");
                el.exit()
            }
            _ => {}
        }
    }
    fn suspended(&mut self, _: &ActiveEventLoop) {
        self.state = None;
    }
}
