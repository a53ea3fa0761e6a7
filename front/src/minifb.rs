//! Frontend using the `minifb` crate for window creation and event
//! handling.

use std::ops::ControlFlow::{self, Break};
use std::time::{Duration, Instant};

use minifb::{Key, WindowOptions};

use tg::math::{rgba, Color};
use tg::render::BufCanvas;
use tg::util::buf::Buf2;

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub size: (u32, u32),
}

/// Builder for creating [`Window`]s.
pub struct Builder<'title> {
    pub size: (u32, u32),
    pub title: &'title str,
    pub max_fps: Option<f32>,
    pub opts: WindowOptions,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            size: (640, 640),
            title: "// trigon application //",
            max_fps: Some(60.0),
            opts: WindowOptions::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn size(mut self, w: u32, h: u32) -> Self {
        self.size = (w, h);
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate.
    pub fn max_fps(mut self, fps: Option<f32>) -> Self {
        self.max_fps = fps;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    pub fn build(self) -> Window {
        let Self { size, title, max_fps, opts } = self;
        let mut imp =
            minifb::Window::new(title, size.0 as usize, size.1 as usize, opts)
                .unwrap();
        imp.set_target_fps(max_fps.map_or(0, |fps| fps as usize));
        Window { imp, size }
    }
}

impl Window {
    /// Returns a window builder with default settings.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window contents from a rendered pixel buffer.
    ///
    /// # Panics
    /// If `buf` is smaller than the window.
    pub fn present(&mut self, buf: &Buf2<Color>) {
        let data: Vec<u32> =
            buf.data().iter().map(Color::to_argb_u32).collect();
        let (w, h) = self.size;
        self.imp
            .update_with_buffer(&data, w as usize, h as usize)
            .unwrap();
    }

    /// Runs the main loop of the program, invoking the callback to
    /// draw each frame into a cleared canvas.
    ///
    /// The loop stops and this function returns when the user closes
    /// the window, presses Esc, or the callback returns
    /// `ControlFlow::Break`.
    pub fn run<F>(&mut self, mut frame_fn: F)
    where
        F: FnMut(&mut BufCanvas, Duration) -> ControlFlow<()>,
    {
        let mut canvas = BufCanvas::new(self.size, rgba(0, 0, 0, 255));
        let start = Instant::now();

        loop {
            if self.should_quit() {
                break;
            }
            canvas.clear(rgba(0, 0, 0, 255));
            if let Break(()) = frame_fn(&mut canvas, start.elapsed()) {
                break;
            }
            self.present(canvas.buf());
        }
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
