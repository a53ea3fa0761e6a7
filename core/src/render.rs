//! The rendering pipeline.
//!
//! Control flows top-down: [`Renderer::render`] walks the scene's
//! triangles and draws each one either as three clipped line segments
//! (wireframe) or as a near-plane-clipped, backface-culled, scanline-
//! filled surface with per-vertex illumination. All pixel output
//! passes through a [depth-buffered sink][target::DepthCanvas] wrapped
//! around the caller's canvas for the duration of the call.

pub mod clip;
pub mod ctx;
pub mod light;
pub mod project;
pub mod raster;
pub mod stats;
pub mod target;

pub use ctx::{Config, Mode, Projection};
pub use light::{compute_lighting, Light};
pub use stats::{Stats, Throughput};
pub use target::{BufCanvas, Canvas, CanvasPt};

use crate::geom::Triangle;

use target::DepthCanvas;

/// A software renderer with a per-call configuration.
///
/// The renderer is single-threaded and carries no state between
/// calls other than accumulated [`Stats`]; distinct renderer/canvas
/// pairs are fully independent.
pub struct Renderer {
    pub config: Config,
    /// Statistics accumulated over all render calls.
    pub stats: Stats,
}

impl Renderer {
    pub fn new(config: Config) -> Self {
        Self { config, stats: Stats::new() }
    }

    /// Renders `triangles`, lit by `lights`, into `canvas`.
    ///
    /// The canvas is exclusively borrowed for the duration of the
    /// call. A fresh depth buffer is allocated per call and dropped on
    /// return, so rendering the same scene into the same canvas twice
    /// produces the same image as rendering it once.
    ///
    /// Lights are ignored in wireframe mode.
    pub fn render<C: Canvas>(
        &mut self,
        canvas: &mut C,
        triangles: &[Triangle],
        lights: &[Light],
    ) {
        let mut frame = Stats::start();
        frame.calls = 1;
        frame.tris.i = triangles.len();

        let cfg = &self.config;
        let mut sink = DepthCanvas::new(canvas);
        // Clip output scratch, reused across triangles.
        let mut parts = Vec::with_capacity(2);

        for tri in triangles {
            match cfg.mode {
                Mode::Wireframe => {
                    raster::wire_tri(&mut sink, cfg, tri);
                    frame.tris.o += 1;
                }
                Mode::Fill => {
                    parts.clear();
                    clip::clip_triangle(tri, cfg.d, &mut parts);
                    for part in &parts {
                        if raster::fill_tri(&mut sink, cfg, part, lights) {
                            frame.tris.o += 1;
                        }
                    }
                }
            }
        }

        frame.pixels = sink.throughput();
        self.stats += frame.finish();
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{rgba, vec3};

    use super::*;

    #[test]
    fn stats_track_triangles_and_pixels() {
        let mut canvas = BufCanvas::new((16, 16), rgba(0, 0, 0, 255));
        let mut renderer = Renderer::new(Config {
            view_size: (2.0, 2.0),
            ..Config::default()
        });

        let visible = Triangle {
            points: [
                vec3(-1.0, -1.0, 2.0),
                vec3(1.0, -1.0, 2.0),
                vec3(0.0, 1.0, 2.0),
            ],
            normals: [vec3(0.0, 0.0, -1.0); 3],
            color: rgba(255, 0, 0, 255),
            specular: 0.0,
        };
        let hidden = Triangle {
            points: [
                vec3(-1.0, -1.0, 0.5),
                vec3(1.0, -1.0, 0.5),
                vec3(0.0, 1.0, 0.5),
            ],
            ..visible
        };

        renderer.render(&mut canvas, &[visible, hidden], &[Light::ambient(1.0)]);

        assert_eq!(renderer.stats.calls, 1);
        assert_eq!(renderer.stats.tris.i, 2);
        assert_eq!(renderer.stats.tris.o, 1);
        assert!(renderer.stats.pixels.o > 0);
        assert_eq!(renderer.stats.pixels.i, renderer.stats.pixels.o);
    }
}
