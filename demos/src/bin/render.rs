//! Renders a textual scene stream to a PPM image.
//!
//! Usage: `render [SCENE] [OUT.ppm]`
//!
//! Reads the scene from SCENE, or from stdin when SCENE is `-` or
//! absent, and writes the rendered image to OUT.ppm (default
//! `out.ppm`). Render statistics go to stderr.

use std::process::ExitCode;
use std::{env, error::Error, fs::File, io};

use tg::prelude::*;
use tg::scene::{read_scene, SceneFile};
use tg::util::pnm::save_ppm;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("render: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let scene_path = args.next();
    let out_path = args.next().unwrap_or_else(|| "out.ppm".into());

    let SceneFile { config, canvas_size, scene } =
        match scene_path.as_deref() {
            None | Some("-") => read_scene(io::stdin().lock())?,
            Some(path) => read_scene(File::open(path)?)?,
        };

    let mut canvas = BufCanvas::new(canvas_size, rgba(255, 255, 255, 255));
    let mut renderer = Renderer::new(config);
    renderer.render(&mut canvas, &scene.triangles, &scene.lights);

    save_ppm(&out_path, canvas.buf())?;
    eprintln!("{}", renderer.stats);
    Ok(())
}
