//! Windowed viewer: a slowly rotating lit cylinder and cube.

use std::ops::ControlFlow::Continue;

use tg::prelude::*;
use tg_front::minifb::Window;
use tg_geom::{cube, cylinder, place};

fn main() {
    let mut renderer = Renderer::new(Config {
        d: 1.0,
        view_size: (2.0, 2.0),
        mode: Mode::Fill,
        projection: Projection::Perspective,
    });

    let cylinder = cylinder(0.8, 1.6, 24, rgba(220, 80, 60, 255), 50.0);
    let cube = cube(1.2, rgba(70, 130, 200, 255), 10.0);

    let lights = [
        Light::ambient(0.3),
        Light::point(0.6, vec3(2.0, 2.0, 0.0)),
        Light::directional(0.2, vec3(1.0, 4.0, 4.0)),
    ];

    let mut win = Window::builder()
        .size(640, 640)
        .title("trigon//solids")
        .build();

    win.run(|canvas, t| {
        let secs = t.as_secs_f32();

        let mut tris = place(
            &cylinder,
            1.0,
            vec3(secs * 0.4, secs * 0.7, 0.0),
            vec3(-1.1, 0.0, 6.0),
        );
        tris.extend(place(
            &cube,
            1.0,
            vec3(0.4, secs * 0.5, 0.0),
            vec3(1.3, 0.0, 7.0),
        ));

        renderer.render(canvas, &tris, &lights);
        Continue(())
    });

    eprintln!("{}", renderer.stats);
}
