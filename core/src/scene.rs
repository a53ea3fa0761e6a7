//! Scene content and its textual interchange format.
//!
//! A scene stream is a whitespace-separated token sequence:
//!
//! ```text
//! d
//! vw vh
//! mode          (wireframe | fill)
//! projection    (isometric | perspective)
//! W H
//! n-lights
//!   type intensity [x y z]      (ambient | point | directional)
//!   ...
//! n-triangles
//!   x0 y0 z0  x1 y1 z1  x2 y2 z2
//!   r g b
//!   specular
//!   ...
//! ```
//!
//! Triangle records carry no normals; every parsed triangle is
//! assigned its face normal at all three vertices, so flat shading
//! falls out of the ordinary Gouraud path.

use std::fmt::{self, Display, Formatter};
use std::io::{self, Read};
use std::str::SplitAsciiWhitespace;

use crate::geom::Triangle;
use crate::math::{rgba, vec3, Vec3};
use crate::render::{Config, Light, Mode, Projection};

/// The triangles and lights of a scene.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub triangles: Vec<Triangle>,
    pub lights: Vec<Light>,
}

/// A fully parsed scene stream: render configuration, canvas size,
/// and scene content.
#[derive(Clone, Debug)]
pub struct SceneFile {
    pub config: Config,
    pub canvas_size: (u32, u32),
    pub scene: Scene,
}

/// Error while reading or decoding a scene stream.
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred.
    Io(io::Error),
    /// The stream ended before the scene was complete.
    UnexpectedEnd,
    /// A token could not be parsed as a finite number.
    InvalidNumber(String),
    /// An unrecognized mode, projection, or light-type word.
    UnknownWord(String),
    /// A numeric value outside its valid range.
    InvalidValue(&'static str),
}

/// Result of reading or decoding a scene stream.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {e}"),
            Error::UnexpectedEnd => f.write_str("unexpected end of input"),
            Error::InvalidNumber(tok) => write!(f, "invalid number {tok:?}"),
            Error::UnknownWord(tok) => write!(f, "unknown word {tok:?}"),
            Error::InvalidValue(what) => write!(f, "invalid value for {what}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Reads and parses a scene stream.
pub fn read_scene(mut input: impl Read) -> Result<SceneFile> {
    let mut src = String::new();
    input.read_to_string(&mut src)?;
    parse_scene(&src)
}

/// Parses a scene stream from a string.
pub fn parse_scene(src: &str) -> Result<SceneFile> {
    let mut toks = Tokens(src.split_ascii_whitespace());

    let config = parse_config(&mut toks)?;
    let canvas_size = (toks.dim()?, toks.dim()?);

    let mut scene = Scene::default();
    for _ in 0..toks.count()? {
        scene.lights.push(parse_light(&mut toks)?);
    }
    for _ in 0..toks.count()? {
        scene.triangles.push(parse_triangle(&mut toks)?);
    }

    Ok(SceneFile { config, canvas_size, scene })
}

struct Tokens<'a>(SplitAsciiWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn word(&mut self) -> Result<&'a str> {
        self.0.next().ok_or(Error::UnexpectedEnd)
    }

    fn float(&mut self) -> Result<f32> {
        let tok = self.word()?;
        match tok.parse::<f32>() {
            Ok(val) if val.is_finite() => Ok(val),
            _ => Err(Error::InvalidNumber(tok.into())),
        }
    }

    fn vec3(&mut self) -> Result<Vec3> {
        Ok(vec3(self.float()?, self.float()?, self.float()?))
    }

    fn channel(&mut self) -> Result<u8> {
        let tok = self.word()?;
        tok.parse().map_err(|_| Error::InvalidNumber(tok.into()))
    }

    fn count(&mut self) -> Result<usize> {
        let tok = self.word()?;
        tok.parse().map_err(|_| Error::InvalidNumber(tok.into()))
    }

    fn dim(&mut self) -> Result<u32> {
        match self.count()? {
            0 => Err(Error::InvalidValue("canvas size")),
            n => Ok(n as u32),
        }
    }
}

fn parse_config(toks: &mut Tokens) -> Result<Config> {
    let d = toks.float()?;
    if d <= 0.0 {
        return Err(Error::InvalidValue("near-plane distance"));
    }

    let view_size = (toks.float()?, toks.float()?);
    if view_size.0 <= 0.0 || view_size.1 <= 0.0 {
        return Err(Error::InvalidValue("view extents"));
    }

    let mode = match toks.word()? {
        "wireframe" => Mode::Wireframe,
        "fill" => Mode::Fill,
        other => return Err(Error::UnknownWord(other.into())),
    };
    let projection = match toks.word()? {
        "isometric" => Projection::Isometric,
        "perspective" => Projection::Perspective,
        other => return Err(Error::UnknownWord(other.into())),
    };

    Ok(Config { d, view_size, mode, projection })
}

fn parse_light(toks: &mut Tokens) -> Result<Light> {
    Ok(match toks.word()? {
        "ambient" => Light::ambient(toks.float()?),
        "point" => Light::point(toks.float()?, toks.vec3()?),
        "directional" => Light::directional(toks.float()?, toks.vec3()?),
        other => return Err(Error::UnknownWord(other.into())),
    })
}

fn parse_triangle(toks: &mut Tokens) -> Result<Triangle> {
    let points = [toks.vec3()?, toks.vec3()?, toks.vec3()?];
    let color = rgba(toks.channel()?, toks.channel()?, toks.channel()?, 255);
    let specular = toks.float()?;

    let mut tri = Triangle {
        points,
        normals: [Vec3::ZERO; 3],
        color,
        specular,
    };
    tri.normals = [tri.face_normal(); 3];
    Ok(tri)
}
