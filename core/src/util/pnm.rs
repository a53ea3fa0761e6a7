//! Writing rendered images in the binary PPM (P6) format.
//!
//! PPM is the pixmap member of the venerable NetPBM family: a tiny
//! textual header followed by raw RGB bytes, understood by nearly
//! every image viewer and converter.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::math::Color;
use crate::util::buf::Buf2;

/// Writes `buf` to `dest` as a binary P6 pixmap. The alpha channel is
/// dropped.
pub fn write_ppm(mut dest: impl Write, buf: &Buf2<Color>) -> io::Result<()> {
    writeln!(dest, "P6 {} {} 255", buf.width(), buf.height())?;
    for row in buf.rows() {
        for color in row {
            let [r, g, b, _] = color.0;
            dest.write_all(&[r, g, b])?;
        }
    }
    Ok(())
}

/// Saves `buf` to a file at `path` in binary PPM format.
pub fn save_ppm(path: impl AsRef<Path>, buf: &Buf2<Color>) -> io::Result<()> {
    let mut dest = BufWriter::new(File::create(path)?);
    write_ppm(&mut dest, buf)?;
    dest.flush()
}
