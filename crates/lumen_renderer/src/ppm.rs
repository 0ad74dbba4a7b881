//! ASCII PPM (P3) output.

use crate::renderer::{color_to_rgb, ImageBuffer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `image` as ASCII PPM: a `P3` header, then one `r g b` line per
/// pixel, top row first.
pub fn write_ppm<W: Write>(mut writer: W, image: &ImageBuffer) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}

impl ImageBuffer {
    /// Save as an ASCII PPM file.
    pub fn save_ppm(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        write_ppm(BufWriter::new(file), self)
    }
}
