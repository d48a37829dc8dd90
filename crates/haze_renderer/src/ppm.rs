//! Plain-text PPM (P3) output.
//!
//! The header is four lines: `P3`, width, height, and the maximum
//! channel value 255. Pixels follow in row-major order, each as three
//! space-separated decimal bytes with a single trailing space and no
//! per-pixel line breaks. P3 readers split on whitespace, so the
//! format stays valid.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::renderer::ImageBuffer;

/// Serialize an image buffer as P3 to any writer.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer) -> io::Result<()> {
    write!(writer, "P3\n{}\n{}\n255\n", image.width, image.height)?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = image.get_rgb8(x, y);
            write!(writer, "{} {} {} ", r, g, b)?;
        }
    }

    Ok(())
}

/// Write an image buffer to a P3 file.
///
/// Buffered; the file is flushed and closed when the writer drops.
/// Any I/O failure propagates to the caller.
pub fn save_ppm<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, image)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, Camera};
    use haze_core::World;
    use haze_math::DVec3;

    #[test]
    fn test_write_ppm_exact_bytes() {
        let image = ImageBuffer {
            width: 2,
            height: 1,
            pixels: vec![DVec3::ZERO, DVec3::ONE],
        };

        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "P3\n2\n1\n255\n0 0 0 255 255 255 ");
    }

    #[test]
    fn test_full_render_round_trip() {
        // Header exactly P3/800/600/255, then 800*600 byte triplets.
        let camera = Camera::default();
        let image = render(&camera, &World::demo());

        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("P3\n800\n600\n255\n"));

        let body = &text["P3\n800\n600\n255\n".len()..];
        let values: Vec<u32> = body
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(values.len(), 800 * 600 * 3);
        assert!(values.iter().all(|&v| v <= 255));
    }
}
