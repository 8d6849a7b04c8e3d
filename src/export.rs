use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use gl_wrapper::framebuffer::read_front_rgb8;

use crate::error::AppError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Pixel buffer holds {actual} bytes, {expected} expected")]
    BufferSize { expected: usize, actual: usize },
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to encode png: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// Reads back the front buffer and writes it to `path` as an RGB png.
pub fn export_front_buffer(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    let path = path.as_ref();
    let mut pixels = read_front_rgb8(width, height)?;

    // gl hands out rows bottom-up
    flip_rows(&mut pixels, width as usize * 3);

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_owned(),
        source,
    })?;
    write_png(BufWriter::new(file), width, height, &pixels)?;

    log::info!("Exported {width}x{height} frame to '{}'", path.display());

    Ok(())
}

/// Encodes tightly packed RGB8 rows, `width * 3` bytes each.
pub fn write_png<W: Write>(
    writer: W,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<(), ExportError> {
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(ExportError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    writer.finish()?;

    Ok(())
}

pub fn flip_rows(pixels: &mut [u8], stride: usize) {
    if stride == 0 {
        return;
    }

    let rows = pixels.len() / stride;

    for i in 0..rows / 2 {
        let (top, bottom) = pixels.split_at_mut((rows - 1 - i) * stride);
        top[i * stride..(i + 1) * stride].swap_with_slice(&mut bottom[..stride]);
    }
}
