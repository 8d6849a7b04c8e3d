use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageReader};
use thiserror::Error;

use gl_wrapper::texture::{Texture2D, TextureFilter, TextureFormats, TextureWrap};

use crate::error::AppError;

/// Tightly packed RGB8 pixels, top row first.
pub struct RgbImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

#[derive(Debug, Error)]
#[error("Failed to load '{}': {source}", path.display())]
pub struct LoadError {
    pub path: PathBuf,
    pub source: ImageError,
}

/// Decodes any supported format to 8-bit RGB; alpha is dropped.
pub fn decode_rgb8(path: impl AsRef<Path>) -> Result<RgbImage, LoadError> {
    let path = path.as_ref();
    let rgb = open(path)
        .map_err(|source| LoadError {
            path: path.to_owned(),
            source,
        })?
        .to_rgb8();

    Ok(RgbImage {
        width: rgb.width(),
        height: rgb.height(),
        data: rgb.into_raw(),
    })
}

/// The format comes from the file contents, the extension is only a hint.
fn open(path: &Path) -> Result<DynamicImage, ImageError> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Decodes `path` and uploads it with mirrored wrapping and trilinear
/// filtering. The host copy is dropped once the upload returns.
pub fn load_texture(path: impl AsRef<Path>) -> Result<Texture2D, AppError> {
    let path = path.as_ref();
    let image = decode_rgb8(path)?;

    log::info!(
        "Loaded '{}' ({}x{})",
        path.display(),
        image.width,
        image.height
    );

    let texture = Texture2D::new(
        image.width,
        image.height,
        &image.data,
        TextureFormats::Rgb8,
        TextureWrap::MirroredRepeat,
        TextureFilter::Trilinear,
    )?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{GrayImage, Luma, Rgb, Rgba, RgbaImage};

    #[test]
    fn rgba_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
        img.put_pixel(1, 0, Rgba([4, 5, 6, 0]));
        img.save(&path).unwrap();

        let img = decode_rgb8(&path).unwrap();

        assert_eq!((img.width, img.height), (2, 1));
        assert_eq!(img.data, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn grayscale_is_replicated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let mut img = GrayImage::new(1, 2);
        img.put_pixel(0, 0, Luma([10]));
        img.put_pixel(0, 1, Luma([200]));
        img.save(&path).unwrap();

        let img = decode_rgb8(&path).unwrap();

        assert_eq!(img.data, vec![10, 10, 10, 200, 200, 200]);
    }

    #[test]
    fn jpeg_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brick.jpg");
        image::RgbImage::from_pixel(4, 4, Rgb([200, 40, 30]))
            .save(&path)
            .unwrap();

        let img = decode_rgb8(&path).unwrap();

        assert_eq!((img.width, img.height), (4, 4));
        assert_eq!(img.data.len(), 4 * 4 * 3);
        // lossy, only roughly the same color
        assert!(img.data[0] > 150 && img.data[1] < 100 && img.data[2] < 100);
    }

    #[test]
    fn format_is_sniffed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let jpeg = dir.path().join("brick.jpg");
        let misnamed = dir.path().join("brick.png");
        image::RgbImage::from_pixel(3, 5, Rgb([0, 51, 128]))
            .save(&jpeg)
            .unwrap();
        std::fs::rename(&jpeg, &misnamed).unwrap();

        let img = decode_rgb8(&misnamed).unwrap();

        assert_eq!((img.width, img.height), (3, 5));
    }

    #[test]
    fn bundled_texture_decodes() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(crate::DEFAULT_TEXTURE);

        let img = decode_rgb8(path).unwrap();

        assert_eq!((img.width, img.height), (64, 64));
        assert_eq!(img.data.len(), 64 * 64 * 3);
    }

    #[test]
    fn missing_file_fails_to_load() {
        let err = decode_rgb8("does/not/exist.png").err().unwrap();

        assert!(err.to_string().starts_with("Failed to load 'does/not/exist.png'"));
    }

    #[test]
    fn garbage_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brick.png");
        std::fs::write(&path, b"plain text, no image magic here").unwrap();

        let err = decode_rgb8(&path).err().unwrap();

        assert!(err.to_string().starts_with("Failed to load '"));
    }

    #[test]
    fn truncated_jpeg_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brick.jpg");
        std::fs::write(&path, b"\xff\xd8\xff\xe0\0\x10JFIF").unwrap();

        let err = decode_rgb8(&path).err().unwrap();

        assert!(err.to_string().contains("Failed to load"));
    }
}
