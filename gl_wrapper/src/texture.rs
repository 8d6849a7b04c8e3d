use std::ffi::c_void;
use thiserror::Error;

pub struct Texture2D {
    id: u32,
}

impl Texture2D {
    /// Uploads `data` as the base level and builds the mip chain.
    pub fn new(
        width: u32,
        height: u32,
        data: &[u8],
        format: TextureFormats,
        wrap: TextureWrap,
        filter: TextureFilter,
    ) -> Result<Self, TextureError> {
        if (width as usize * height as usize * format.channels() as usize) != data.len() {
            return Err(TextureError::InvalidSrcLength);
        }

        let mut id = 0;

        unsafe {
            gl::GenTextures(1, (&mut id) as *mut u32);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap.gl_enum() as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, wrap.gl_enum() as i32);
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MIN_FILTER,
                filter.min_filter() as i32,
            );
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MAG_FILTER,
                filter.mag_filter() as i32,
            );

            // rgb rows are not 4 byte aligned in general
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);

            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                format.internal_format() as i32,
                width as i32,
                height as i32,
                0,
                format.pixel_format(),
                gl::UNSIGNED_BYTE,
                data.as_ptr() as *const c_void,
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }

        Ok(Self { id })
    }

    pub fn bind(&self, unit: u8) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit as u32);
            gl::BindTexture(gl::TEXTURE_2D, self.id)
        }
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, (&self.id) as *const u32);
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("Invalid source data length")]
    InvalidSrcLength,
}

#[derive(Debug, Copy, Clone)]
pub enum TextureFormats {
    Rgb8,
}

impl TextureFormats {
    pub fn channels(&self) -> u8 {
        match self {
            TextureFormats::Rgb8 => 3,
        }
    }

    fn internal_format(&self) -> u32 {
        match self {
            TextureFormats::Rgb8 => gl::RGB8,
        }
    }

    fn pixel_format(&self) -> u32 {
        match self {
            TextureFormats::Rgb8 => gl::RGB,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub enum TextureWrap {
    MirroredRepeat,
}

impl TextureWrap {
    fn gl_enum(&self) -> u32 {
        match self {
            TextureWrap::MirroredRepeat => gl::MIRRORED_REPEAT,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub enum TextureFilter {
    /// Linear between and within mip levels.
    Trilinear,
}

impl TextureFilter {
    fn min_filter(&self) -> u32 {
        match self {
            TextureFilter::Trilinear => gl::LINEAR_MIPMAP_LINEAR,
        }
    }

    fn mag_filter(&self) -> u32 {
        match self {
            TextureFilter::Trilinear => gl::LINEAR,
        }
    }
}
