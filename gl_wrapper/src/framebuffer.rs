use std::ffi::c_void;

use crate::{check_error, GlError};

/// Reads the front color buffer of the default framebuffer as tightly
/// packed RGB8, bottom row first.
pub fn read_front_rgb8(width: u32, height: u32) -> Result<Vec<u8>, GlError> {
    let mut buf = vec![0_u8; width as usize * height as usize * 3];

    unsafe {
        gl::PixelStorei(gl::PACK_ALIGNMENT, 1);

        gl::ReadBuffer(gl::FRONT);
        check_error()?;

        gl::ReadPixels(
            0,
            0,
            width as i32,
            height as i32,
            gl::RGB,
            gl::UNSIGNED_BYTE,
            buf.as_mut_ptr() as *mut c_void,
        );
        check_error()?;
    }

    Ok(buf)
}
