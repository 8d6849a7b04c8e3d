use thiserror::Error;

pub mod framebuffer;
pub mod geometry;
pub mod program;
pub mod renderer;
pub mod texture;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlError {
    #[error("OpenGL error: {0}")]
    Code(u32),
}

/// Pops one entry off the GL error queue.
pub fn check_error() -> Result<(), GlError> {
    let err = unsafe { gl::GetError() };

    if err == gl::NO_ERROR {
        Ok(())
    } else {
        Err(GlError::Code(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_has_code() {
        assert_eq!(
            GlError::Code(gl::INVALID_ENUM).to_string(),
            "OpenGL error: 1280"
        );
    }
}
