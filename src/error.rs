use thiserror::Error;

use gl_wrapper::geometry::GeometryError;
use gl_wrapper::program::ProgramError;
use gl_wrapper::texture::TextureError;
use gl_wrapper::GlError;

use crate::export::ExportError;
use crate::text::FontError;
use crate::texture::LoadError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to create window: {0}")]
    Window(String),
    #[error("Failed to create OpenGL context: {0}")]
    Context(#[from] glutin::error::Error),
    #[error("Failed to initialize OpenGL function loader")]
    Loader,
    #[error("Invalid window size {0}x{1}")]
    InvalidSize(u32, u32),
    #[error(transparent)]
    Program(#[from] ProgramError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Texture(#[from] TextureError),
    #[error(transparent)]
    Gl(#[from] GlError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Font(#[from] FontError),
}
