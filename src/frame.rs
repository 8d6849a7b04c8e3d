use std::path::Path;

use gl_wrapper::geometry::Geometry;
use gl_wrapper::program::Program;
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::texture::Texture2D;

use crate::error::AppError;
use crate::mesh::Mesh;
use crate::texture::load_texture;
use crate::{shaders, ClearColor};

/// Everything the frame driver keeps on the GPU. Needs the context that
/// created it to be current until [`Frame::teardown`].
pub struct Frame {
    program: Program,
    geometry: Geometry,
    texture: Option<Texture2D>,
    renderer: GlRenderer,
    clear_color: ClearColor,
}

impl Frame {
    pub fn new(mesh: Mesh, clear_color: ClearColor) -> Result<Self, AppError> {
        let program = shaders::build(mesh)?;
        let geometry = mesh.upload()?;

        Ok(Self {
            program,
            geometry,
            texture: None,
            renderer: GlRenderer::new(),
            clear_color,
        })
    }

    pub fn with_texture(mut self, path: impl AsRef<Path>) -> Result<Self, AppError> {
        self.texture = Some(load_texture(path)?);
        Ok(self)
    }

    pub fn draw(&mut self) {
        let c = self.clear_color;
        self.renderer.clear_color(c.r, c.g, c.b);

        if let Some(texture) = &self.texture {
            texture.bind(0);
        }

        self.renderer.draw(&self.geometry, &self.program);
    }

    /// Releases the vertex array, buffers, texture and program.
    pub fn teardown(self) {
        let Self {
            program,
            geometry,
            texture,
            ..
        } = self;

        drop(geometry);
        drop(texture);
        drop(program);

        log::debug!("Released GPU resources");
    }
}
