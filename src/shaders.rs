use gl_wrapper::program::{Program, ProgramBuilder, ProgramError};

use crate::mesh::Mesh;

pub const COLORED_VERT: &str = include_str!("shaders/colored.vert.glsl");
pub const COLORED_FRAG: &str = include_str!("shaders/colored.frag.glsl");
pub const TEXTURED_VERT: &str = include_str!("shaders/textured.vert.glsl");
pub const TEXTURED_FRAG: &str = include_str!("shaders/textured.frag.glsl");

/// Sources matching the attribute layout of `mesh`.
pub fn sources(mesh: Mesh) -> (&'static str, &'static str) {
    match mesh {
        Mesh::Colored => (COLORED_VERT, COLORED_FRAG),
        Mesh::Textured => (TEXTURED_VERT, TEXTURED_FRAG),
    }
}

pub fn build(mesh: Mesh) -> Result<Program, ProgramError> {
    let (vert, frag) = sources(mesh);

    ProgramBuilder::new(vert, frag).build()
}
