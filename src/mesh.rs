use gl_wrapper::geometry::{Geometry, GeometryBuilder, GeometryError, VertexAttribute};

/// Position and color, corners at ±0.5.
#[rustfmt::skip]
pub const COLORED_QUAD: [f32; 24] = [
    0.5, 0.5, 0.0,    1.0, 0.0, 0.0,
    0.5, -0.5, 0.0,   0.0, 1.0, 0.0,
    -0.5, 0.5, 0.0,   0.0, 0.0, 1.0,
    -0.5, -0.5, 0.0,  0.0, 0.0, 0.0,
];

/// Position, color and texture coordinate, covering the whole viewport.
#[rustfmt::skip]
pub const TEXTURED_QUAD: [f32; 32] = [
    1.0, 1.0, 0.0,    1.0, 0.0, 0.0,  1.0, 1.0,
    1.0, -1.0, 0.0,   0.0, 1.0, 0.0,  1.0, 0.0,
    -1.0, 1.0, 0.0,   0.0, 0.0, 0.0,  0.0, 1.0,
    -1.0, -1.0, 0.0,  0.0, 0.0, 1.0,  0.0, 0.0,
];

#[rustfmt::skip]
pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 2,
    1, 2, 3,
];

#[derive(Debug, Copy, Clone)]
pub enum Mesh {
    Colored,
    Textured,
}

impl Mesh {
    pub fn vertices(&self) -> &'static [f32] {
        match self {
            Mesh::Colored => &COLORED_QUAD,
            Mesh::Textured => &TEXTURED_QUAD,
        }
    }

    pub fn attributes(&self) -> &'static [VertexAttribute] {
        match self {
            Mesh::Colored => &[VertexAttribute::Vec3, VertexAttribute::Vec3],
            Mesh::Textured => &[
                VertexAttribute::Vec3,
                VertexAttribute::Vec3,
                VertexAttribute::Vec2,
            ],
        }
    }

    fn builder(&self) -> GeometryBuilder<'static> {
        self.attributes()
            .iter()
            .fold(
                GeometryBuilder::new(self.vertices(), &QUAD_INDICES),
                |builder, attr| builder.with_attribute(*attr),
            )
    }

    /// Needs a current GL context.
    pub fn upload(&self) -> Result<Geometry, GeometryError> {
        self.builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_layout() {
        let layout = Mesh::Colored.builder().layout();

        assert_eq!(layout.stride, 6 * 4);
        assert_eq!(layout.slots[1].offset, 3 * 4);
    }

    #[test]
    fn textured_layout() {
        let layout = Mesh::Textured.builder().layout();

        assert_eq!(layout.stride, 8 * 4);
        assert_eq!(layout.slots[2].components, 2);
        assert_eq!(layout.slots[2].offset, 6 * 4);
    }

    #[test]
    fn indices_reference_existing_vertices() {
        for mesh in [Mesh::Colored, Mesh::Textured] {
            let stride = mesh.attributes().iter().map(|a| a.size()).sum::<usize>();
            let count = mesh.vertices().len() / stride;

            assert_eq!(mesh.vertices().len() % stride, 0);
            assert!(QUAD_INDICES.iter().all(|i| (*i as usize) < count));
        }
    }
}
