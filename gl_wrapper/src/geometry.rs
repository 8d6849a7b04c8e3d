use std::ffi::c_void;
use thiserror::Error;

const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

pub struct GeometryBuilder<'a> {
    attributes: Vec<VertexAttribute>,
    data: &'a [f32],
    indices: &'a [u32],
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32], indices: &'a [u32]) -> Self {
        Self {
            data,
            indices,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attr: VertexAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    /// Interleaved layout of one vertex, attribute `i` bound to location `i`.
    pub fn layout(&self) -> VertexLayout {
        let mut offset = 0;
        let mut slots = Vec::with_capacity(self.attributes.len());

        for attr in &self.attributes {
            slots.push(AttributeSlot {
                components: attr.size(),
                offset: offset * FLOAT_SIZE,
            });
            offset += attr.size();
        }

        VertexLayout {
            stride: offset * FLOAT_SIZE,
            slots,
        }
    }

    fn validate(&self, layout: &VertexLayout) -> Result<(), GeometryError> {
        let floats_per_vertex = layout.stride / FLOAT_SIZE;

        if floats_per_vertex == 0 || self.data.len() % floats_per_vertex != 0 {
            return Err(GeometryError::InvalidDataLength);
        }

        Ok(())
    }

    pub fn build(self) -> Result<Geometry, GeometryError> {
        let layout = self.layout();
        self.validate(&layout)?;

        let mut vao = 0;
        let mut vbo = 0;
        let mut ebo = 0;

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
            gl::GenBuffers(1, (&mut vbo) as *mut u32);
            gl::GenBuffers(1, (&mut ebo) as *mut u32);

            gl::BindVertexArray(vao);

            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(self.data) as isize,
                self.data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                std::mem::size_of_val(self.indices) as isize,
                self.indices.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            for (i, slot) in layout.slots.iter().enumerate() {
                gl::VertexAttribPointer(
                    i as u32,
                    slot.components as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    layout.stride as i32,
                    slot.offset as *const c_void,
                );
                gl::EnableVertexAttribArray(i as u32);
            }

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);

            // the element buffer binding is VAO state, leave it bound
            gl::BindVertexArray(0);
        }

        log::debug!(
            "Uploaded {} vertices and {} indices (stride {} bytes)",
            self.data.len() * FLOAT_SIZE / layout.stride,
            self.indices.len(),
            layout.stride
        );

        Ok(Geometry {
            vao,
            vbo,
            ebo,
            indices: self.indices.len(),
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
}

#[derive(Debug, Copy, Clone)]
pub enum VertexAttribute {
    Vec2,
    Vec3,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct AttributeSlot {
    pub components: usize,
    pub offset: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub stride: usize,
    pub slots: Vec<AttributeSlot>,
}

pub struct Geometry {
    vao: u32,
    vbo: u32,
    ebo: u32,
    indices: usize,
}

impl Geometry {
    pub fn vao(&self) -> u32 {
        self.vao
    }
    pub fn indices(&self) -> usize {
        self.indices
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
            gl::DeleteBuffers(1, (&self.vbo) as *const u32);
            gl::DeleteBuffers(1, (&self.ebo) as *const u32);
        }
    }
}
