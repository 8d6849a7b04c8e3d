use gl::types::{GLenum, GLuint};
use std::ffi::{c_char, CString};
use thiserror::Error;

const INFO_LOG_LEN: usize = 1024;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }

    fn gl_enum(&self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    pub fn build(self) -> Result<Program, ProgramError> {
        let vert_src = source(ShaderStage::Vertex, self.vert)?;
        let frag_src = source(ShaderStage::Fragment, self.frag)?;

        let vert = compile(ShaderStage::Vertex, &vert_src)?;
        let frag = match compile(ShaderStage::Fragment, &frag_src) {
            Ok(f) => f,
            Err(e) => {
                unsafe { gl::DeleteShader(vert) };
                return Err(e);
            }
        };

        let mut success: i32 = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            // linked program keeps its own copy of the binaries
            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let mut buf = [0_u8; INFO_LOG_LEN];

                gl::GetProgramInfoLog(
                    program,
                    INFO_LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(ProgramError::Linking(info_log(&buf)));
            }

            log::debug!("Linked shader program {program}");

            Ok(Program { id: program })
        }
    }
}

fn source(stage: ShaderStage, src: &str) -> Result<CString, ProgramError> {
    CString::new(src).map_err(|_| ProgramError::NulInSource(stage.name()))
}

fn compile(stage: ShaderStage, src: &CString) -> Result<GLuint, ProgramError> {
    let mut success: i32 = 0;

    unsafe {
        let shader = gl::CreateShader(stage.gl_enum());

        gl::ShaderSource(
            shader,
            1,
            (&src.as_ptr()) as *const *const c_char,
            std::ptr::null(),
        );

        gl::CompileShader(shader);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
        if success != 1 {
            let mut buf = [0_u8; INFO_LOG_LEN];

            gl::GetShaderInfoLog(
                shader,
                INFO_LOG_LEN as i32,
                std::ptr::null_mut(),
                buf.as_mut_ptr() as *mut c_char,
            );
            gl::DeleteShader(shader);

            return Err(ProgramError::Compilation {
                stage: stage.name(),
                log: info_log(&buf),
            });
        }

        Ok(shader)
    }
}

/// Driver logs are NUL terminated unless they fill the whole buffer.
fn info_log(buf: &[u8]) -> String {
    let data = match buf.iter().position(|b| *b == 0) {
        Some(end) => &buf[..end],
        None => buf,
    };

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("Failed to compile {stage} shader: {log}")]
    Compilation { stage: &'static str, log: String },
    #[error("Failed to link shader program: {0}")]
    Linking(String),
    #[error("Failed to compile {0} shader: source contains a NUL byte")]
    NulInSource(&'static str),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_nul() {
        let mut buf = [0_u8; 32];
        buf[..11].copy_from_slice(b"0:1: error\n");

        assert_eq!(info_log(&buf), "0:1: error");
    }

    #[test]
    fn info_log_without_terminator() {
        assert_eq!(info_log(b"truncated"), "truncated");
    }

    #[test]
    fn compile_error_names_stage() {
        let err = ProgramError::Compilation {
            stage: ShaderStage::Fragment.name(),
            log: "0:3(1): error: syntax error".into(),
        };

        assert_eq!(
            err.to_string(),
            "Failed to compile fragment shader: 0:3(1): error: syntax error"
        );
    }

    #[test]
    fn nul_in_source_is_rejected_before_gl() {
        let err = source(ShaderStage::Vertex, "void main() {}\0").unwrap_err();

        assert!(err.to_string().starts_with("Failed to compile vertex shader"));
    }
}
