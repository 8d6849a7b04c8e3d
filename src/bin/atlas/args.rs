use std::path::PathBuf;

use clap::Parser;

/// Loads a font face at a fixed pixel size
#[derive(Debug, Parser)]
pub struct Args {
    /// TrueType or OpenType font file
    pub font: PathBuf,
    /// Pixel size of the face
    #[arg(short, long, default_value_t = 48.0)]
    pub size: f32,
}
