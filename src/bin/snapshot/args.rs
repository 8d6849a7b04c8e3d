use std::path::PathBuf;

use clap::Parser;

use hello_gl::{HEIGHT, WIDTH};

/// Renders the colored quad once and writes the frame to a png
#[derive(Debug, Parser)]
pub struct Args {
    /// Width of the window and of the exported image
    #[arg(long, default_value_t = WIDTH)]
    pub width: u32,
    /// Height of the window and of the exported image
    #[arg(long, default_value_t = HEIGHT)]
    pub height: u32,
    /// Where to write the png
    #[arg(short, long, default_value = "out.png")]
    pub output: PathBuf,
}
