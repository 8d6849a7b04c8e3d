use std::path::PathBuf;

use clap::Parser;

use hello_gl::{HEIGHT, WIDTH};

/// Shows a textured quad until Q is pressed or the window is closed
#[derive(Debug, Parser)]
pub struct Args {
    /// Png to put on the quad
    pub image: Option<PathBuf>,
    #[arg(long, default_value_t = WIDTH)]
    pub width: u32,
    #[arg(long, default_value_t = HEIGHT)]
    pub height: u32,
    /// Pin the viewport to 600x600 instead of following the window size
    #[arg(long)]
    pub fixed_viewport: bool,
}
