use std::io::Write;

pub mod error;
pub mod export;
pub mod frame;
pub mod mesh;
pub mod shaders;
pub mod text;
pub mod texture;
pub mod window;

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 400;
pub const TITLE: &str = "Hello, OpenGL!";

pub const DEFAULT_TEXTURE: &str = "res/brick.png";

/// Viewport pinned by `--fixed-viewport`, regardless of the window size.
pub const FIXED_VIEWPORT: (u32, u32) = (600, 600);

pub const CLEAR_COLOR: ClearColor = ClearColor {
    r: 0.0,
    g: 0.2,
    b: 0.5,
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ClearColor {
    /// Value a UNORM8 framebuffer stores for this color.
    pub fn rgb8(&self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;

        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

/// Installs the global logger, `RUST_LOG` overrides the `info` default.
pub fn init_logger() {
    let res = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{}: {}: {}",
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if let Err(e) = res {
        eprintln!("Warning: Could not initialize logger: {e}");
    }
}
