use std::path::PathBuf;

use clap::Parser;

use winit::event::VirtualKeyCode;
use winit::event_loop::EventLoop;

use hello_gl::error::AppError;
use hello_gl::frame::Frame;
use hello_gl::mesh::Mesh;
use hello_gl::window::{quit_on, GlWindow, ViewportPolicy, WindowConfig};
use hello_gl::{CLEAR_COLOR, DEFAULT_TEXTURE, FIXED_VIEWPORT, TITLE};

mod args;

use args::Args;

fn main() {
    hello_gl::init_logger();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    if args.image.is_none() {
        let name = std::env::args().next().unwrap_or_else(|| "viewer".into());
        eprintln!("Usage: {name} [IMAGE]");
    }

    if let Err(e) = run(&args) {
        log::error!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let mut event_loop = EventLoop::new();
    let mut gl_window = GlWindow::new(
        &event_loop,
        &WindowConfig {
            width: args.width,
            height: args.height,
            title: TITLE,
            visible: true,
        },
    )?;

    let viewport = if args.fixed_viewport {
        ViewportPolicy::Fixed {
            width: FIXED_VIEWPORT.0,
            height: FIXED_VIEWPORT.1,
        }
    } else {
        ViewportPolicy::Passthrough
    };
    gl_window.set_resize_callback(viewport.callback());
    gl_window.set_key_callback(quit_on(VirtualKeyCode::Q));

    let image = args
        .image
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEXTURE));

    let mut frame = Frame::new(Mesh::Textured, CLEAR_COLOR)?.with_texture(&image)?;

    let res = gl_window.run(&mut event_loop, || {
        frame.draw();
        Ok(())
    });

    log::info!("Window closed");
    frame.teardown();

    res
}
