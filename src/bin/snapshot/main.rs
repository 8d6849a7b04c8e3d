use clap::Parser;

use winit::event_loop::EventLoop;

use hello_gl::error::AppError;
use hello_gl::export::export_front_buffer;
use hello_gl::frame::Frame;
use hello_gl::mesh::Mesh;
use hello_gl::window::{GlWindow, ViewportPolicy, WindowConfig};
use hello_gl::{CLEAR_COLOR, TITLE};

mod args;

use args::Args;

fn main() {
    hello_gl::init_logger();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    if let Err(e) = run(&args) {
        log::error!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let event_loop = EventLoop::new();
    let mut gl_window = GlWindow::new(
        &event_loop,
        &WindowConfig {
            width: args.width,
            height: args.height,
            title: TITLE,
            visible: false,
        },
    )?;
    gl_window.set_resize_callback(ViewportPolicy::Passthrough.callback());

    let mut frame = Frame::new(Mesh::Colored, CLEAR_COLOR)?;

    frame.draw();
    gl_window.swap_buffers()?;

    export_front_buffer(&args.output, args.width, args.height)?;

    frame.teardown();

    Ok(())
}
