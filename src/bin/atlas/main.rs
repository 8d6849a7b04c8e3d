use clap::Parser;

use hello_gl::error::AppError;
use hello_gl::text::TextContext;

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
    let text = TextContext::from_path(&args.font, args.size)?;

    log::info!(
        "Loaded '{}': {} glyphs at {}px, line height {:?}",
        args.font.display(),
        text.glyph_count(),
        text.px(),
        text.line_height()
    );

    Ok(())
}
