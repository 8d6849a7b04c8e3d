//! These open real windows, run them with `cargo test -- --ignored` on a
//! machine with a display and an OpenGL 4.1 driver.

use std::fs::File;
use std::process::Command;

use hello_gl::CLEAR_COLOR;

fn read_rgb(path: &std::path::Path) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.line_size, info.width as usize * 3);

    (info.width, info.height, buf)
}

#[test]
#[ignore = "needs a display"]
fn snapshot_background_is_clear_color() {
    let dir = tempfile::tempdir().unwrap();

    for (width, height) in [(600, 400), (97, 61)] {
        let output = dir.path().join(format!("out_{width}x{height}.png"));

        let status = Command::new(env!("CARGO_BIN_EXE_snapshot"))
            .args(["--width", &width.to_string(), "--height", &height.to_string()])
            .arg("--output")
            .arg(&output)
            .status()
            .unwrap();
        assert!(status.success());

        let (w, h, pixels) = read_rgb(&output);
        assert_eq!((w, h), (width, height));

        // the quad spans the middle half, corners are background
        let stride = w as usize * 3;
        let corners = [
            0,
            stride - 3,
            (h as usize - 1) * stride,
            h as usize * stride - 3,
        ];
        for at in corners {
            assert_eq!(&pixels[at..at + 3], &CLEAR_COLOR.rgb8());
        }
    }
}

#[test]
#[ignore = "needs a display"]
fn viewer_fails_on_missing_texture() {
    let out = Command::new(env!("CARGO_BIN_EXE_viewer"))
        .arg("no/such/texture.png")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to load"));
}
