use super::*;

fn pixel(data: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let i = (y * width + x) * 4;
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

#[test]
fn rejects_degenerate_sizes() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
}

#[test]
fn fill_covers_every_pixel() {
    let mut canvas = Canvas::new(16, 8).unwrap();
    canvas.fill(Rgb8::new(10, 20, 30));
    let data = canvas.into_rgba8();
    assert_eq!(data.len(), 16 * 8 * 4);
    for px in data.chunks_exact(4) {
        assert_eq!(px, [10, 20, 30, 255]);
    }
}

#[test]
fn fill_rect_is_pixel_aligned() {
    let mut canvas = Canvas::new(16, 16).unwrap();
    canvas.fill(Rgb8::new(0, 0, 0));
    canvas.fill_rect(Rect::new(4.0, 4.0, 8.0, 8.0), Rgb8::new(255, 0, 0));
    let data = canvas.into_rgba8();
    assert_eq!(pixel(&data, 16, 5, 5), [255, 0, 0, 255]);
    assert_eq!(pixel(&data, 16, 1, 1), [0, 0, 0, 255]);
    assert_eq!(pixel(&data, 16, 9, 9), [0, 0, 0, 255]);
}

#[test]
fn gradient_runs_from_top_to_bottom() {
    let mut canvas = Canvas::new(8, 64).unwrap();
    canvas.vertical_gradient(Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255));
    let data = canvas.into_rgba8();
    let top = pixel(&data, 8, 3, 0);
    let bottom = pixel(&data, 8, 3, 63);
    assert_eq!(top, [0, 0, 0, 255]);
    assert!(bottom[0] > 240);
    assert!(pixel(&data, 8, 3, 32)[0] > top[0]);
    assert!(pixel(&data, 8, 3, 32)[0] < bottom[0]);
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64u8, 32, 0, 128, 9, 9, 9, 255, 0, 0, 0, 0];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[9, 9, 9, 255]);
    assert_eq!(&px[8..], &[0, 0, 0, 0]);
}

#[test]
fn saves_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("slide.png");
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.fill(Rgb8::new(1, 2, 3));
    canvas.save_png(&out).unwrap();
    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 4));
    assert_eq!(img.get_pixel(2, 2).0, [1, 2, 3, 255]);
}
