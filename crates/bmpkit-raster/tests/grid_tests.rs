//! Integration tests for grid division and axis-aligned line drawing.

use bmpkit_codec::{Image, Rgb};
use bmpkit_raster::grid::{divide, draw_line};
use bmpkit_raster::{ArgumentError, Canvas};

const INK: Rgb = Rgb::new(0, 0, 0);

#[test]
fn test_divide_places_lines_at_step_multiples() {
    // 400 / 4 = 100 and 300 / 3 = 100, so vertical dividers at x = 100,
    // 200, 300 and horizontal ones at y = 100, 200.
    let mut image = Image::new(400, 300);
    let mut canvas = Canvas::new(&mut image);
    divide(&mut canvas, 4, 3, 10, INK).unwrap();

    // Vertical divider at x = 100 paints columns 90..=100, every row.
    assert_eq!(canvas.get(100, 150), Some(INK));
    assert_eq!(canvas.get(95, 150), Some(INK));
    assert_eq!(canvas.get(90, 150), Some(INK));
    assert_eq!(canvas.get(89, 150), Some(Rgb::WHITE));
    assert_eq!(canvas.get(101, 150), Some(Rgb::WHITE));

    // Horizontal divider at y = 100 paints rows 200..=210 after the flip.
    assert_eq!(canvas.get(50, 200), Some(INK));
    assert_eq!(canvas.get(50, 205), Some(INK));
    assert_eq!(canvas.get(50, 210), Some(INK));
    assert_eq!(canvas.get(50, 199), Some(Rgb::WHITE));
    assert_eq!(canvas.get(50, 211), Some(Rgb::WHITE));

    // The other dividers exist too; no divider hugs the frame edges.
    assert_eq!(canvas.get(295, 10), Some(INK));
    assert_eq!(canvas.get(5, 5), Some(Rgb::WHITE));
}

#[test]
fn test_thickness_means_passes_plus_one() {
    let mut image = Image::new(400, 300);
    let mut canvas = Canvas::new(&mut image);
    divide(&mut canvas, 4, 3, 10, INK).unwrap();

    // Thickness 10 lays down 11 one-pixel passes per divider.
    let painted = (0..300)
        .filter(|&row| canvas.get(50, row) == Some(INK))
        .count();
    // Two horizontal dividers cross column 50.
    assert_eq!(painted, 22);
}

#[test]
fn test_uneven_division_truncates_step() {
    // 10 / 3 = 3, so dividers at x = 3 and 6 rather than even thirds.
    let mut image = Image::new(10, 10);
    let mut canvas = Canvas::new(&mut image);
    divide(&mut canvas, 3, 2, 1, INK).unwrap();

    assert_eq!(canvas.get(3, 2), Some(INK));
    assert_eq!(canvas.get(6, 2), Some(INK));
    assert_eq!(canvas.get(9, 2), Some(Rgb::WHITE));
    // The single horizontal divider sits at y = 5, rows 5..=6 after the flip.
    assert_eq!(canvas.get(9, 5), Some(INK));
}

#[test]
fn test_vertical_line_flips_and_expands_left() {
    let mut image = Image::new(20, 20);
    let mut canvas = Canvas::new(&mut image);
    draw_line(&mut canvas, 10, 0, 10, 19, 2, INK);

    // y = 0 maps to row 20, which is off-frame and absorbed; the segment
    // covers rows 1..=19 and columns 8..=10.
    assert_eq!(canvas.get(10, 5), Some(INK));
    assert_eq!(canvas.get(9, 5), Some(INK));
    assert_eq!(canvas.get(8, 5), Some(INK));
    assert_eq!(canvas.get(7, 5), Some(Rgb::WHITE));
    assert_eq!(canvas.get(11, 5), Some(Rgb::WHITE));
    assert_eq!(canvas.get(10, 0), Some(Rgb::WHITE));
    assert_eq!(canvas.get(10, 19), Some(INK));
}

#[test]
fn test_horizontal_line_flips_and_expands_down() {
    let mut image = Image::new(20, 20);
    let mut canvas = Canvas::new(&mut image);
    draw_line(&mut canvas, 0, 15, 19, 15, 2, INK);

    // Rows 20 - 15 + j for j in 0..=2.
    assert_eq!(canvas.get(4, 5), Some(INK));
    assert_eq!(canvas.get(4, 6), Some(INK));
    assert_eq!(canvas.get(4, 7), Some(INK));
    assert_eq!(canvas.get(4, 4), Some(Rgb::WHITE));
    assert_eq!(canvas.get(4, 8), Some(Rgb::WHITE));
}

#[test]
fn test_endpoint_order_does_not_matter() {
    let mut image_a = Image::new(20, 20);
    let mut canvas_a = Canvas::new(&mut image_a);
    draw_line(&mut canvas_a, 10, 2, 10, 17, 1, INK);

    let mut image_b = Image::new(20, 20);
    let mut canvas_b = Canvas::new(&mut image_b);
    draw_line(&mut canvas_b, 10, 17, 10, 2, 1, INK);

    assert_eq!(image_a.pixels(), image_b.pixels());
}

fn all_white(image: &Image) -> bool {
    image.pixels().iter().all(|&px| px == Rgb::WHITE)
}

#[test]
fn test_diagonal_segment_is_a_silent_no_op() {
    let mut image = Image::new(20, 20);
    let mut canvas = Canvas::new(&mut image);
    draw_line(&mut canvas, 0, 0, 5, 7, 2, INK);
    assert!(all_white(&image));
}

#[test]
fn test_negative_coordinate_is_a_silent_no_op() {
    let mut image = Image::new(20, 20);
    let mut canvas = Canvas::new(&mut image);
    draw_line(&mut canvas, -1, 0, -1, 19, 2, INK);
    assert!(all_white(&image));
}

#[test]
fn test_non_positive_thickness_is_a_silent_no_op() {
    let mut image = Image::new(20, 20);
    let mut canvas = Canvas::new(&mut image);
    draw_line(&mut canvas, 10, 0, 10, 19, 0, INK);
    assert!(all_white(&image));
}

#[test]
fn test_divide_rejects_out_of_domain_parameters() {
    let mut image = Image::new(20, 20);
    let mut canvas = Canvas::new(&mut image);

    assert_eq!(divide(&mut canvas, 1, 3, 2, INK), Err(ArgumentError::CountX(1)));
    assert_eq!(divide(&mut canvas, 3, 0, 2, INK), Err(ArgumentError::CountY(0)));
    assert_eq!(
        divide(&mut canvas, 3, 3, -2, INK),
        Err(ArgumentError::Thickness(-2))
    );
    assert!(all_white(&image));
}
