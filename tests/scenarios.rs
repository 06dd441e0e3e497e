use color_match::report::format_similarity;
use color_match::scene::Scene;
use color_match::{MatchCounts, Rgb, Similarity, compare, compare_images, hex_to_rgb, rgb_to_hex};

const GRAY: Rgb = Rgb::new(74, 74, 74);

#[test]
fn full_mismatch_over_whole_canvas() {
    let pixels = 20 * 10;
    let reference = GRAY.to_rgba().repeat(pixels);
    let user = Rgb::new(80, 80, 80).to_rgba().repeat(pixels);

    let cmp = compare(&reference, &user, GRAY, 0.0).unwrap();

    assert_eq!(cmp.counts, MatchCounts { user_drawn: pixels, model_color: pixels, matched: 0 });
    assert_eq!(format_similarity(cmp.counts.similarity()), "0.00");
}

#[test]
fn rendered_scene_matches_itself() {
    let scene = Scene::default();
    let reference = scene.render_fill(GRAY);
    let drawing = scene.render_fill(hex_to_rgb("#4a4a4a").unwrap());

    let cmp = compare_images(&reference, &drawing, GRAY, 0.0).unwrap();

    let area = scene.region_area();
    assert_eq!(cmp.counts, MatchCounts { user_drawn: area, model_color: area, matched: area });
    assert_eq!(format_similarity(cmp.counts.similarity()), "100.00");
    // Outside the rectangle nothing was drawn, so nothing was marked.
    assert_eq!(cmp.result.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn blank_drawing_has_no_similarity() {
    let scene = Scene::default();
    let reference = scene.render_fill(GRAY);
    let blank = image::RgbaImage::new(scene.width, scene.height);

    let cmp = compare_images(&reference, &blank, GRAY, 100.0).unwrap();

    assert_eq!(cmp.counts.similarity(), Similarity::Undefined);
    assert_eq!(format_similarity(cmp.counts.similarity()), "N/A");
}

#[test]
fn hex_round_trip_of_model_color() {
    assert_eq!(rgb_to_hex(74, 74, 74), "#4a4a4a");
    assert_eq!(hex_to_rgb(&GRAY.to_hex()), Some(GRAY));
}
