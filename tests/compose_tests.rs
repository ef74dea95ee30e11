//! End-to-end composition tests: scheme selection through PNG encoding.

mod common;

use common::FACE;
use rand::rngs::StdRng;
use rand::SeedableRng;
use storecard::{ComposeOptions, Composer, Palette};

fn decode(bytes: &[u8]) -> image::RgbImage {
  image::load_from_memory(bytes)
    .expect("composed bytes should decode")
    .to_rgb8()
}

#[test]
fn composes_a_spicy_store_card() {
  let palette = Palette::builtin();
  let composer = Composer::new(&palette, &FACE);

  let mut rng = StdRng::seed_from_u64(21);
  let png = composer.compose("火锅城", "火锅", &mut rng).unwrap();
  assert!(!png.is_empty());

  let img = decode(&png);
  assert_eq!(img.dimensions(), (400, 400));
}

#[test]
fn background_matches_the_selected_scheme() {
  let palette = Palette::builtin();
  let composer = Composer::new(&palette, &FACE);

  // Replay the selection with the same seed to learn which scheme the
  // composer picked.
  let scheme = palette.select("火锅", &mut StdRng::seed_from_u64(7));
  let png = composer
    .compose("火锅城", "火锅", &mut StdRng::seed_from_u64(7))
    .unwrap();

  let img = decode(&png);
  let expected = image::Rgb([scheme.background.r, scheme.background.g, scheme.background.b]);
  // Corners are outside the padded content box and stay pure background.
  assert_eq!(img.get_pixel(0, 0), &expected);
  assert_eq!(img.get_pixel(399, 0), &expected);
  assert_eq!(img.get_pixel(0, 399), &expected);
  assert_eq!(img.get_pixel(399, 399), &expected);
}

#[test]
fn text_ink_appears_in_the_text_color() {
  let palette = Palette::builtin();
  let composer = Composer::new(&palette, &FACE);

  let scheme = palette.select("火锅", &mut StdRng::seed_from_u64(7));
  let png = composer
    .compose("火锅城", "火锅", &mut StdRng::seed_from_u64(7))
    .unwrap();

  let img = decode(&png);
  let text_color = image::Rgb([scheme.text.r, scheme.text.g, scheme.text.b]);
  // The center of the canvas sits inside the single centered line of
  // full-width block glyphs.
  assert_eq!(img.get_pixel(200, 200), &text_color);
}

#[test]
fn same_seed_reproduces_identical_bytes() {
  let palette = Palette::builtin();
  let composer = Composer::new(&palette, &FACE);

  let a = composer
    .compose("甜品屋", "面包蛋糕甜品", &mut StdRng::seed_from_u64(13))
    .unwrap();
  let b = composer
    .compose("甜品屋", "面包蛋糕甜品", &mut StdRng::seed_from_u64(13))
    .unwrap();
  assert_eq!(a, b);
}

#[test]
fn empty_name_still_composes() {
  let palette = Palette::builtin();
  let composer = Composer::new(&palette, &FACE);

  let png = composer
    .compose("", "量子波动速读", &mut StdRng::seed_from_u64(2))
    .unwrap();
  assert_eq!(decode(&png).dimensions(), (400, 400));
}

#[test]
fn oversized_names_compose_without_error() {
  let palette = Palette::builtin();
  let composer = Composer::new(&palette, &FACE);

  let name: String = std::iter::repeat('x').take(50).collect();
  let png = composer
    .compose(&name, "咖啡", &mut StdRng::seed_from_u64(4))
    .unwrap();
  assert_eq!(decode(&png).dimensions(), (400, 400));
}

#[test]
fn custom_canvas_size_is_respected() {
  let palette = Palette::builtin();
  let options = ComposeOptions {
    width: 200,
    height: 120,
    ..ComposeOptions::default()
  };
  let composer = Composer::with_options(&palette, &FACE, options);

  let png = composer
    .compose("茶", "茶馆", &mut StdRng::seed_from_u64(6))
    .unwrap();
  assert_eq!(decode(&png).dimensions(), (200, 120));
}
