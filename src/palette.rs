//! Category color schemes
//!
//! A [`Palette`] is an immutable, explicitly constructed table of named
//! groups of color schemes plus a mapping from raw category labels to group
//! names. Lookup is a case-sensitive exact match; unmapped labels resolve to
//! the designated fallback group, so scheme selection has no error path.
//!
//! Randomness is injected: [`Palette::select`] takes an `&mut impl Rng`, so
//! hosting services choose their own source (and tests seed a deterministic
//! one).

use std::collections::HashMap;

use rand::Rng;

use crate::color::{ColorParseError, Rgb};
use crate::error::PaletteError;

/// A (background, text) color pair.
///
/// Produced fresh per request by [`Palette::select`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
  /// Canvas fill color
  pub background: Rgb,
  /// Glyph fill color
  pub text: Rgb,
}

impl ColorScheme {
  /// Creates a scheme from background and text colors.
  pub const fn new(background: Rgb, text: Rgb) -> Self {
    Self { background, text }
  }

  /// Creates a scheme from hex color strings.
  pub fn parse(background: &str, text: &str) -> Result<Self, ColorParseError> {
    Ok(Self {
      background: Rgb::parse(background)?,
      text: Rgb::parse(text)?,
    })
  }
}

/// A named bucket of color schemes.
#[derive(Debug, Clone)]
struct CategoryGroup {
  name: String,
  schemes: Vec<ColorScheme>,
}

/// Immutable category-to-color-scheme configuration.
///
/// Construct with [`Palette::builder`] or use the production table via
/// [`Palette::builtin`]. Every group is guaranteed to hold at least one
/// scheme, so [`Palette::select`] always succeeds.
#[derive(Debug, Clone)]
pub struct Palette {
  groups: Vec<CategoryGroup>,
  mapping: HashMap<String, usize>,
  fallback: usize,
}

impl Palette {
  /// Starts building a custom palette.
  pub fn builder() -> PaletteBuilder {
    PaletteBuilder::default()
  }

  /// The built-in production palette.
  ///
  /// Nine groups (warm, fresh, vibrant, elegant, sweet, spicy, roasted,
  /// traditional, general) with two schemes each, and the store-category
  /// labels of the original service mapped onto them. "general" is the
  /// fallback for unmapped labels.
  pub fn builtin() -> Self {
    fn scheme(bg: (u8, u8, u8), text: (u8, u8, u8)) -> ColorScheme {
      ColorScheme::new(Rgb::new(bg.0, bg.1, bg.2), Rgb::new(text.0, text.1, text.2))
    }

    let groups: Vec<(&str, Vec<ColorScheme>)> = vec![
      (
        "warm",
        vec![
          scheme((0xf5, 0xee, 0xcb), (0x8b, 0x45, 0x13)),
          scheme((0xf4, 0xe6, 0xd4), (0x65, 0x43, 0x21)),
        ],
      ),
      (
        "fresh",
        vec![
          scheme((0xe3, 0xf2, 0xfd), (0x00, 0x60, 0x64)),
          scheme((0xf0, 0xff, 0xf0), (0x3c, 0xb3, 0x71)),
        ],
      ),
      (
        "vibrant",
        vec![
          scheme((0xff, 0x6f, 0x61), (0xff, 0xff, 0xff)),
          scheme((0xff, 0xc1, 0x07), (0x21, 0x25, 0x29)),
        ],
      ),
      (
        "elegant",
        vec![
          scheme((0x36, 0x45, 0x4f), (0xf5, 0xf5, 0xdc)),
          scheme((0x2c, 0x3e, 0x50), (0xec, 0xf0, 0xf1)),
        ],
      ),
      (
        "sweet",
        vec![
          scheme((0xfc, 0xf5, 0xe5), (0xa0, 0x52, 0x2d)),
          scheme((0xff, 0xb6, 0xc1), (0x8b, 0x00, 0x00)),
        ],
      ),
      (
        "spicy",
        vec![
          scheme((0xa5, 0x2a, 0x2a), (0xff, 0xc1, 0x07)),
          scheme((0x80, 0x00, 0x00), (0xff, 0xff, 0xff)),
        ],
      ),
      (
        "roasted",
        vec![
          scheme((0x44, 0x44, 0x44), (0xe0, 0xc4, 0xa4)),
          scheme((0x30, 0x28, 0x24), (0xf0, 0xff, 0xf0)),
        ],
      ),
      (
        "traditional",
        vec![
          scheme((0xb0, 0xc4, 0xde), (0x4a, 0x2c, 0x11)),
          scheme((0xd2, 0xb4, 0x8c), (0x36, 0x45, 0x4f)),
        ],
      ),
      (
        "general",
        vec![
          scheme((0xf5, 0xf5, 0xf5), (0x33, 0x33, 0x33)),
          scheme((0xff, 0xff, 0xff), (0x2c, 0x3e, 0x50)),
        ],
      ),
    ];

    let labels: &[(&str, &[&str])] = &[
      (
        "warm",
        &["小吃快餐", "家常菜", "地方菜系", "面馆", "东北菜", "农家菜", "新疆菜"],
      ),
      ("fresh", &["鱼鲜海鲜", "水果生鲜", "日式料理", "江浙菜", "私房菜"]),
      ("vibrant", &["小龙虾", "饮品", "螺蛳粉", "韩式料理"]),
      (
        "elegant",
        &["西餐", "粤菜", "酒吧", "创意菜", "北京菜", "东南亚菜", "中东菜"],
      ),
      ("sweet", &["面包蛋糕甜品", "咖啡", "自助餐", "食品滋补"]),
      ("spicy", &["火锅", "川菜", "湘菜"]),
      ("roasted", &["烧烤烤串", "烤肉"]),
      ("traditional", &["茶馆", "早茶"]),
    ];

    let mut builder = Palette::builder();
    for (name, schemes) in groups {
      builder = builder.group(name, schemes);
    }
    for (group, group_labels) in labels {
      for label in *group_labels {
        builder = builder.map(label, group);
      }
    }
    match builder.fallback("general").build() {
      Ok(palette) => palette,
      // The table above is static and every mapping targets a declared
      // group, so this branch is unreachable.
      Err(err) => unreachable!("builtin palette is invalid: {err}"),
    }
  }

  /// Resolves a category label to its group name, falling back to the
  /// designated fallback group on a miss.
  pub fn group_for(&self, category: &str) -> &str {
    let index = self.mapping.get(category).copied().unwrap_or(self.fallback);
    &self.groups[index].name
  }

  /// The schemes registered under `group`, if it exists.
  pub fn schemes_in(&self, group: &str) -> Option<&[ColorScheme]> {
    self
      .groups
      .iter()
      .find(|g| g.name == group)
      .map(|g| g.schemes.as_slice())
  }

  /// Picks a scheme for `category`: resolve the group (fallback on miss),
  /// then choose uniformly at random from its schemes.
  pub fn select(&self, category: &str, rng: &mut impl Rng) -> ColorScheme {
    let index = self.mapping.get(category).copied().unwrap_or(self.fallback);
    let schemes = &self.groups[index].schemes;
    schemes[rng.gen_range(0..schemes.len())]
  }
}

/// Builder for [`Palette`].
///
/// Validation happens in [`build`](Self::build): every group must have at
/// least one scheme, every mapped label must target a declared group, and
/// the fallback group must exist.
#[derive(Debug, Default)]
pub struct PaletteBuilder {
  groups: Vec<CategoryGroup>,
  mapping: Vec<(String, String)>,
  fallback: Option<String>,
}

impl PaletteBuilder {
  /// Declares a group and its schemes.
  pub fn group<I>(mut self, name: &str, schemes: I) -> Self
  where
    I: IntoIterator<Item = ColorScheme>,
  {
    self.groups.push(CategoryGroup {
      name: name.to_string(),
      schemes: schemes.into_iter().collect(),
    });
    self
  }

  /// Maps a category label to a group name.
  pub fn map(mut self, label: &str, group: &str) -> Self {
    self.mapping.push((label.to_string(), group.to_string()));
    self
  }

  /// Designates the fallback group for unmapped labels.
  pub fn fallback(mut self, group: &str) -> Self {
    self.fallback = Some(group.to_string());
    self
  }

  /// Validates and builds the palette.
  pub fn build(self) -> Result<Palette, PaletteError> {
    for group in &self.groups {
      if group.schemes.is_empty() {
        return Err(PaletteError::EmptyGroup {
          group: group.name.clone(),
        });
      }
    }

    let index_of = |name: &str| self.groups.iter().position(|g| g.name == name);

    let mut mapping = HashMap::with_capacity(self.mapping.len());
    for (label, group) in &self.mapping {
      let index = index_of(group).ok_or_else(|| PaletteError::UnknownGroup {
        label: label.clone(),
        group: group.clone(),
      })?;
      mapping.insert(label.clone(), index);
    }

    let fallback_name = self.fallback.unwrap_or_default();
    let fallback = index_of(&fallback_name).ok_or(PaletteError::UnknownFallback {
      group: fallback_name,
    })?;

    Ok(Palette {
      groups: self.groups,
      mapping,
      fallback,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn builtin_groups_are_populated() {
    let palette = Palette::builtin();
    for group in [
      "warm",
      "fresh",
      "vibrant",
      "elegant",
      "sweet",
      "spicy",
      "roasted",
      "traditional",
      "general",
    ] {
      let schemes = palette.schemes_in(group).unwrap();
      assert!(schemes.len() >= 2, "group {group} too small");
    }
  }

  #[test]
  fn empty_group_is_rejected() {
    let err = Palette::builder()
      .group("hollow", [])
      .fallback("hollow")
      .build()
      .unwrap_err();
    assert_eq!(
      err,
      PaletteError::EmptyGroup {
        group: "hollow".to_string()
      }
    );
  }

  #[test]
  fn dangling_mapping_is_rejected() {
    let scheme = ColorScheme::new(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
    let err = Palette::builder()
      .group("mono", [scheme])
      .map("noodles", "nonexistent")
      .fallback("mono")
      .build()
      .unwrap_err();
    assert_eq!(
      err,
      PaletteError::UnknownGroup {
        label: "noodles".to_string(),
        group: "nonexistent".to_string()
      }
    );
  }

  #[test]
  fn missing_fallback_is_rejected() {
    let scheme = ColorScheme::new(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
    let err = Palette::builder().group("mono", [scheme]).build().unwrap_err();
    assert!(matches!(err, PaletteError::UnknownFallback { .. }));
  }

  #[test]
  fn schemes_parse_from_hex_pairs() {
    let scheme = ColorScheme::parse("#a52a2a", "#ffc107").unwrap();
    assert_eq!(scheme.background, Rgb::new(0xa5, 0x2a, 0x2a));
    assert_eq!(scheme.text, Rgb::new(0xff, 0xc1, 0x07));
    assert!(ColorScheme::parse("#a52a2a", "gold").is_err());
  }

  #[test]
  fn select_uses_fallback_for_unknown_labels() {
    let palette = Palette::builtin();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..32 {
      let scheme = palette.select("量子波动速读", &mut rng);
      assert!(palette.schemes_in("general").unwrap().contains(&scheme));
    }
  }
}
