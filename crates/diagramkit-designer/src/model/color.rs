//! Named color references.
//!
//! A [`Color`] stores the reference exactly as the caller wrote it (for
//! example `"DarkBlue"` or `"#FF8800"`) and only decodes it to RGB on demand.

use std::fmt;

use diagramkit_core::DesignerError;
use serde::{Deserialize, Serialize};

/// Color used when no reference is supplied.
pub const DEFAULT_COLOR: &str = "Black";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mean of the three channels.
    pub fn brightness(&self) -> f64 {
        (self.r as f64 + self.g as f64 + self.b as f64) / 3.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color {
    value: String,
}

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Builds a color from an optional reference, falling back to [`DEFAULT_COLOR`].
    pub fn from_option(value: Option<&str>) -> Self {
        Self::new(value.unwrap_or(DEFAULT_COLOR))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decodes the reference to RGB.
    ///
    /// Accepts the standard color names (case-insensitive) and the hex forms
    /// `#RGB`, `#ARGB`, `#RRGGBB` and `#AARRGGBB`; alpha is ignored.
    pub fn to_rgb(&self) -> Result<Rgb, DesignerError> {
        let value = self.value.trim();
        let decoded = match value.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => NAMED_COLORS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(value))
                .map(|(_, rgb)| *rgb),
        };
        decoded.ok_or_else(|| DesignerError::UnknownColor {
            value: self.value.clone(),
        })
    }

    /// True when the average channel value is above 128.
    pub fn is_light(&self) -> Result<bool, DesignerError> {
        Ok(self.to_rgb()?.brightness() > 128.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Rgb::new(nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgb::new(byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("AliceBlue", Rgb::new(240, 248, 255)),
    ("AntiqueWhite", Rgb::new(250, 235, 215)),
    ("Aqua", Rgb::new(0, 255, 255)),
    ("Aquamarine", Rgb::new(127, 255, 212)),
    ("Azure", Rgb::new(240, 255, 255)),
    ("Beige", Rgb::new(245, 245, 220)),
    ("Bisque", Rgb::new(255, 228, 196)),
    ("Black", Rgb::new(0, 0, 0)),
    ("BlanchedAlmond", Rgb::new(255, 235, 205)),
    ("Blue", Rgb::new(0, 0, 255)),
    ("BlueViolet", Rgb::new(138, 43, 226)),
    ("Brown", Rgb::new(165, 42, 42)),
    ("BurlyWood", Rgb::new(222, 184, 135)),
    ("CadetBlue", Rgb::new(95, 158, 160)),
    ("Chartreuse", Rgb::new(127, 255, 0)),
    ("Chocolate", Rgb::new(210, 105, 30)),
    ("Coral", Rgb::new(255, 127, 80)),
    ("CornflowerBlue", Rgb::new(100, 149, 237)),
    ("Cornsilk", Rgb::new(255, 248, 220)),
    ("Crimson", Rgb::new(220, 20, 60)),
    ("Cyan", Rgb::new(0, 255, 255)),
    ("DarkBlue", Rgb::new(0, 0, 139)),
    ("DarkCyan", Rgb::new(0, 139, 139)),
    ("DarkGoldenrod", Rgb::new(184, 134, 11)),
    ("DarkGray", Rgb::new(169, 169, 169)),
    ("DarkGreen", Rgb::new(0, 100, 0)),
    ("DarkKhaki", Rgb::new(189, 183, 107)),
    ("DarkMagenta", Rgb::new(139, 0, 139)),
    ("DarkOliveGreen", Rgb::new(85, 107, 47)),
    ("DarkOrange", Rgb::new(255, 140, 0)),
    ("DarkOrchid", Rgb::new(153, 50, 204)),
    ("DarkRed", Rgb::new(139, 0, 0)),
    ("DarkSalmon", Rgb::new(233, 150, 122)),
    ("DarkSeaGreen", Rgb::new(143, 188, 143)),
    ("DarkSlateBlue", Rgb::new(72, 61, 139)),
    ("DarkSlateGray", Rgb::new(47, 79, 79)),
    ("DarkTurquoise", Rgb::new(0, 206, 209)),
    ("DarkViolet", Rgb::new(148, 0, 211)),
    ("DeepPink", Rgb::new(255, 20, 147)),
    ("DeepSkyBlue", Rgb::new(0, 191, 255)),
    ("DimGray", Rgb::new(105, 105, 105)),
    ("DodgerBlue", Rgb::new(30, 144, 255)),
    ("Firebrick", Rgb::new(178, 34, 34)),
    ("FloralWhite", Rgb::new(255, 250, 240)),
    ("ForestGreen", Rgb::new(34, 139, 34)),
    ("Fuchsia", Rgb::new(255, 0, 255)),
    ("Gainsboro", Rgb::new(220, 220, 220)),
    ("GhostWhite", Rgb::new(248, 248, 255)),
    ("Gold", Rgb::new(255, 215, 0)),
    ("Goldenrod", Rgb::new(218, 165, 32)),
    ("Gray", Rgb::new(128, 128, 128)),
    ("Green", Rgb::new(0, 128, 0)),
    ("GreenYellow", Rgb::new(173, 255, 47)),
    ("Honeydew", Rgb::new(240, 255, 240)),
    ("HotPink", Rgb::new(255, 105, 180)),
    ("IndianRed", Rgb::new(205, 92, 92)),
    ("Indigo", Rgb::new(75, 0, 130)),
    ("Ivory", Rgb::new(255, 255, 240)),
    ("Khaki", Rgb::new(240, 230, 140)),
    ("Lavender", Rgb::new(230, 230, 250)),
    ("LavenderBlush", Rgb::new(255, 240, 245)),
    ("LawnGreen", Rgb::new(124, 252, 0)),
    ("LemonChiffon", Rgb::new(255, 250, 205)),
    ("LightBlue", Rgb::new(173, 216, 230)),
    ("LightCoral", Rgb::new(240, 128, 128)),
    ("LightCyan", Rgb::new(224, 255, 255)),
    ("LightGoldenrodYellow", Rgb::new(250, 250, 210)),
    ("LightGray", Rgb::new(211, 211, 211)),
    ("LightGreen", Rgb::new(144, 238, 144)),
    ("LightPink", Rgb::new(255, 182, 193)),
    ("LightSalmon", Rgb::new(255, 160, 122)),
    ("LightSeaGreen", Rgb::new(32, 178, 170)),
    ("LightSkyBlue", Rgb::new(135, 206, 250)),
    ("LightSlateGray", Rgb::new(119, 136, 153)),
    ("LightSteelBlue", Rgb::new(176, 196, 222)),
    ("LightYellow", Rgb::new(255, 255, 224)),
    ("Lime", Rgb::new(0, 255, 0)),
    ("LimeGreen", Rgb::new(50, 205, 50)),
    ("Linen", Rgb::new(250, 240, 230)),
    ("Magenta", Rgb::new(255, 0, 255)),
    ("Maroon", Rgb::new(128, 0, 0)),
    ("MediumAquamarine", Rgb::new(102, 205, 170)),
    ("MediumBlue", Rgb::new(0, 0, 205)),
    ("MediumOrchid", Rgb::new(186, 85, 211)),
    ("MediumPurple", Rgb::new(147, 112, 219)),
    ("MediumSeaGreen", Rgb::new(60, 179, 113)),
    ("MediumSlateBlue", Rgb::new(123, 104, 238)),
    ("MediumSpringGreen", Rgb::new(0, 250, 154)),
    ("MediumTurquoise", Rgb::new(72, 209, 204)),
    ("MediumVioletRed", Rgb::new(199, 21, 133)),
    ("MidnightBlue", Rgb::new(25, 25, 112)),
    ("MintCream", Rgb::new(245, 255, 250)),
    ("MistyRose", Rgb::new(255, 228, 225)),
    ("Moccasin", Rgb::new(255, 228, 181)),
    ("NavajoWhite", Rgb::new(255, 222, 173)),
    ("Navy", Rgb::new(0, 0, 128)),
    ("OldLace", Rgb::new(253, 245, 230)),
    ("Olive", Rgb::new(128, 128, 0)),
    ("OliveDrab", Rgb::new(107, 142, 35)),
    ("Orange", Rgb::new(255, 165, 0)),
    ("OrangeRed", Rgb::new(255, 69, 0)),
    ("Orchid", Rgb::new(218, 112, 214)),
    ("PaleGoldenrod", Rgb::new(238, 232, 170)),
    ("PaleGreen", Rgb::new(152, 251, 152)),
    ("PaleTurquoise", Rgb::new(175, 238, 238)),
    ("PaleVioletRed", Rgb::new(219, 112, 147)),
    ("PapayaWhip", Rgb::new(255, 239, 213)),
    ("PeachPuff", Rgb::new(255, 218, 185)),
    ("Peru", Rgb::new(205, 133, 63)),
    ("Pink", Rgb::new(255, 192, 203)),
    ("Plum", Rgb::new(221, 160, 221)),
    ("PowderBlue", Rgb::new(176, 224, 230)),
    ("Purple", Rgb::new(128, 0, 128)),
    ("Red", Rgb::new(255, 0, 0)),
    ("RosyBrown", Rgb::new(188, 143, 143)),
    ("RoyalBlue", Rgb::new(65, 105, 225)),
    ("SaddleBrown", Rgb::new(139, 69, 19)),
    ("Salmon", Rgb::new(250, 128, 114)),
    ("SandyBrown", Rgb::new(244, 164, 96)),
    ("SeaGreen", Rgb::new(46, 139, 87)),
    ("SeaShell", Rgb::new(255, 245, 238)),
    ("Sienna", Rgb::new(160, 82, 45)),
    ("Silver", Rgb::new(192, 192, 192)),
    ("SkyBlue", Rgb::new(135, 206, 235)),
    ("SlateBlue", Rgb::new(106, 90, 205)),
    ("SlateGray", Rgb::new(112, 128, 144)),
    ("Snow", Rgb::new(255, 250, 250)),
    ("SpringGreen", Rgb::new(0, 255, 127)),
    ("SteelBlue", Rgb::new(70, 130, 180)),
    ("Tan", Rgb::new(210, 180, 140)),
    ("Teal", Rgb::new(0, 128, 128)),
    ("Thistle", Rgb::new(216, 191, 216)),
    ("Tomato", Rgb::new(255, 99, 71)),
    ("Transparent", Rgb::new(255, 255, 255)),
    ("Turquoise", Rgb::new(64, 224, 208)),
    ("Violet", Rgb::new(238, 130, 238)),
    ("Wheat", Rgb::new(245, 222, 179)),
    ("White", Rgb::new(255, 255, 255)),
    ("WhiteSmoke", Rgb::new(245, 245, 245)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("YellowGreen", Rgb::new(154, 205, 50)),
];
