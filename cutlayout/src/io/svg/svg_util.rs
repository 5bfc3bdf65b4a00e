use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Rectangle;

use crate::geometry::primitives::Rect;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Print dimensions, cut count and remaining weight above the base
    #[serde(default = "default_true")]
    pub label: bool,
    ///Draw dashed outlines around overlapping or out-of-bounds cuts
    #[serde(default = "default_true")]
    pub highlight_violations: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            label: true,
            highlight_violations: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub canvas_fill: Color,
    pub outline: Color,
    pub placeholder_stroke: Color,
    pub violation_highlight_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::WORKSHOP
    }
}

impl SvgLayoutTheme {
    pub const WORKSHOP: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        canvas_fill: Color(0xFF, 0xFF, 0xFF),
        outline: Color(0x33, 0x33, 0x33),
        placeholder_stroke: Color(0x99, 0x99, 0x99),
        violation_highlight_color: Color(0xD0, 0x00, 0x00),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        canvas_fill: Color(0xD3, 0xD3, 0xD3),
        outline: Color(0x00, 0x00, 0x00),
        placeholder_stroke: Color(0x63, 0x63, 0x63),
        violation_highlight_color: Color(0x00, 0xFF, 0x00), //LIME
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid color: {s}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect_to_svg(rect: &Rect, params: &[(&str, &str)]) -> Rectangle {
    let mut svg_rect = Rectangle::new()
        .set("x", rect.x_min)
        .set("y", rect.y_min)
        .set("width", rect.width())
        .set("height", rect.height());
    for param in params {
        svg_rect = svg_rect.set(param.0, param.1)
    }
    svg_rect
}
