use std::fmt;

use plotters::style::RGBColor;
use serde::de::Error;
use serde::{
    Deserialize,
    Deserializer
};

/// `#rrggbb` colour, validated when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor {
    red: u8,
    green: u8,
    blue: u8
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a #rrggbb colour", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl HexColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> HexColor {
        HexColor { red, green, blue }
    }

    pub fn parse(text: &str) -> Result<HexColor, ParseColorError> {
        let error = || ParseColorError(text.to_owned());
        let digits = text.strip_prefix('#').ok_or_else(error)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(error());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| error());
        Ok(HexColor::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_rgb(&self) -> RGBColor {
        RGBColor(self.red, self.green, self.blue)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

fn positive_dimension<'de, D>(deserializer: D) -> Result<u32, D::Error> where
    D: Deserializer<'de> {
    let value = u32::deserialize(deserializer)?;
    if value == 0 {
        return Err(D::Error::custom("image width and height must be positive"));
    }
    Ok(value)
}

/// Style and sampling settings for the rendered figures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    #[serde(deserialize_with = "positive_dimension")]
    width: u32,
    #[serde(deserialize_with = "positive_dimension")]
    height: u32,
    area_color: HexColor,
    area_alpha: f64,
    rectangle_color: HexColor,
    rectangle_alpha: f64,
    curve_color: HexColor,
    simpson_curve_width: u32,
    rectangle_curve_width: u32,
    region_samples: usize,
    curve_samples: usize,
    crop_padding: u32,
    font_path: Option<String>
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 640,
            height: 480,
            area_color: HexColor::new(0x2c, 0xa0, 0x2c),
            area_alpha: 0.5,
            rectangle_color: HexColor::new(0xff, 0xa5, 0x00),
            rectangle_alpha: 0.5,
            curve_color: HexColor::new(0x00, 0x00, 0xff),
            simpson_curve_width: 2,
            rectangle_curve_width: 1,
            region_samples: 100,
            curve_samples: 300,
            crop_padding: 4,
            font_path: None
        }
    }
}

impl PlotConfig {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn area_color(&self) -> HexColor {
        self.area_color
    }

    pub fn area_alpha(&self) -> f64 {
        self.area_alpha
    }

    pub fn rectangle_color(&self) -> HexColor {
        self.rectangle_color
    }

    pub fn rectangle_alpha(&self) -> f64 {
        self.rectangle_alpha
    }

    pub fn curve_color(&self) -> HexColor {
        self.curve_color
    }

    pub fn simpson_curve_width(&self) -> u32 {
        self.simpson_curve_width
    }

    pub fn rectangle_curve_width(&self) -> u32 {
        self.rectangle_curve_width
    }

    /// Dense samples per Simpson fill region (one region spans two subintervals).
    pub fn region_samples(&self) -> usize {
        self.region_samples.max(2)
    }

    /// Dense samples of the reference curve over the whole interval.
    pub fn curve_samples(&self) -> usize {
        self.curve_samples.max(2)
    }

    pub fn crop_padding(&self) -> u32 {
        self.crop_padding
    }

    pub fn font_path(&self) -> Option<&str> {
        self.font_path.as_deref()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> PlotConfig {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(HexColor::parse("#2ca02c"), Ok(HexColor::new(44, 160, 44)));
        assert_eq!(HexColor::parse("#FFA500"), Ok(HexColor::new(255, 165, 0)));
        assert!(HexColor::parse("2ca02c").is_err());
        assert!(HexColor::parse("#2ca02").is_err());
        assert!(HexColor::parse("#zzzzzz").is_err());
        assert!(HexColor::parse("#ééé").is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PlotConfig = serde_json::from_str(r##"{"width": 800, "curve_color": "#ff0000"}"##).unwrap();
        assert_eq!(config.width(), 800);
        assert_eq!(config.height(), 480);
        assert_eq!(config.curve_color(), HexColor::new(255, 0, 0));
        assert_eq!(config.region_samples(), 100);
        assert_eq!(config.curve_samples(), 300);
    }

    #[test]
    fn zero_dimensions_are_rejected_at_load() {
        let result: Result<PlotConfig, _> = serde_json::from_str(r#"{"width": 0}"#);
        assert!(result.unwrap_err().to_string().contains("must be positive"));
        let result: Result<PlotConfig, _> = serde_json::from_str(r#"{"height": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_colors_are_rejected() {
        let result: Result<PlotConfig, _> = serde_json::from_str(r#"{"area_color": "green"}"#);
        assert!(result.is_err());
    }
}
