use serde::Deserialize;

use crate::domain::model::{ColorInfo, SchemeColor};
use crate::utils::error::{HuegenError, Result};

/// Substituted when the service has no usable name for a color.
pub const UNKNOWN_COLOR_NAME: &str = "Unknown Color";

/// Wire shape of an `/id` response. Scheme entries share the same shape.
/// Every block is optional on the wire; each operation validates only the
/// pieces it needs before building a value object.
#[derive(Debug, Deserialize)]
pub struct ColorResponse {
    pub hex: Option<HexBlock>,
    pub name: Option<NameBlock>,
    pub rgb: Option<RgbChannels>,
    pub hsl: Option<HslChannels>,
    pub cmyk: Option<CmykChannels>,
}

#[derive(Debug, Deserialize)]
pub struct HexBlock {
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NameBlock {
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RgbChannels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Deserialize)]
pub struct HslChannels {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// The service reports cmyk channels as null for some colors; the block
/// only counts as present when all four are numbers.
#[derive(Debug, Deserialize)]
pub struct CmykChannels {
    pub c: Option<f64>,
    pub m: Option<f64>,
    pub y: Option<f64>,
    pub k: Option<f64>,
}

/// Wire shape of a `/scheme` response.
#[derive(Debug, Deserialize)]
pub struct SchemeResponse {
    pub colors: Vec<ColorResponse>,
}

impl ColorResponse {
    /// Build the full value object a color lookup promises. The minimum
    /// required shape is a hex block and a name block; rgb and hsl must also
    /// be usable, because callers never receive a partially populated object.
    pub fn into_color_info(self) -> Result<ColorInfo> {
        let hex_block = self.hex.ok_or(HuegenError::MissingFieldError("hex"))?;
        let name_block = self.name.ok_or(HuegenError::MissingFieldError("name"))?;
        let hex = hex_block
            .value
            .ok_or(HuegenError::MissingFieldError("hex.value"))?;
        let rgb = self.rgb.ok_or(HuegenError::MissingFieldError("rgb"))?;
        let hsl = self.hsl.ok_or(HuegenError::MissingFieldError("hsl"))?;

        let name = match name_block.value {
            Some(value) if !value.is_empty() => value,
            _ => UNKNOWN_COLOR_NAME.to_string(),
        };

        Ok(ColorInfo {
            hex,
            rgb: rgb.formatted(),
            hsl: hsl.formatted(),
            name,
            cmyk: self.cmyk.and_then(|channels| channels.formatted()),
        })
    }

    /// Build one scheme entry. Unlike color lookups there is no name
    /// fallback here: a missing field fails the whole scheme.
    pub fn into_scheme_color(self) -> Result<SchemeColor> {
        let hex = self
            .hex
            .and_then(|block| block.value)
            .ok_or(HuegenError::MissingFieldError("colors[].hex.value"))?;
        let rgb = self
            .rgb
            .ok_or(HuegenError::MissingFieldError("colors[].rgb"))?;
        let name = self
            .name
            .and_then(|block| block.value)
            .ok_or(HuegenError::MissingFieldError("colors[].name.value"))?;

        Ok(SchemeColor {
            hex,
            rgb: rgb.formatted(),
            name,
        })
    }

    pub fn rgb_formatted(&self) -> Result<String> {
        self.rgb
            .as_ref()
            .map(RgbChannels::formatted)
            .ok_or(HuegenError::MissingFieldError("rgb"))
    }

    pub fn hex_value(self) -> Result<String> {
        self.hex
            .and_then(|block| block.value)
            .ok_or(HuegenError::MissingFieldError("hex.value"))
    }
}

impl RgbChannels {
    pub fn formatted(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl HslChannels {
    /// Components rounded to the nearest integer for display.
    pub fn formatted(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.h.round() as i64,
            self.s.round() as i64,
            self.l.round() as i64
        )
    }
}

impl CmykChannels {
    pub fn formatted(&self) -> Option<String> {
        match (self.c, self.m, self.y, self.k) {
            (Some(c), Some(m), Some(y), Some(k)) => Some(format!(
                "cmyk({}, {}, {}, {})",
                c.round() as i64,
                m.round() as i64,
                y.round() as i64,
                k.round() as i64
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: serde_json::Value) -> ColorResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_full_response_becomes_color_info() {
        let response = decode(serde_json::json!({
            "hex": {"value": "#FF0000"},
            "name": {"value": "Red"},
            "rgb": {"r": 255, "g": 0, "b": 0},
            "hsl": {"h": 0, "s": 100, "l": 50},
            "cmyk": {"c": 0, "m": 100, "y": 100, "k": 0}
        }));

        let info = response.into_color_info().unwrap();
        assert_eq!(info.hex, "#FF0000");
        assert_eq!(info.rgb, "rgb(255, 0, 0)");
        assert_eq!(info.hsl, "hsl(0, 100%, 50%)");
        assert_eq!(info.name, "Red");
        assert_eq!(info.cmyk.as_deref(), Some("cmyk(0, 100, 100, 0)"));
    }

    #[test]
    fn test_missing_name_block_is_an_error() {
        let response = decode(serde_json::json!({
            "hex": {"value": "#FF0000"},
            "rgb": {"r": 255, "g": 0, "b": 0},
            "hsl": {"h": 0, "s": 100, "l": 50}
        }));

        assert!(response.into_color_info().is_err());
    }

    #[test]
    fn test_empty_name_value_uses_sentinel() {
        let response = decode(serde_json::json!({
            "hex": {"value": "#010203"},
            "name": {"value": ""},
            "rgb": {"r": 1, "g": 2, "b": 3},
            "hsl": {"h": 210, "s": 50, "l": 0.8}
        }));

        let info = response.into_color_info().unwrap();
        assert_eq!(info.name, UNKNOWN_COLOR_NAME);
    }

    #[test]
    fn test_absent_name_value_uses_sentinel() {
        let response = decode(serde_json::json!({
            "hex": {"value": "#010203"},
            "name": {},
            "rgb": {"r": 1, "g": 2, "b": 3},
            "hsl": {"h": 210, "s": 50, "l": 1}
        }));

        let info = response.into_color_info().unwrap();
        assert_eq!(info.name, UNKNOWN_COLOR_NAME);
    }

    #[test]
    fn test_hsl_components_round_to_nearest() {
        let response = decode(serde_json::json!({
            "hex": {"value": "#336699"},
            "name": {"value": "Lapis"},
            "rgb": {"r": 51, "g": 102, "b": 153},
            "hsl": {"h": 209.6, "s": 50.4, "l": 40.5}
        }));

        let info = response.into_color_info().unwrap();
        assert_eq!(info.hsl, "hsl(210, 50%, 41%)");
    }

    #[test]
    fn test_cmyk_with_null_channel_is_treated_as_absent() {
        let response = decode(serde_json::json!({
            "hex": {"value": "#000000"},
            "name": {"value": "Black"},
            "rgb": {"r": 0, "g": 0, "b": 0},
            "hsl": {"h": 0, "s": 0, "l": 0},
            "cmyk": {"c": null, "m": null, "y": null, "k": 100}
        }));

        let info = response.into_color_info().unwrap();
        assert_eq!(info.cmyk, None);
    }

    #[test]
    fn test_scheme_entry_requires_name() {
        let response = decode(serde_json::json!({
            "hex": {"value": "#FF0000"},
            "rgb": {"r": 255, "g": 0, "b": 0}
        }));

        assert!(response.into_scheme_color().is_err());
    }
}
