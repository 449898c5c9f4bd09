//! Color tokens: parsing, shade ramps and role palettes
//!
//! A ramp is 11 shades named `50` through `950`. Shade `500` is the base
//! color; lower names mix toward white and higher names toward black.

use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// Conventional shade names, lightest first.
pub const SHADE_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// A 24-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    ///
    /// Shorthand (`#fff`), alpha and anything non-hex are rejected rather
    /// than read as black.
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TokenError::invalid(
                "hex",
                format!("expected a 6-digit hex color like #3b82f6, got {input:?}"),
            ));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|err| TokenError::invalid("hex", err.to_string()))?;
        Ok(Self::from_hex(packed))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Perceived brightness (YIQ luma), 0 to 255.
    pub fn yiq(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    /// Readable text color on top of this color.
    pub fn text_color(self) -> &'static str {
        if self.yiq() >= 128.0 {
            "#000000"
        } else {
            "#ffffff"
        }
    }

    fn channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    fn from_channels([r, g, b]: [f64; 3]) -> Self {
        Self::new(to_channel(r), to_channel(g), to_channel(b))
    }
}

impl FromStr for Rgb {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn clamp_channel(value: f64) -> f64 {
    value.clamp(0.0, 255.0)
}

fn to_channel(value: f64) -> u8 {
    clamp_channel(value).round() as u8
}

/// Slider adjustments applied while generating a ramp.
///
/// Each field is a percentage in `-50..=50`; zero leaves the ramp untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorAdjustment {
    pub contrast: i32,
    pub saturation: i32,
    pub luminance: i32,
}

impl ColorAdjustment {
    pub const RANGE: RangeInclusive<i32> = -50..=50;

    pub fn new(contrast: i32, saturation: i32, luminance: i32) -> Self {
        Self {
            contrast,
            saturation,
            luminance,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("contrast", self.contrast),
            ("saturation", self.saturation),
            ("luminance", self.luminance),
        ] {
            if !Self::RANGE.contains(&value) {
                return Err(TokenError::invalid(
                    name,
                    format!("must be within -50..=50, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// A named shade of a ramp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorShade {
    pub name: String,
    pub value: String,
}

impl ColorShade {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Generate the 11-shade ramp for `base_hex`.
///
/// Adjustments are applied per shade in a fixed order: luminance (as part of
/// the lightness mix), then contrast around mid-gray, then saturation around
/// the channel mean. Every stage clamps each channel, so with non-zero
/// contrast or saturation the ramp may stop being monotonic in lightness.
pub fn generate_shades(base_hex: &str, adjust: ColorAdjustment) -> Result<Vec<ColorShade>> {
    let base = Rgb::parse(base_hex)?;
    adjust.validate()?;

    let shades: Vec<ColorShade> = SHADE_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            ColorShade::new(step.to_string(), shade_at(base, index, adjust).to_hex())
        })
        .collect();

    tracing::debug!(base = %base, ?adjust, "generated color ramp");
    Ok(shades)
}

fn shade_at(base: Rgb, index: usize, adjust: ColorAdjustment) -> Rgb {
    let lightness = 1.0 - index as f64 / (SHADE_STEPS.len() - 1) as f64;
    // +1 at shade 50, 0 at shade 500, -1 at shade 950
    let strength = 2.0 * (lightness - 0.5);
    let luminance = f64::from(adjust.luminance) / 100.0;

    let mut channels = base.channels();
    for c in &mut channels {
        let mixed = if strength >= 0.0 {
            *c + (255.0 - *c) * strength * (1.0 + luminance)
        } else {
            *c + *c * strength * (1.0 - luminance)
        };
        *c = clamp_channel(mixed);
    }

    if adjust.contrast != 0 {
        let factor = 1.0 + f64::from(adjust.contrast) / 200.0;
        for c in &mut channels {
            *c = clamp_channel(128.0 + (*c - 128.0) * factor);
        }
    }

    if adjust.saturation != 0 {
        let factor = 1.0 + f64::from(adjust.saturation) / 100.0;
        let mean = channels.iter().sum::<f64>() / 3.0;
        for c in &mut channels {
            *c = clamp_channel(mean + (*c - mean) * factor);
        }
    }

    Rgb::from_channels(channels)
}

/// `"#000000"` or `"#ffffff"`, whichever reads better on `hex`.
pub fn pick_text_color(hex: &str) -> Result<&'static str> {
    Ok(Rgb::parse(hex)?.text_color())
}

/// A named ramp with its base color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    pub name: String,
    pub color: String,
    pub shades: Vec<ColorShade>,
}

impl ColorScale {
    /// Build a scale from a base color, generating its ramp.
    ///
    /// The base color is stored normalized to lowercase `#rrggbb`.
    pub fn generate(
        name: impl Into<String>,
        base_hex: &str,
        adjust: ColorAdjustment,
    ) -> Result<Self> {
        let color = Rgb::parse(base_hex)?.to_hex();
        let shades = generate_shades(base_hex, adjust)?;
        Ok(Self {
            name: name.into(),
            color,
            shades,
        })
    }

    pub fn shade(&self, name: &str) -> Option<&ColorShade> {
        self.shades.iter().find(|shade| shade.name == name)
    }

    /// Shades paired with the value they take in dark mode.
    ///
    /// Position `i` maps to the value at position `len - 1 - i`, so `50`
    /// takes the `950` value and vice versa.
    pub fn dark_shades(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.shades
            .iter()
            .zip(self.shades.iter().rev())
            .map(|(shade, mirrored)| (shade.name.as_str(), mirrored.value.as_str()))
    }
}

/// Semantic color roles, in export order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Neutral,
    Success,
    Warning,
    Error,
    Info,
}

impl ColorRole {
    /// Key used for variable names (`--primary-500`) and map keys.
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn all() -> &'static [ColorRole] {
        const ROLES: [ColorRole; 8] = [
            ColorRole::Primary,
            ColorRole::Secondary,
            ColorRole::Accent,
            ColorRole::Neutral,
            ColorRole::Success,
            ColorRole::Warning,
            ColorRole::Error,
            ColorRole::Info,
        ];
        &ROLES
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|role| role.id() == id)
    }
}

impl Display for ColorRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One color scale per semantic role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub accent: ColorScale,
    pub neutral: ColorScale,
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
    pub info: ColorScale,
}

impl ColorPalette {
    /// Get a scale by role
    pub fn get(&self, role: ColorRole) -> &ColorScale {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Neutral => &self.neutral,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
            ColorRole::Info => &self.info,
        }
    }

    /// Replace the scale for `role`, returning the updated palette.
    pub fn with(mut self, role: ColorRole, scale: ColorScale) -> Self {
        let slot = match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Neutral => &mut self.neutral,
            ColorRole::Success => &mut self.success,
            ColorRole::Warning => &mut self.warning,
            ColorRole::Error => &mut self.error,
            ColorRole::Info => &mut self.info,
        };
        *slot = scale;
        self
    }

    /// Scales in role order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &ColorScale)> + '_ {
        ColorRole::all().iter().map(move |&role| (role, self.get(role)))
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        crate::presets::default_palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse("#3B82F6").unwrap(), Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(Rgb::parse("3b82f6").unwrap(), Rgb::from_hex(0x3B82F6));
        assert_eq!(Rgb::from_hex(0x3B82F6).to_hex(), "#3b82f6");
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000aff");
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        for input in ["", "#", "#fff", "#12345", "#1234567", "#GG0000", "+12345", "#3b82f6 "] {
            let err = Rgb::parse(input).unwrap_err();
            assert!(
                matches!(err, TokenError::InvalidParameter { name: "hex", .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_text_color() {
        assert_eq!(pick_text_color("#ffffff").unwrap(), "#000000");
        assert_eq!(pick_text_color("#000000").unwrap(), "#ffffff");
        // yiq of #808080 is exactly 128
        assert_eq!(pick_text_color("#808080").unwrap(), "#000000");
        assert_eq!(pick_text_color("#7f7f7f").unwrap(), "#ffffff");
        assert!(pick_text_color("white").is_err());
    }

    #[test]
    fn test_ramp_endpoints() {
        let shades = generate_shades("#3B82F6", ColorAdjustment::default()).unwrap();
        assert_eq!(shades[0].value, "#ffffff");
        assert_eq!(shades[5].value, "#3b82f6");
        assert_eq!(shades[10].value, "#000000");
    }

    #[test]
    fn test_ramp_midpoints() {
        // shade 300 is 40% of the way to white, shade 700 is 40% to black
        let shades = generate_shades("#000000", ColorAdjustment::default()).unwrap();
        assert_eq!(shades[3].value, "#666666");
        let shades = generate_shades("#ffffff", ColorAdjustment::default()).unwrap();
        assert_eq!(shades[7].value, "#999999");
    }

    #[test]
    fn test_luminance_shifts_ramp() {
        let lighter = generate_shades("#3b82f6", ColorAdjustment::new(0, 0, 50)).unwrap();
        let plain = generate_shades("#3b82f6", ColorAdjustment::default()).unwrap();
        let a = Rgb::parse(&lighter[8].value).unwrap();
        let b = Rgb::parse(&plain[8].value).unwrap();
        assert!(a.b > b.b);
        // the base shade is never moved by luminance
        assert_eq!(lighter[5].value, plain[5].value);
    }

    #[test]
    fn test_contrast_and_saturation() {
        let base = ColorAdjustment::default();
        let plain = generate_shades("#3b82f6", base).unwrap();

        let contrasted = generate_shades("#3b82f6", ColorAdjustment::new(50, 0, 0)).unwrap();
        // 59 -> 41.75, 130 -> 130.5, 246 -> 275.5 clamped to 255
        assert_eq!(contrasted[5].value, "#2a83ff");
        assert_ne!(contrasted, plain);

        let desaturated = generate_shades("#3b82f6", ColorAdjustment::new(0, -50, 0)).unwrap();
        // halfway to the channel mean of 145
        assert_eq!(desaturated[5].value, "#668ac4");
    }

    #[test]
    fn test_adjustment_range() {
        assert!(ColorAdjustment::new(50, -50, 0).validate().is_ok());
        let err = generate_shades("#3b82f6", ColorAdjustment::new(0, 51, 0)).unwrap_err();
        assert!(matches!(
            err,
            TokenError::InvalidParameter {
                name: "saturation",
                ..
            }
        ));
    }

    #[test]
    fn test_dark_shades_mirror() {
        let scale = ColorScale::generate("Primary", "#3b82f6", ColorAdjustment::default()).unwrap();
        let dark: Vec<(&str, &str)> = scale.dark_shades().collect();
        assert_eq!(dark[0], ("50", "#000000"));
        assert_eq!(dark[5], ("500", "#3b82f6"));
        assert_eq!(dark[10], ("950", "#ffffff"));
    }

    #[test]
    fn test_scale_normalizes_base_color() {
        for input in ["3B82F6", "#3B82F6", "#3b82f6"] {
            let scale = ColorScale::generate("Primary", input, ColorAdjustment::default()).unwrap();
            assert_eq!(scale.color, "#3b82f6", "{input}");
            assert_eq!(scale.shade("500").unwrap().value, scale.color, "{input}");
        }
        assert!(ColorScale::generate("Primary", "#3b82f", ColorAdjustment::default()).is_err());
    }

    #[test]
    fn test_palette_replace() {
        let scale = ColorScale::generate("Brand", "#ff0000", ColorAdjustment::default()).unwrap();
        let palette = ColorPalette::default().with(ColorRole::Accent, scale.clone());
        assert_eq!(palette.get(ColorRole::Accent), &scale);
        assert_eq!(palette.primary, ColorPalette::default().primary);
        let order: Vec<&str> = palette.iter().map(|(role, _)| role.id()).collect();
        assert_eq!(
            order,
            ["primary", "secondary", "accent", "neutral", "success", "warning", "error", "info"]
        );
    }
}
