//! Typography tokens and the modular type scale
//!
//! A scale is a geometric progression of font sizes around a base size:
//! `size(step) = base * ratio^step` for steps `-2..=8`. Each step carries
//! derived metrics (line height, tracking and vertical rhythm) so the
//! emitters never recompute anything themselves.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::number::{serialize_js_number, to_fixed};

/// Root font size used for every px to rem conversion.
pub const REM_BASE_PX: f64 = 16.0;

/// Smallest generated step.
pub const MIN_STEP: i32 = -2;

/// Largest generated step.
pub const MAX_STEP: i32 = 8;

/// Number of steps in a generated scale.
pub const STEP_COUNT: usize = (MAX_STEP - MIN_STEP + 1) as usize;

/// Font stacks for body copy, headings and code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFamilies {
    pub body: String,
    pub heading: String,
    pub monospace: String,
}

impl FontFamilies {
    /// First family of a CSS font stack (`"Inter, system-ui"` -> `"Inter"`).
    pub fn primary(stack: &str) -> &str {
        stack.split(',').next().unwrap_or(stack)
    }
}

impl Default for FontFamilies {
    fn default() -> Self {
        Self {
            body: "Inter, system-ui, sans-serif".to_string(),
            heading: "Inter, system-ui, sans-serif".to_string(),
            monospace: "monospace".to_string(),
        }
    }
}

/// Base parameters of the type scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographySettings {
    /// Body text size in px
    #[serde(serialize_with = "serialize_js_number")]
    pub base_font_size: f64,
    #[serde(serialize_with = "serialize_js_number")]
    pub base_line_height: f64,
    /// Multiplier between adjacent steps
    #[serde(serialize_with = "serialize_js_number")]
    pub scale_ratio: f64,
    /// Spacing grid unit in px
    #[serde(serialize_with = "serialize_js_number")]
    pub base_unit: f64,
    pub font_family: FontFamilies,
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            base_line_height: 1.5,
            scale_ratio: RatioPreset::PerfectFourth.value(),
            base_unit: 8.0,
            font_family: FontFamilies::default(),
        }
    }
}

impl TypographySettings {
    /// Replace the ratio with a named preset.
    pub fn with_preset(self, preset: RatioPreset) -> Self {
        Self {
            scale_ratio: preset.value(),
            ..self
        }
    }

    /// Reject settings that would produce NaN, zero or negative sizes.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("baseFontSize", self.base_font_size)?;
        ensure_positive("scaleRatio", self.scale_ratio)?;
        ensure_positive("baseUnit", self.base_unit)?;
        Ok(())
    }

    /// The preset matching the current ratio, if any.
    pub fn preset(&self) -> Option<RatioPreset> {
        RatioPreset::all()
            .iter()
            .copied()
            .find(|preset| preset.value() == self.scale_ratio)
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TokenError::invalid(
            name,
            format!("must be a positive finite number, got {value}"),
        ))
    }
}

/// Classical interval ratios offered as scale presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RatioPreset {
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    PerfectFifth,
    GoldenRatio,
}

impl RatioPreset {
    /// Stable id for config and command-line use.
    pub fn id(self) -> &'static str {
        match self {
            Self::MinorSecond => "minor-second",
            Self::MajorSecond => "major-second",
            Self::MinorThird => "minor-third",
            Self::MajorThird => "major-third",
            Self::PerfectFourth => "perfect-fourth",
            Self::PerfectFifth => "perfect-fifth",
            Self::GoldenRatio => "golden-ratio",
        }
    }

    /// User-facing name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::MinorSecond => "Minor Second",
            Self::MajorSecond => "Major Second",
            Self::MinorThird => "Minor Third",
            Self::MajorThird => "Major Third",
            Self::PerfectFourth => "Perfect Fourth",
            Self::PerfectFifth => "Perfect Fifth",
            Self::GoldenRatio => "Golden Ratio",
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Self::MinorSecond => 1.067,
            Self::MajorSecond => 1.125,
            Self::MinorThird => 1.2,
            Self::MajorThird => 1.25,
            Self::PerfectFourth => 1.333,
            Self::PerfectFifth => 1.5,
            Self::GoldenRatio => 1.618,
        }
    }

    /// All presets, smallest ratio first.
    pub fn all() -> &'static [RatioPreset] {
        const PRESETS: [RatioPreset; 7] = [
            RatioPreset::MinorSecond,
            RatioPreset::MajorSecond,
            RatioPreset::MinorThird,
            RatioPreset::MajorThird,
            RatioPreset::PerfectFourth,
            RatioPreset::PerfectFifth,
            RatioPreset::GoldenRatio,
        ];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }
}

impl Display for RatioPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.value())
    }
}

/// Vertical rhythm of a step, in rem with 3 decimals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rhythm {
    pub single: String,
    pub half: String,
    pub double: String,
}

impl Rhythm {
    /// Build from a rhythm unit in whole px.
    pub fn from_px(px: f64) -> Self {
        Self {
            single: to_fixed(px / REM_BASE_PX, 3),
            half: to_fixed(px / 2.0 / REM_BASE_PX, 3),
            double: to_fixed(px * 2.0 / REM_BASE_PX, 3),
        }
    }
}

/// One step of a generated type scale.
///
/// The string fields are the canonical representation written by every
/// emitter; `size_px` keeps the unrounded size for callers that need it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleStep {
    pub step: i32,
    #[serde(skip)]
    pub size_px: f64,
    pub rem: String,
    pub px: String,
    pub line_height: String,
    pub letter_spacing: String,
    pub rhythm: Rhythm,
}

impl ScaleStep {
    /// Derive all metrics for `step` at `size_px`.
    pub fn new(step: i32, size_px: f64) -> Self {
        let leading = line_height(size_px);
        let tracking = letter_spacing(size_px, is_heading_step(step));

        Self {
            step,
            size_px,
            rem: to_fixed(size_px / REM_BASE_PX, 3),
            px: to_fixed(size_px, 1),
            line_height: to_fixed(leading, 3),
            letter_spacing: to_fixed(tracking, 3),
            rhythm: Rhythm::from_px(rhythm_px(size_px, leading)),
        }
    }

    pub fn is_heading(&self) -> bool {
        is_heading_step(self.step)
    }
}

/// Steps above 2 are set as headings.
pub fn is_heading_step(step: i32) -> bool {
    step > 2
}

/// Unitless line height for a font size; larger text gets tighter leading.
pub fn line_height(size_px: f64) -> f64 {
    if size_px < 16.0 {
        1.6
    } else if size_px <= 24.0 {
        1.5
    } else if size_px <= 32.0 {
        1.3
    } else {
        1.2
    }
}

/// Letter spacing in em. Large headings tighten, small body text loosens.
pub fn letter_spacing(size_px: f64, is_heading: bool) -> f64 {
    if is_heading {
        if size_px > 32.0 {
            -0.02
        } else {
            -0.01
        }
    } else if size_px < 16.0 {
        0.015
    } else {
        0.0
    }
}

/// Rhythm unit in whole px: the rendered line box height.
pub fn rhythm_px(size_px: f64, line_height: f64) -> f64 {
    (size_px * line_height).round()
}

/// A step size that overflowed or underflowed would print as `inf` or `0.000`.
fn ensure_step_in_range(settings: &TypographySettings, step: i32, size_px: f64) -> Result<()> {
    let line_box = size_px * line_height(size_px);
    if size_px.is_finite() && size_px > 0.0 && line_box.is_finite() {
        Ok(())
    } else {
        Err(TokenError::invalid(
            "scaleRatio",
            format!(
                "base {}px with ratio {} gives an out-of-range size at step {step}",
                settings.base_font_size, settings.scale_ratio
            ),
        ))
    }
}

/// Generate the full scale (steps -2 through 8) for `settings`.
///
/// The scale is rebuilt from scratch on every call.
pub fn generate_scale(settings: &TypographySettings) -> Result<Vec<ScaleStep>> {
    settings.validate()?;

    let scale = (MIN_STEP..=MAX_STEP)
        .map(|step| {
            let size_px = settings.base_font_size * settings.scale_ratio.powf(f64::from(step));
            tracing::trace!(step, size_px, "scale step");
            ensure_step_in_range(settings, step, size_px)?;
            Ok(ScaleStep::new(step, size_px))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        base = settings.base_font_size,
        ratio = settings.scale_ratio,
        steps = scale.len(),
        "generated type scale"
    );
    Ok(scale)
}
