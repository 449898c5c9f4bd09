//! Built-in default design system
//!
//! "Reset to defaults" must reproduce these values byte for byte, so they
//! are kept as literal tables rather than generated. The color ramps are the
//! Tailwind palette and keep its uppercase hex spelling.

use indexmap::IndexMap;

use crate::tokens::{
    ColorPalette, ColorScale, ColorShade, ComponentSettings, SpacingSettings, SHADE_STEPS,
};

type Ramp = [&'static str; 11];

/// Tailwind blue
const PRIMARY: Ramp = [
    "#EFF6FF", "#DBEAFE", "#BFDBFE", "#93C5FD", "#60A5FA", "#3B82F6", "#2563EB", "#1D4ED8",
    "#1E40AF", "#1E3A8A", "#172554",
];

/// Tailwind pink
const SECONDARY: Ramp = [
    "#FDF2F8", "#FCE7F3", "#FBCFE8", "#F9A8D4", "#F472B6", "#EC4899", "#DB2777", "#BE185D",
    "#9D174D", "#831843", "#500724",
];

/// Tailwind violet
const ACCENT: Ramp = [
    "#F5F3FF", "#EDE9FE", "#DDD6FE", "#C4B5FD", "#A78BFA", "#8B5CF6", "#7C3AED", "#6D28D9",
    "#5B21B6", "#4C1D95", "#2E1065",
];

/// Tailwind gray
const NEUTRAL: Ramp = [
    "#F9FAFB", "#F3F4F6", "#E5E7EB", "#D1D5DB", "#9CA3AF", "#6B7280", "#4B5563", "#374151",
    "#1F2937", "#111827", "#030712",
];

/// Tailwind emerald
const SUCCESS: Ramp = [
    "#ECFDF5", "#D1FAE5", "#A7F3D0", "#6EE7B7", "#34D399", "#10B981", "#059669", "#047857",
    "#065F46", "#064E3B", "#022C22",
];

/// Tailwind amber
const WARNING: Ramp = [
    "#FFFBEB", "#FEF3C7", "#FDE68A", "#FCD34D", "#FBBF24", "#F59E0B", "#D97706", "#B45309",
    "#92400E", "#78350F", "#451A03",
];

/// Tailwind red
const ERROR: Ramp = [
    "#FEF2F2", "#FEE2E2", "#FECACA", "#FCA5A5", "#F87171", "#EF4444", "#DC2626", "#B91C1C",
    "#991B1B", "#7F1D1D", "#450A0A",
];

/// Tailwind cyan
const INFO: Ramp = [
    "#ECFEFF", "#CFFAFE", "#A5F3FC", "#67E8F9", "#22D3EE", "#06B6D4", "#0891B2", "#0E7490",
    "#155E75", "#164E63", "#083344",
];

const SPACING_SCALE: [u32; 15] = [0, 4, 8, 16, 24, 32, 48, 64, 80, 96, 128, 160, 192, 224, 256];

const BREAKPOINTS: [(&str, u32); 6] = [
    ("xs", 320),
    ("sm", 640),
    ("md", 768),
    ("lg", 1024),
    ("xl", 1280),
    ("xxl", 1536),
];

const BORDER_RADIUS: [(&str, &str); 8] = [
    ("none", "0"),
    ("sm", "0.125rem"),
    ("md", "0.25rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

const BORDER_WIDTH: [(&str, &str); 4] = [
    ("none", "0"),
    ("thin", "1px"),
    ("thick", "2px"),
    ("thicker", "3px"),
];

const BOX_SHADOW: [&str; 7] = [
    "none",
    "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
    "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
    "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
    "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
    "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
    "0 25px 50px -12px rgba(0, 0, 0, 0.25)",
];

const TRANSITIONS: [(&str, &str); 3] = [
    ("default", "all 0.3s ease"),
    ("slow", "all 0.6s ease"),
    ("fast", "all 0.15s ease"),
];

fn scale(name: &str, ramp: &Ramp) -> ColorScale {
    ColorScale {
        name: name.to_string(),
        // shade 500 is the base color of every default ramp
        color: ramp[5].to_string(),
        shades: SHADE_STEPS
            .iter()
            .zip(ramp)
            .map(|(step, value)| ColorShade::new(step.to_string(), *value))
            .collect(),
    }
}

fn named<V: Copy, T>(entries: &[(&str, V)], convert: impl Fn(V) -> T) -> IndexMap<String, T> {
    entries
        .iter()
        .map(|&(name, value)| (name.to_string(), convert(value)))
        .collect()
}

/// Default palette: one Tailwind ramp per role.
pub fn default_palette() -> ColorPalette {
    ColorPalette {
        primary: scale("Primary", &PRIMARY),
        secondary: scale("Secondary", &SECONDARY),
        accent: scale("Accent", &ACCENT),
        neutral: scale("Neutral", &NEUTRAL),
        success: scale("Success", &SUCCESS),
        warning: scale("Warning", &WARNING),
        error: scale("Error", &ERROR),
        info: scale("Info", &INFO),
    }
}

/// Default spacing: 4px base unit with a hand-tuned scale.
pub fn default_spacing() -> SpacingSettings {
    SpacingSettings {
        base_unit: 4,
        scale: SPACING_SCALE.to_vec(),
        breakpoints: named(&BREAKPOINTS, |px| px),
    }
}

pub fn default_components() -> ComponentSettings {
    ComponentSettings {
        border_radius: named(&BORDER_RADIUS, str::to_string),
        border_width: named(&BORDER_WIDTH, str::to_string),
        box_shadow: BOX_SHADOW.iter().map(|s| s.to_string()).collect(),
        transitions: named(&TRANSITIONS, str::to_string),
    }
}
