//! JSON export: the state filtered to the enabled sections

use serde::Serialize;

use super::ExportOptions;
use crate::error::Result;
use crate::state::DesignSystemState;
use crate::tokens::{ColorPalette, ComponentSettings, ScaleStep, SpacingSettings, TypographySettings};

/// Typography settings with the generated scale appended.
#[derive(Serialize)]
struct TypographyExport<'a> {
    #[serde(flatten)]
    settings: &'a TypographySettings,
    scale: &'a [ScaleStep],
}

#[derive(Serialize)]
struct FilteredState<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    typography: Option<TypographyExport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    colors: Option<&'a ColorPalette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spacing: Option<&'a SpacingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<&'a ComponentSettings>,
}

/// Pretty-printed with two-space indentation.
pub(super) fn render(
    state: &DesignSystemState,
    scale: &[ScaleStep],
    options: &ExportOptions,
) -> Result<String> {
    let filtered = FilteredState {
        typography: options.include_typography.then(|| TypographyExport {
            settings: &state.typography,
            scale,
        }),
        colors: options.include_colors.then_some(&state.colors),
        spacing: options.include_spacing.then_some(&state.spacing),
        components: options.include_components.then_some(&state.components),
    };
    Ok(serde_json::to_string_pretty(&filtered)?)
}
