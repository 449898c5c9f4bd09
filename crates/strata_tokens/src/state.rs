//! The design system aggregate
//!
//! `DesignSystemState` is a plain value. The caller owns the single mutable
//! copy and decides its lifetime; updates replace a whole section and hand
//! back a new state, and `reset` returns the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tokens::*;

/// Typography, colors, spacing and component tokens of one design system.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSystemState {
    pub typography: TypographySettings,
    pub colors: ColorPalette,
    pub spacing: SpacingSettings,
    pub components: ComponentSettings,
}

impl DesignSystemState {
    /// The built-in defaults.
    pub fn reset() -> Self {
        Self::default()
    }

    pub fn with_typography(self, typography: TypographySettings) -> Self {
        Self { typography, ..self }
    }

    pub fn with_colors(self, colors: ColorPalette) -> Self {
        Self { colors, ..self }
    }

    /// Replace the scale of a single color role.
    pub fn with_color_scale(mut self, role: ColorRole, scale: ColorScale) -> Self {
        self.colors = self.colors.with(role, scale);
        self
    }

    pub fn with_spacing(self, spacing: SpacingSettings) -> Self {
        Self { spacing, ..self }
    }

    pub fn with_components(self, components: ComponentSettings) -> Self {
        Self { components, ..self }
    }

    /// Regenerate one role's ramp from a new base color.
    pub fn regenerate_color(
        self,
        role: ColorRole,
        name: impl Into<String>,
        base_hex: &str,
        adjust: ColorAdjustment,
    ) -> Result<Self> {
        let scale = ColorScale::generate(name, base_hex, adjust)?;
        tracing::debug!(%role, base = base_hex, "replaced color scale");
        Ok(self.with_color_scale(role, scale))
    }

    /// The type scale for the current typography settings.
    pub fn type_scale(&self) -> Result<Vec<ScaleStep>> {
        generate_scale(&self.typography)
    }
}
