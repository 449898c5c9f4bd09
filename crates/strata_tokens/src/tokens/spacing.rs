//! Spacing tokens for theming

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::tokens::typography::REM_BASE_PX;

/// Spacing scale and responsive breakpoints, all in whole px.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingSettings {
    pub base_unit: u32,
    /// Ascending px values; index `i` is exported as `space-i`
    pub scale: Vec<u32>,
    pub breakpoints: IndexMap<String, u32>,
}

impl Default for SpacingSettings {
    fn default() -> Self {
        crate::presets::default_spacing()
    }
}

impl SpacingSettings {
    /// A px value in rem.
    pub fn rem(px: u32) -> f64 {
        f64::from(px) / REM_BASE_PX
    }

    pub fn with_base_unit(self, px: u32) -> Result<Self> {
        if px == 0 {
            return Err(TokenError::invalid("baseUnit", "must be greater than zero"));
        }
        Ok(Self {
            base_unit: px,
            ..self
        })
    }

    /// Insert a value into the scale, keeping it sorted.
    pub fn with_value(mut self, px: u32) -> Result<Self> {
        if px == 0 {
            return Err(TokenError::invalid("scale", "custom values must be greater than zero"));
        }
        if self.scale.contains(&px) {
            return Err(TokenError::invalid(
                "scale",
                format!("{px}px already exists in the spacing scale"),
            ));
        }
        self.scale.push(px);
        self.scale.sort_unstable();
        Ok(self)
    }

    /// Remove every occurrence of `px` from the scale.
    pub fn without_value(mut self, px: u32) -> Self {
        self.scale.retain(|&value| value != px);
        self
    }

    /// Set a breakpoint width. Unknown names are appended.
    pub fn with_breakpoint(mut self, name: impl Into<String>, px: u32) -> Result<Self> {
        if px == 0 {
            return Err(TokenError::invalid("breakpoints", "width must be greater than zero"));
        }
        self.breakpoints.insert(name.into(), px);
        Ok(self)
    }
}
