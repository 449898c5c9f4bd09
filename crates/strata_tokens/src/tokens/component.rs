//! Component tokens: radii, border widths, shadows and transitions
//!
//! Values are kept as raw CSS strings and emitted verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shadow token name for a position in the shadow list.
///
/// Positions past `xl` all share the `2xl` name, so with more than six
/// shadows the later entries override earlier ones in keyed formats.
pub fn shadow_name(index: usize) -> &'static str {
    match index {
        0 => "none",
        1 => "sm",
        2 => "md",
        3 => "lg",
        4 => "xl",
        _ => "2xl",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentSettings {
    pub border_radius: IndexMap<String, String>,
    pub border_width: IndexMap<String, String>,
    /// Ordered from none to largest
    pub box_shadow: Vec<String>,
    pub transitions: IndexMap<String, String>,
}

impl Default for ComponentSettings {
    fn default() -> Self {
        crate::presets::default_components()
    }
}

impl ComponentSettings {
    /// Shadows with their token names.
    pub fn named_shadows(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.box_shadow
            .iter()
            .enumerate()
            .map(|(index, shadow)| (shadow_name(index), shadow.as_str()))
    }
}
