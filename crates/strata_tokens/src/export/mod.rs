//! Export serializer
//!
//! Renders a [`DesignSystemState`] as CSS custom properties, SCSS variables
//! and maps, a Tailwind config, or JSON. Every emitter is a pure function of
//! the state and [`ExportOptions`]; rendering the same input twice yields
//! byte-identical text.
//!
//! The layouts (variable names, units, comments, blank lines) are fixed so
//! the output can replace files generated by earlier versions of the tool.

mod css;
mod json;
mod scss;
mod tailwind;
mod typography;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::state::DesignSystemState;
use crate::tokens::generate_scale;

pub use typography::{typography_css, typography_scss};

/// Output format of an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Tailwind,
    Json,
}

impl ExportFormat {
    /// Format tag as accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
        }
    }

    /// Conventional file name for a downloaded export.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Css => "design-system.css",
            Self::Scss => "design-system.scss",
            Self::Tailwind => "tailwind.config.js",
            Self::Json => "design-system.json",
        }
    }

    pub fn all() -> &'static [ExportFormat] {
        const FORMATS: [ExportFormat; 4] = [
            ExportFormat::Css,
            ExportFormat::Scss,
            ExportFormat::Tailwind,
            ExportFormat::Json,
        ];
        &FORMATS
    }
}

impl FromStr for ExportFormat {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|format| format.id().eq_ignore_ascii_case(tag))
            .ok_or_else(|| TokenError::UnsupportedFormat(s.to_string()))
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Sections to include in an export. Everything is on by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub include_typography: bool,
    pub include_colors: bool,
    pub include_spacing: bool,
    pub include_components: bool,
    /// Emit a `.dark` block (CSS) or `darkMode: 'class'` (Tailwind)
    pub include_dark_mode: bool,
}

impl ExportOptions {
    /// Every section, including dark mode.
    pub fn all() -> Self {
        Self {
            include_typography: true,
            include_colors: true,
            include_spacing: true,
            include_components: true,
            include_dark_mode: true,
        }
    }

    /// No sections at all.
    pub fn none() -> Self {
        Self {
            include_typography: false,
            include_colors: false,
            include_spacing: false,
            include_components: false,
            include_dark_mode: false,
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Render `state` in `format`, limited to the sections enabled in `options`.
///
/// Typography settings are validated (and the scale generated) only when
/// the typography section is enabled.
pub fn render(
    state: &DesignSystemState,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<String> {
    let scale = if options.include_typography {
        generate_scale(&state.typography)?
    } else {
        Vec::new()
    };

    let output = match format {
        ExportFormat::Css => css::CssSheet::new(state, &scale, options).to_string(),
        ExportFormat::Scss => scss::ScssSheet::new(state, &scale, options).to_string(),
        ExportFormat::Tailwind => tailwind::TailwindConfig::new(state, &scale, options).to_string(),
        ExportFormat::Json => json::render(state, &scale, options)?,
    };

    tracing::debug!(%format, bytes = output.len(), ?options, "rendered design system");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("css".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert_eq!("SCSS".parse::<ExportFormat>().unwrap(), ExportFormat::Scss);
        assert_eq!(" tailwind ".parse::<ExportFormat>().unwrap(), ExportFormat::Tailwind);
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, TokenError::UnsupportedFormat(ref tag) if tag == "xml"));
    }

    #[test]
    fn test_file_names() {
        let names: Vec<&str> = ExportFormat::all().iter().map(|f| f.file_name()).collect();
        assert_eq!(
            names,
            [
                "design-system.css",
                "design-system.scss",
                "tailwind.config.js",
                "design-system.json"
            ]
        );
    }

    #[test]
    fn test_invalid_typography_only_matters_when_exported() {
        let state = DesignSystemState::default().with_typography(crate::tokens::TypographySettings {
            scale_ratio: 0.0,
            ..Default::default()
        });
        assert!(render(&state, ExportFormat::Css, &ExportOptions::all()).is_err());

        let options = ExportOptions {
            include_typography: false,
            ..ExportOptions::all()
        };
        assert!(render(&state, ExportFormat::Css, &options).is_ok());
    }
}
