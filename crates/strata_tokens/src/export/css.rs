//! CSS custom properties

use std::fmt::{self, Display, Formatter};

use super::ExportOptions;
use crate::number::js_number;
use crate::state::DesignSystemState;
use crate::tokens::{ScaleStep, SpacingSettings};

/// A `:root` block plus an optional `.dark` override block.
pub(super) struct CssSheet<'a> {
    state: &'a DesignSystemState,
    scale: &'a [ScaleStep],
    options: &'a ExportOptions,
}

impl<'a> CssSheet<'a> {
    pub(super) fn new(
        state: &'a DesignSystemState,
        scale: &'a [ScaleStep],
        options: &'a ExportOptions,
    ) -> Self {
        Self {
            state,
            scale,
            options,
        }
    }

    fn write_typography(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let typography = &self.state.typography;
        writeln!(f, "  /* Typography */")?;
        writeln!(f, "  --base-font-size: {}px;", js_number(typography.base_font_size))?;
        writeln!(f, "  --base-line-height: {};", js_number(typography.base_line_height))?;
        writeln!(f, "  --font-family-body: {};", typography.font_family.body)?;
        writeln!(f, "  --font-family-heading: {};", typography.font_family.heading)?;
        writeln!(f, "  --font-family-mono: {};", typography.font_family.monospace)?;
        writeln!(f)?;

        for step in self.scale {
            let n = step.step;
            writeln!(f, "  --text-{n}: {}rem;", step.rem)?;
            writeln!(f, "  --leading-{n}: {};", step.line_height)?;
            writeln!(f, "  --tracking-{n}: {}em;", step.letter_spacing)?;
            writeln!(f, "  --rhythm-{n}: {}rem;", step.rhythm.single)?;
        }
        writeln!(f)
    }

    fn write_colors(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "  /* Colors */")?;
        for (role, scale) in self.state.colors.iter() {
            for shade in &scale.shades {
                writeln!(f, "  --{role}-{}: {};", shade.name, shade.value)?;
            }
        }
        writeln!(f)
    }

    fn write_spacing(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let spacing = &self.state.spacing;
        writeln!(f, "  /* Spacing */")?;
        for (index, &px) in spacing.scale.iter().enumerate() {
            writeln!(f, "  --space-{index}: {}rem;", js_number(SpacingSettings::rem(px)))?;
        }
        writeln!(f)?;

        writeln!(f, "  /* Breakpoints */")?;
        for (name, px) in &spacing.breakpoints {
            writeln!(f, "  --breakpoint-{name}: {px}px;")?;
        }
        writeln!(f)
    }

    fn write_components(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let components = &self.state.components;
        writeln!(f, "  /* Border Radius */")?;
        for (name, value) in &components.border_radius {
            writeln!(f, "  --radius-{name}: {value};")?;
        }
        writeln!(f)?;

        writeln!(f, "  /* Border Width */")?;
        for (name, value) in &components.border_width {
            writeln!(f, "  --border-{name}: {value};")?;
        }
        writeln!(f)?;

        writeln!(f, "  /* Box Shadow */")?;
        for (name, shadow) in components.named_shadows() {
            writeln!(f, "  --shadow-{name}: {shadow};")?;
        }
        writeln!(f)?;

        writeln!(f, "  /* Transitions */")?;
        for (name, value) in &components.transitions {
            writeln!(f, "  --transition-{name}: {value};")?;
        }
        Ok(())
    }

    fn write_dark(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, ".dark {{")?;
        if self.options.include_colors {
            for (role, scale) in self.state.colors.iter() {
                for (name, value) in scale.dark_shades() {
                    writeln!(f, "  --{role}-{name}: {value};")?;
                }
            }
        }
        writeln!(f, "}}")
    }
}

impl Display for CssSheet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, ":root {{")?;
        if self.options.include_typography {
            self.write_typography(f)?;
        }
        if self.options.include_colors {
            self.write_colors(f)?;
        }
        if self.options.include_spacing {
            self.write_spacing(f)?;
        }
        if self.options.include_components {
            self.write_components(f)?;
        }
        writeln!(f, "}}")?;

        if self.options.include_dark_mode {
            self.write_dark(f)?;
        }
        Ok(())
    }
}
