//! SCSS variables, maps and lookup helpers

use std::fmt::{self, Display, Formatter};

use super::ExportOptions;
use crate::number::js_number;
use crate::state::DesignSystemState;
use crate::tokens::{ScaleStep, SpacingSettings};

pub(super) struct ScssSheet<'a> {
    state: &'a DesignSystemState,
    scale: &'a [ScaleStep],
    options: &'a ExportOptions,
}

impl<'a> ScssSheet<'a> {
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
        writeln!(f, "// Typography")?;
        writeln!(f, "$base-font-size: {}px;", js_number(typography.base_font_size))?;
        writeln!(f, "$base-line-height: {};", js_number(typography.base_line_height))?;
        writeln!(f, "$font-family-body: {};", typography.font_family.body)?;
        writeln!(f, "$font-family-heading: {};", typography.font_family.heading)?;
        writeln!(f, "$font-family-mono: {};", typography.font_family.monospace)?;
        writeln!(f)?;

        writeln!(f, "// Type Scale")?;
        for step in self.scale {
            let n = step.step;
            writeln!(f, "$text-{n}: {}rem;", step.rem)?;
            writeln!(f, "$leading-{n}: {};", step.line_height)?;
            writeln!(f, "$tracking-{n}: {}em;", step.letter_spacing)?;
            writeln!(f, "$rhythm-{n}: {}rem;", step.rhythm.single)?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_colors(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "// Colors")?;
        for (role, scale) in self.state.colors.iter() {
            writeln!(f, "${role}: (")?;
            for shade in &scale.shades {
                writeln!(f, "  {}: {},", shade.name, shade.value)?;
            }
            writeln!(f, ");")?;
            writeln!(f)?;
        }

        f.write_str(concat!(
            "// Color function\n",
            "@function color($color, $shade) {\n",
            "  @return map-get($#{$color}, $shade);\n",
            "}\n",
            "\n",
        ))
    }

    fn write_spacing(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let spacing = &self.state.spacing;
        writeln!(f, "// Spacing")?;
        writeln!(f, "$spacing: (")?;
        for (index, &px) in spacing.scale.iter().enumerate() {
            writeln!(f, "  {index}: {}rem,", js_number(SpacingSettings::rem(px)))?;
        }
        writeln!(f, ");")?;
        writeln!(f)?;

        f.write_str(concat!(
            "// Spacing function\n",
            "@function space($size) {\n",
            "  @return map-get($spacing, $size);\n",
            "}\n",
            "\n",
        ))?;

        writeln!(f, "// Breakpoints")?;
        writeln!(f, "$breakpoints: (")?;
        for (name, px) in &spacing.breakpoints {
            writeln!(f, "  {name}: {px}px,")?;
        }
        writeln!(f, ");")?;
        writeln!(f)
    }

    fn write_components(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let components = &self.state.components;
        write_map(f, "Border Radius", "border-radius", &components.border_radius)?;
        writeln!(f)?;
        write_map(f, "Border Width", "border-width", &components.border_width)?;
        writeln!(f)?;
        write_map(f, "Box Shadow", "shadow", components.named_shadows())?;
        writeln!(f)?;
        write_map(f, "Transitions", "transitions", &components.transitions)
    }
}

/// `// Title` followed by a `$name: (key: value, ...);` map.
fn write_map<K, V>(
    f: &mut Formatter<'_>,
    title: &str,
    name: &str,
    entries: impl IntoIterator<Item = (K, V)>,
) -> fmt::Result
where
    K: Display,
    V: Display,
{
    writeln!(f, "// {title}")?;
    writeln!(f, "${name}: (")?;
    for (key, value) in entries {
        writeln!(f, "  {key}: {value},")?;
    }
    writeln!(f, ");")
}

impl Display for ScssSheet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
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
        Ok(())
    }
}
