//! Tailwind `tailwind.config.js`
//!
//! Plain string templating; the result is a CommonJS module whose
//! `theme.extend` carries the tokens.

use std::fmt::{self, Display, Formatter};

use super::ExportOptions;
use crate::number::js_number;
use crate::state::DesignSystemState;
use crate::tokens::{FontFamilies, ScaleStep, SpacingSettings};

const TRANSITION_PROPERTIES: &str = "color, background-color, border-color, \
     text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter";

pub(super) struct TailwindConfig<'a> {
    state: &'a DesignSystemState,
    scale: &'a [ScaleStep],
    options: &'a ExportOptions,
}

impl<'a> TailwindConfig<'a> {
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
        write!(f, "\n      fontSize: {{")?;
        for step in self.scale {
            write!(
                f,
                "\n        '{}': ['{}rem', {{\n          lineHeight: {},\n          letterSpacing: '{}em'\n        }}],",
                step.step, step.rem, step.line_height, step.letter_spacing
            )?;
        }
        write!(f, "\n      }},")?;

        let families = &self.state.typography.font_family;
        write!(f, "\n      fontFamily: {{")?;
        write!(
            f,
            "\n        sans: ['{}', 'sans-serif'],",
            FontFamilies::primary(&families.body)
        )?;
        write!(
            f,
            "\n        heading: ['{}', 'sans-serif'],",
            FontFamilies::primary(&families.heading)
        )?;
        write!(
            f,
            "\n        mono: ['{}', 'monospace'],",
            FontFamilies::primary(&families.monospace)
        )?;
        write!(f, "\n      }},")
    }

    fn write_colors(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\n      colors: {{")?;
        for (role, scale) in self.state.colors.iter() {
            write!(f, "\n        {role}: {{")?;
            for shade in &scale.shades {
                write!(f, "\n          '{}': '{}',", shade.name, shade.value)?;
            }
            write!(f, "\n        }},")?;
        }
        write!(f, "\n      }},")
    }

    fn write_spacing(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let spacing = &self.state.spacing;
        let rems = spacing
            .scale
            .iter()
            .enumerate()
            .map(|(index, &px)| (index, format!("{}rem", js_number(SpacingSettings::rem(px)))));
        write_object(f, "spacing", rems)?;

        let screens = spacing
            .breakpoints
            .iter()
            .map(|(name, px)| (name, format!("{px}px")));
        write_object(f, "screens", screens)
    }

    fn write_components(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let components = &self.state.components;
        write_object(f, "borderRadius", &components.border_radius)?;
        write_object(f, "borderWidth", &components.border_width)?;
        write_object(f, "boxShadow", components.named_shadows())?;

        write!(f, "\n      transitionProperty: {{")?;
        write!(f, "\n        'DEFAULT': '{TRANSITION_PROPERTIES}',")?;
        write!(f, "\n      }},")
    }
}

/// A `theme.extend` entry whose keys and values are quoted strings.
fn write_object<K, V>(
    f: &mut Formatter<'_>,
    name: &str,
    entries: impl IntoIterator<Item = (K, V)>,
) -> fmt::Result
where
    K: Display,
    V: Display,
{
    write!(f, "\n      {name}: {{")?;
    for (key, value) in entries {
        write!(f, "\n        '{key}': '{value}',")?;
    }
    write!(f, "\n      }},")
}

impl Display for TailwindConfig<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("/** @type {import('tailwindcss').Config} */\n")?;
        f.write_str("module.exports = {\n  theme: {\n    extend: {")?;

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

        f.write_str("\n    },\n  },")?;
        if self.options.include_dark_mode {
            f.write_str("\n  darkMode: 'class',")?;
        }
        f.write_str("\n}")
    }
}
