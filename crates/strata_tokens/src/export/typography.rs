//! Standalone typography sheets
//!
//! The typography tool exports its own sheet, independent of the rest of
//! the design system: base values, every scale step annotated with its px
//! size and full rhythm set, and (CSS only) an 8-step spacing scale derived
//! from the base unit.

use std::fmt::{self, Display, Formatter};

use crate::error::Result;
use crate::number::js_number;
use crate::tokens::{generate_scale, ScaleStep, TypographySettings, REM_BASE_PX};

/// Multiples of the base unit emitted as `--space-1` through `--space-8`.
const SPACING_STEPS: u32 = 8;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Css,
    Scss,
}

struct TypographySheet<'a> {
    settings: &'a TypographySettings,
    scale: &'a [ScaleStep],
    syntax: Syntax,
}

impl TypographySheet<'_> {
    fn write_base(&self, f: &mut Formatter<'_>, prefix: &str, indent: &str) -> fmt::Result {
        let s = self.settings;
        writeln!(f, "{indent}{prefix}base-font-size: {}px;", js_number(s.base_font_size))?;
        writeln!(f, "{indent}{prefix}base-line-height: {};", js_number(s.base_line_height))?;
        writeln!(f, "{indent}{prefix}scale-ratio: {};", js_number(s.scale_ratio))?;
        writeln!(f, "{indent}{prefix}base-unit: {}px;", js_number(s.base_unit))?;
        writeln!(f, "{indent}{prefix}font-family-body: {};", s.font_family.body)?;
        writeln!(f, "{indent}{prefix}font-family-heading: {};", s.font_family.heading)?;
        writeln!(f, "{indent}{prefix}font-family-mono: {};", s.font_family.monospace)
    }

    /// Steps separated by blank lines, with no trailing newline.
    fn write_steps(&self, f: &mut Formatter<'_>, prefix: &str, indent: &str) -> fmt::Result {
        let (open, close) = match self.syntax {
            Syntax::Css => ("/*", " */"),
            Syntax::Scss => ("//", ""),
        };
        for (i, step) in self.scale.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let n = step.step;
            writeln!(f)?;
            writeln!(f, "{indent}{open} Step {n} - {}px{close}", step.px)?;
            writeln!(f, "{indent}{prefix}text-{n}: {}rem;", step.rem)?;
            writeln!(f, "{indent}{prefix}leading-{n}: {};", step.line_height)?;
            writeln!(f, "{indent}{prefix}tracking-{n}: {}em;", step.letter_spacing)?;
            writeln!(f, "{indent}{prefix}rhythm-{n}: {}rem;", step.rhythm.single)?;
            writeln!(f, "{indent}{prefix}rhythm-{n}-half: {}rem;", step.rhythm.half)?;
            write!(f, "{indent}{prefix}rhythm-{n}-double: {}rem;", step.rhythm.double)?;
        }
        Ok(())
    }
}

impl Display for TypographySheet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.syntax {
            Syntax::Css => {
                writeln!(f, ":root {{")?;
                writeln!(f, "  /* Base Values */")?;
                self.write_base(f, "--", "  ")?;
                writeln!(f)?;
                writeln!(f, "  /* Font Scale with Computed Metrics */")?;
                self.write_steps(f, "--", "  ")?;
                writeln!(f)?;
                writeln!(f)?;
                write!(f, "  /* Spacing Scale */")?;
                for k in 1..=SPACING_STEPS {
                    let rem = self.settings.base_unit * f64::from(k) / REM_BASE_PX;
                    write!(f, "\n  --space-{k}: {}rem;", js_number(rem))?;
                }
                write!(f, "\n}}")
            }
            Syntax::Scss => {
                writeln!(f, "// Typography System")?;
                self.write_base(f, "$", "")?;
                writeln!(f)?;
                writeln!(f, "// Font Scale with Computed Metrics")?;
                self.write_steps(f, "$", "")
            }
        }
    }
}

fn render(settings: &TypographySettings, syntax: Syntax) -> Result<String> {
    let scale = generate_scale(settings)?;
    Ok(TypographySheet {
        settings,
        scale: &scale,
        syntax,
    }
    .to_string())
}

/// The typography tool's CSS sheet.
pub fn typography_css(settings: &TypographySettings) -> Result<String> {
    render(settings, Syntax::Css)
}

/// The typography tool's SCSS sheet.
pub fn typography_scss(settings: &TypographySettings) -> Result<String> {
    render(settings, Syntax::Scss)
}
