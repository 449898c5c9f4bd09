//! Plain-text tables for the `scale` and `shades` commands

use anyhow::Result;
use strata_tokens::{pick_text_color, ColorShade, ScaleStep};

/// One row per step: size, rem, leading, tracking and rhythm.
pub fn scale_table(scale: &[ScaleStep]) -> String {
    let mut out = scale_row("step", "px", "rem", "leading", "tracking", "rhythm", "role");
    for step in scale {
        out.push_str(&scale_row(
            &step.step.to_string(),
            &format!("{}px", step.px),
            &format!("{}rem", step.rem),
            &step.line_height,
            &format!("{}em", step.letter_spacing),
            &format!("{}rem", step.rhythm.single),
            if step.is_heading() { "heading" } else { "body" },
        ));
    }
    out
}

fn scale_row(
    step: &str,
    px: &str,
    rem: &str,
    leading: &str,
    tracking: &str,
    rhythm: &str,
    role: &str,
) -> String {
    format!("{step:>4}  {px:>8}  {rem:>9}  {leading:>7}  {tracking:>8}  {rhythm:>9}  {role}\n")
}

/// One row per shade with the text color that reads on it.
pub fn shade_table(shades: &[ColorShade]) -> Result<String> {
    let mut out = shade_row("shade", "value", "text");
    for shade in shades {
        let text = pick_text_color(&shade.value)?;
        out.push_str(&shade_row(&shade.name, &shade.value, text));
    }
    Ok(out)
}

fn shade_row(name: &str, value: &str, text: &str) -> String {
    format!("{name:>5}  {value:<7}  {text}\n")
}
