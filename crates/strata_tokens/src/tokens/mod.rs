//! Design tokens
//!
//! Tokens are the atomic values that make up a design system:
//! - Typography (base metrics and the generated type scale)
//! - Colors (role palettes and their 11-shade ramps)
//! - Spacing (scale and breakpoints)
//! - Component values (radii, border widths, shadows, transitions)

mod color;
mod component;
mod spacing;
mod typography;

pub use color::*;
pub use component::*;
pub use spacing::*;
pub use typography::*;
