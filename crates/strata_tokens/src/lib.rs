//! Strata design token engine
//!
//! Derives a typographic scale and color ramps from a handful of numeric
//! parameters and serializes the resulting design system into CSS, SCSS,
//! Tailwind config or JSON.
//!
//! # Overview
//!
//! - **Typography**: [`generate_scale`] turns a base size and ratio into 11
//!   steps (`-2..=8`) with line height, tracking and vertical rhythm.
//! - **Colors**: [`generate_shades`] derives an 11-shade ramp (`50..950`)
//!   from a base hex color; [`pick_text_color`] chooses black or white text.
//! - **State**: [`DesignSystemState`] aggregates typography, colors, spacing
//!   and component tokens. It is a plain value owned by the caller.
//! - **Export**: [`render`] writes a state in any [`ExportFormat`].
//!
//! Everything is synchronous and pure: no I/O, no global state, no caching.
//!
//! # Quick Start
//!
//! ```rust
//! use strata_tokens::{render, DesignSystemState, ExportFormat, ExportOptions};
//!
//! let state = DesignSystemState::default();
//! let css = render(&state, ExportFormat::Css, &ExportOptions::default()).unwrap();
//! assert!(css.starts_with(":root {"));
//! ```
//!
//! # Regenerating a color role
//!
//! ```rust
//! use strata_tokens::{ColorAdjustment, ColorRole, DesignSystemState};
//!
//! let state = DesignSystemState::default()
//!     .regenerate_color(ColorRole::Primary, "Brand", "#ff6600", ColorAdjustment::default())
//!     .unwrap();
//! assert_eq!(state.colors.primary.shade("500").unwrap().value, "#ff6600");
//! ```

pub mod error;
pub mod export;
pub mod number;
pub mod presets;
pub mod state;
pub mod tokens;

// Re-export commonly used types
pub use error::{Result, TokenError};
pub use export::{render, typography_css, typography_scss, ExportFormat, ExportOptions};
pub use state::DesignSystemState;
pub use tokens::*;
