//! Strata CLI
//!
//! Command-line front end for the design token engine:
//! - `scale`: print a modular type scale (or its standalone stylesheet)
//! - `shades`: print the 11-shade ramp for a base color
//! - `text-color`: pick black or white text for a background
//! - `export`: render a design system as CSS, SCSS, Tailwind or JSON
//! - `init`: write a `strata.toml` with the built-in defaults

mod config;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use strata_tokens::{
    generate_scale, generate_shades, pick_text_color, render, typography_css, typography_scss,
    ColorAdjustment, ExportFormat, RatioPreset, TypographySettings,
};
use tracing_subscriber::EnvFilter;

use config::{StrataConfig, CONFIG_FILE};

/// Design token generator
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(about = "Generate type scales and color ramps, export design tokens")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the type scale for a base size and ratio
    Scale {
        /// Base font size in px
        #[arg(long, default_value_t = 16.0)]
        base_size: f64,

        /// Ratio between adjacent steps
        #[arg(long, conflicts_with = "preset")]
        ratio: Option<f64>,

        /// Named ratio (minor-second, major-second, minor-third, major-third,
        /// perfect-fourth, perfect-fifth, golden-ratio)
        #[arg(long, value_parser = parse_preset)]
        preset: Option<RatioPreset>,

        /// Base line height
        #[arg(long, default_value_t = 1.5)]
        line_height: f64,

        /// Spacing grid unit in px
        #[arg(long, default_value_t = 8.0)]
        base_unit: f64,

        /// Print the typography stylesheet instead of a table
        #[arg(long, value_enum)]
        sheet: Option<SheetSyntax>,
    },

    /// Print the shade ramp for a base color
    Shades {
        /// Base color as #RRGGBB
        hex: String,

        /// Contrast adjustment (-50..=50)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        contrast: i32,

        /// Saturation adjustment (-50..=50)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        saturation: i32,

        /// Luminance adjustment (-50..=50)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        luminance: i32,
    },

    /// Print the text color (black or white) for a background
    TextColor {
        /// Background color as #RRGGBB
        hex: String,
    },

    /// Export the design system
    Export {
        /// Output format (defaults to the config file's, then css)
        #[arg(short, long, value_parser = parse_format)]
        format: Option<ExportFormat>,

        /// Config file or directory containing strata.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file or directory (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        no_typography: bool,

        #[arg(long)]
        no_colors: bool,

        #[arg(long)]
        no_spacing: bool,

        #[arg(long)]
        no_components: bool,

        #[arg(long)]
        no_dark_mode: bool,
    },

    /// Write a strata.toml with the default design system
    Init {
        /// Target file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SheetSyntax {
    Css,
    Scss,
}

fn parse_preset(s: &str) -> std::result::Result<RatioPreset, String> {
    RatioPreset::from_id(s).ok_or_else(|| {
        let ids: Vec<&str> = RatioPreset::all().iter().map(|p| p.id()).collect();
        format!("unknown preset '{}', expected one of: {}", s, ids.join(", "))
    })
}

fn parse_format(s: &str) -> std::result::Result<ExportFormat, String> {
    s.parse().map_err(|e: strata_tokens::TokenError| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scale {
            base_size,
            ratio,
            preset,
            line_height,
            base_unit,
            sheet,
        } => cmd_scale(
            TypographySettings {
                base_font_size: base_size,
                base_line_height: line_height,
                base_unit,
                ..Default::default()
            },
            ratio,
            preset,
            sheet,
        ),
        Commands::Shades {
            hex,
            contrast,
            saturation,
            luminance,
        } => cmd_shades(&hex, ColorAdjustment::new(contrast, saturation, luminance)),
        Commands::TextColor { hex } => {
            println!("{}", pick_text_color(&hex)?);
            Ok(())
        }
        Commands::Export {
            format,
            config,
            output,
            no_typography,
            no_colors,
            no_spacing,
            no_components,
            no_dark_mode,
        } => {
            let mut config = match config {
                Some(path) => StrataConfig::load_from_dir(&path)?,
                None => StrataConfig::load_or_default(Path::new("."))?,
            };
            let options = &mut config.export.options;
            options.include_typography &= !no_typography;
            options.include_colors &= !no_colors;
            options.include_spacing &= !no_spacing;
            options.include_components &= !no_components;
            options.include_dark_mode &= !no_dark_mode;
            if let Some(format) = format {
                config.export.format = format;
            }
            if output.is_some() {
                config.export.output = output;
            }
            cmd_export(&config)
        }
        Commands::Init { path, force } => cmd_init(&path, force),
    }
}

/// Default `warn`; `RUST_LOG` overrides, `-v` raises to `debug`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_scale(
    settings: TypographySettings,
    ratio: Option<f64>,
    preset: Option<RatioPreset>,
    sheet: Option<SheetSyntax>,
) -> Result<()> {
    let settings = match (ratio, preset) {
        (Some(ratio), _) => TypographySettings {
            scale_ratio: ratio,
            ..settings
        },
        (None, Some(preset)) => settings.with_preset(preset),
        (None, None) => settings,
    };

    match sheet {
        Some(SheetSyntax::Css) => println!("{}", typography_css(&settings)?),
        Some(SheetSyntax::Scss) => println!("{}", typography_scss(&settings)?),
        None => {
            let scale = generate_scale(&settings)?;
            match settings.preset() {
                Some(preset) => println!("{}px, {}", settings.base_font_size, preset),
                None => println!("{}px, ratio {}", settings.base_font_size, settings.scale_ratio),
            }
            print!("{}", report::scale_table(&scale));
        }
    }
    Ok(())
}

fn cmd_shades(hex: &str, adjust: ColorAdjustment) -> Result<()> {
    let shades = generate_shades(hex, adjust)?;
    print!("{}", report::shade_table(&shades)?);
    Ok(())
}

fn cmd_export(config: &StrataConfig) -> Result<()> {
    let export = &config.export;
    let output = render(&config.design, export.format, &export.options)?;

    match &export.output {
        None => println!("{}", output),
        Some(path) => {
            let target = if path.is_dir() {
                path.join(export.format.file_name())
            } else {
                path.clone()
            };
            fs::write(&target, &output)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            eprintln!("Wrote {} export to {}", export.format, target.display());
        }
    }
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    let target = if path.extension().is_some() {
        path.to_path_buf()
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        path.join(CONFIG_FILE)
    };

    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        );
    }

    fs::write(&target, StrataConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    tracing::info!(path = %target.display(), "wrote default config");
    println!("Created {}", target.display());
    Ok(())
}
