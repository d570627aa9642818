//! AAPS icons CLI
//!
//! List, inspect, check and export the AAPS icon set.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aaps_icons::IconDefinition;
use aaps_vector::{to_svg_document, validate, Color, Severity};

mod config;

use config::IconsConfig;

#[derive(Parser)]
#[command(name = "aaps-icons")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect, check and export the AAPS icon set", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./aaps-icons.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List icon names with their display sizes
    List {
        /// Only icons with body-zone groups, with their zones
        #[arg(long)]
        zones: bool,
    },

    /// Describe one icon
    Show {
        /// Registered icon name, e.g. IcActivity
        name: String,

        /// Print the full definition as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one icon as an SVG document
    Svg {
        name: String,

        /// Tint color (#RRGGBB or #RRGGBBAA)
        #[arg(short, long)]
        tint: Option<Color>,

        /// Output width; height keeps the icon's aspect ratio
        #[arg(short, long)]
        size: Option<f32>,
    },

    /// Write every icon as <name>.svg
    Export {
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Run data-integrity checks over the whole set
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = IconsConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::List { zones } => cmd_list(zones),
        Commands::Show { name, json } => cmd_show(&name, json),
        Commands::Svg { name, tint, size } => cmd_svg(&config, &name, tint, size),
        Commands::Export { out } => cmd_export(&config, out.as_deref()),
        Commands::Check => cmd_check(&config),
    }
}

fn cmd_list(zones: bool) -> Result<()> {
    for icon in aaps_icons::all() {
        if zones {
            let tags = aaps_icons::zones(icon.name())?;
            if tags.is_empty() {
                continue;
            }
            let tags: Vec<_> = tags.iter().map(|z| z.as_str()).collect();
            println!("{}: {}", icon.name(), tags.join(", "));
        } else {
            let size = icon.display_size();
            println!("{:<28} {}x{}", icon.name(), size.width, size.height);
        }
    }
    Ok(())
}

fn cmd_show(name: &str, json: bool) -> Result<()> {
    let icon = aaps_icons::get(name)?;

    if json {
        let out = serde_json::to_string_pretty(icon).context("Failed to serialize icon")?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", icon.name());
    if let Some(description) = icon.description() {
        println!("  {description}");
    }
    let (display, viewport) = (icon.display_size(), icon.viewport());
    println!("  display:  {}x{}", display.width, display.height);
    println!("  viewport: {}x{}", viewport.width, viewport.height);
    println!("  groups:   {} ({} commands)", icon.groups().len(), icon.command_count());

    for (index, group) in icon.groups().iter().enumerate() {
        let mut line = format!("  [{index}]");
        if let Some(name) = group.name() {
            line.push_str(&format!(" {name}"));
        }
        if let Some(fill) = group.style.fill {
            line.push_str(&format!(" fill {fill}"));
        }
        if let Some(stroke) = group.style.stroke {
            line.push_str(&format!(" stroke {stroke} {}", group.style.stroke_width));
        }
        line.push_str(&format!(" ({} commands)", group.commands.len()));
        println!("{line}");
    }
    Ok(())
}

fn cmd_svg(config: &IconsConfig, name: &str, tint: Option<Color>, size: Option<f32>) -> Result<()> {
    let icon = aaps_icons::get(name)?;
    let options = config.export.render_options(icon, size, tint);
    print!("{}", to_svg_document(icon, &options)?);
    Ok(())
}

fn cmd_export(config: &IconsConfig, out: Option<&Path>) -> Result<()> {
    let out = out.unwrap_or(config.export.output_dir.as_path());
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let mut count = 0;
    for icon in aaps_icons::all() {
        write_svg(config, icon, out)?;
        count += 1;
    }

    info!("Exported {} icons to {}", count, out.display());
    Ok(())
}

fn write_svg(config: &IconsConfig, icon: &IconDefinition, dir: &Path) -> Result<()> {
    let options = config.export.render_options(icon, None, None);
    let document = to_svg_document(icon, &options)
        .with_context(|| format!("Failed to render {}", icon.name()))?;

    let path = dir.join(format!("{}.svg", icon.name()));
    fs::write(&path, document).with_context(|| format!("Failed to write {}", path.display()))
}

fn cmd_check(config: &IconsConfig) -> Result<()> {
    let (mut errors, mut warnings) = (0, 0);

    for icon in aaps_icons::all() {
        for issue in validate(icon) {
            match issue.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
            }
            println!("{}: {}", icon.name(), issue);
        }
    }

    let total = aaps_icons::names().count();
    if errors > 0 || (config.check.strict && warnings > 0) {
        anyhow::bail!(
            "{} icons checked: {} errors, {} warnings",
            total,
            errors,
            warnings
        );
    }

    if warnings > 0 {
        warn!("{} icons checked: {} warnings", total, warnings);
    } else {
        info!("{} icons checked, no issues", total);
    }
    Ok(())
}
