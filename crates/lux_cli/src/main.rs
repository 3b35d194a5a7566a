//! `lux` - render a built-in demo scene to a PNG file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use lux_renderer::{render, ImageBuffer, RenderConfig};

mod cli;
mod logger;
mod scenes;

use cli::Args;
use logger::init_logger;
use scenes::SceneKind;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    if args.list {
        for kind in SceneKind::value_variants() {
            if let Some(value) = kind.to_possible_value() {
                println!("{:<14} {}", value.get_name(), kind.description());
            }
        }
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let scene = scenes::build(args.scene, args.mesh.as_deref())?;

    let image = render(&scene.world, &scene.camera, &config);
    save_png(&image, &args.output)?;
    info!("Saved {}", args.output.display());

    Ok(())
}

/// Start from `--config` (or the defaults) and apply the individual flags.
fn resolve_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid render config {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }

    anyhow::ensure!(
        config.width > 0 && config.height > 0,
        "image size must be non-zero, got {}x{}",
        config.width,
        config.height
    );
    Ok(config)
}

fn save_png(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    let rgba = image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.to_rgba())
        .context("pixel buffer does not match image size")?;
    rgba.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from(["lux", "--width", "100", "--depth", "2"]).unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.width, 100);
        assert_eq!(config.height, RenderConfig::default().height);
        assert_eq!(config.max_depth, 2);
    }

    #[test]
    fn test_config_file_then_flags() {
        let path = std::env::temp_dir().join(format!("lux_config_{}.json", std::process::id()));
        fs::write(&path, r#"{ "width": 50, "height": 40, "max_depth": 7 }"#).unwrap();

        let args = Args::try_parse_from([
            "lux",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "30",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.width, 50);
        assert_eq!(config.height, 30);
        assert_eq!(config.max_depth, 7);
    }

    #[test]
    fn test_zero_size_rejected() {
        let args = Args::try_parse_from(["lux", "--width", "0"]).unwrap();
        assert!(resolve_config(&args).is_err());
    }
}
