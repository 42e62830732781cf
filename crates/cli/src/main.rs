#![deny(unsafe_code)]
//! CLI binary for the OKLCH color picker.
//!
//! Subcommands:
//! - `convert <R> <G> <B>`: sRGB triplet to an `oklch(...)` string
//! - `parse <COLOR>`: CSS color string to rgb and oklch
//! - `pick --scene <FILE>`: resolve the color at a point of a JSON scene
//! - `sample --image <FILE>`: sample the pixel at a point of a PNG capture

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use oklch_picker_capture::{pick_with_capture, PngFileCapture};
use oklch_picker_core::parse::parse_color;
use oklch_picker_core::{
    convert, pick_with_style, CssNamedColors, PickError, PickState, PickedColor, PickerConfig,
    Rgb8, Scene,
};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "oklch-picker", about = "Pick colors and print them as OKLCH")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Report the color source and sRGB triplet on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Picker configuration as a JSON string.
    #[arg(long, global = true, default_value = "{}")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an sRGB triplet to OKLCH.
    Convert {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
    /// Parse a CSS color string and convert it to OKLCH.
    Parse {
        /// Color string, e.g. "rgb(50, 96, 224)", "#3260e0" or "royalblue".
        color: String,
    },
    /// Pick the visible color at a point of a scene by style inspection.
    Pick {
        /// Scene JSON file.
        #[arg(long)]
        scene: PathBuf,

        /// Point x coordinate.
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Point y coordinate.
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Decimals for the lightness percentage (0 to 4).
        #[arg(long)]
        lightness_decimals: Option<usize>,
    },
    /// Pick the color at a point of a PNG surface capture.
    Sample {
        /// Captured surface as a PNG file.
        #[arg(long)]
        image: PathBuf,

        /// Point x coordinate, in surface units.
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Point y coordinate, in surface units.
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Device pixel ratio between surface and image.
        #[arg(long)]
        scale: Option<f64>,

        /// Decimals for the lightness percentage (0 to 4).
        #[arg(long)]
        lightness_decimals: Option<usize>,
    },
}

/// Parses `--config` and applies per-command overrides.
fn load_config(
    raw: &str,
    lightness_decimals: Option<usize>,
    scale: Option<f64>,
) -> Result<PickerConfig, CliError> {
    let params: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
    let mut config = PickerConfig::from_json(&params);
    if let Some(decimals) = lightness_decimals {
        config = config.with_lightness_decimals(decimals);
    }
    if let Some(ratio) = scale {
        config = config.with_device_pixel_ratio(ratio);
    }
    Ok(config)
}

fn load_scene(path: &Path) -> Result<Scene, CliError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    Ok(Scene::from_json(&json)?)
}

/// Arms a fresh picker and clicks once at `(x, y)`.
fn click_query(x: f64, y: f64) -> Result<oklch_picker_core::ColorQuery, CliError> {
    let (_, query) = PickState::default().start().click(x, y);
    query.ok_or(CliError::Pick(PickError::NoElementAtPoint { x, y }))
}

fn print_color(rgb: Rgb8, config: &PickerConfig, json: bool) -> Result<(), CliError> {
    let oklch = convert(rgb);
    let text = config.format().format(oklch);
    if json {
        let info = serde_json::json!({
            "rgb": rgb,
            "hex": rgb.to_hex(),
            "oklch": oklch,
            "text": text,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{text}");
    }
    Ok(())
}

fn print_picked(picked: &PickedColor, json: bool, verbose: bool) -> Result<(), CliError> {
    if verbose {
        eprintln!("source: {}", picked.source.describe());
        eprintln!("rgb: {}", picked.rgb.to_css());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(picked)?);
    } else {
        println!("{}", picked.text);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { r, g, b } => {
            let config = load_config(&cli.config, None, None)?;
            print_color(Rgb8::new(r, g, b), &config, cli.json)?;
        }
        Command::Parse { color } => {
            let config = load_config(&cli.config, None, None)?;
            let rgb = parse_color(&color, &CssNamedColors)
                .ok_or_else(|| CliError::from(PickError::UnparsableColor(color.clone())))?;
            if cli.verbose {
                eprintln!("rgb: {}", rgb.to_css());
            }
            print_color(rgb, &config, cli.json)?;
        }
        Command::Pick {
            scene,
            x,
            y,
            lightness_decimals,
        } => {
            let config = load_config(&cli.config, lightness_decimals, None)?;
            let surface = load_scene(&scene)?;
            let query = click_query(x, y)?;
            let picked = pick_with_style(&surface, query, &config)?;
            print_picked(&picked, cli.json, cli.verbose)?;
        }
        Command::Sample {
            image,
            x,
            y,
            scale,
            lightness_decimals,
        } => {
            let config = load_config(&cli.config, lightness_decimals, scale)?;
            let query = click_query(x, y)?;
            let picked = pick_with_capture(&PngFileCapture::new(image), query, &config)?;
            print_picked(&picked, cli.json, cli.verbose)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_coordinates_parse() {
        let cli = Cli::try_parse_from([
            "oklch-picker", "pick", "--scene", "s.json", "--x", "-3", "--y", "4.5",
        ])
        .unwrap();
        match cli.command {
            Command::Pick { x, y, .. } => {
                assert!((x + 3.0).abs() < f64::EPSILON);
                assert!((y - 4.5).abs() < f64::EPSILON);
            }
            _ => panic!("expected pick"),
        }
    }

    #[test]
    fn config_overrides_apply() {
        let config = load_config(r#"{"lightness_decimals": 1}"#, Some(4), Some(2.0)).unwrap();
        assert_eq!(config.lightness_decimals, 4);
        assert!((config.device_pixel_ratio - 2.0).abs() < f64::EPSILON);

        let config = load_config(r#"{"lightness_decimals": 2}"#, None, None).unwrap();
        assert_eq!(config.lightness_decimals, 2);
    }

    #[test]
    fn bad_config_json_is_input_error() {
        let err = load_config("{nope", None, None).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn scene_file_loads_and_picks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(
            &path,
            r#"{
                "tag": "body",
                "bounds": {"x": 0, "y": 0, "width": 100, "height": 100},
                "style": {"background-color": "rgb(124, 1, 7)"}
            }"#,
        )
        .unwrap();

        let scene = load_scene(&path).unwrap();
        let query = click_query(10.0, 10.0).unwrap();
        let picked = pick_with_style(&scene, query, &PickerConfig::default()).unwrap();
        assert_eq!(picked.text, "oklch(37% 0.1499 27.5058)");
    }

    #[test]
    fn missing_scene_file_is_io_error() {
        let err = load_scene(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn malformed_scene_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert_eq!(load_scene(&path).unwrap_err().exit_code(), 12);
    }
}
