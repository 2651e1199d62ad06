#![deny(unsafe_code)]
//! CLI for the webgl-kit binding.
//!
//! Subcommands:
//! - `formats` -- list pixel formats, filters, and wrap modes with GL codes
//! - `validate` -- check a raw texture buffer against size and options
//! - `image <path>` -- decode an image file and validate it as a texture
//! - `settings <json>` -- encode render settings into native GL calls
//! - `context <json>` -- resolve context options into per-frame clear calls
//! - `grid` -- build the grid demo mesh and report its counts

mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use error::CliError;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use webgl_kit_core::demo;
use webgl_kit_core::texture::{self, validate_bytes, TextureUpload};
use webgl_kit_core::{ContextConfig, Format, Magnify, Minify, Options, Setting, Wrap};

#[derive(Parser)]
#[command(name = "webgl-kit", about = "Typed WebGL binding tools")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List pixel formats, resize filters, and wrap modes.
    Formats,
    /// Validate a raw texture buffer before upload.
    Validate {
        /// Texture width in pixels.
        #[arg(short = 'W', long, allow_hyphen_values = true)]
        width: i32,

        /// Texture height in pixels.
        #[arg(short = 'H', long, allow_hyphen_values = true)]
        height: i32,

        /// Pixel format (rgba, rgb, luminanceAlpha, luminance, alpha).
        #[arg(short, long, default_value = "rgba")]
        format: String,

        /// Buffer length in bytes; defaults to exactly what the size needs.
        #[arg(short, long, conflicts_with = "file")]
        length: Option<usize>,

        /// Read the buffer from a file instead.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Texture options as a JSON object (camelCase keys).
        #[arg(short, long, default_value = "{}")]
        options: String,
    },
    /// Decode an image file and validate it as a texture.
    Image {
        /// Image path or file:// URL.
        path: String,

        /// Texture options as a JSON object (camelCase keys).
        #[arg(short, long, default_value = "{}")]
        options: String,
    },
    /// Encode a JSON array of settings into native enable/disable calls.
    Settings {
        /// e.g. '[{"kind":"cullFace","face":"back"}]'
        settings: String,
    },
    /// Resolve context options and print the clear calls for one frame.
    Context {
        /// e.g. '{"alpha":true,"depth":1,"clearColor":[0,0,0,1]}'
        #[arg(default_value = "{}")]
        options: String,
    },
    /// Build the grid demo mesh.
    Grid {
        /// Number of cells across.
        #[arg(short, long, default_value_t = 16)]
        columns: usize,

        /// Number of cells down.
        #[arg(short, long, default_value_t = 16)]
        rows: usize,
    },
}

fn parse_json(input: &str, what: &str) -> Result<Value, CliError> {
    serde_json::from_str(input).map_err(|e| CliError::Input(format!("invalid {what} JSON: {e}")))
}

/// Bytes a `width` x `height` buffer in `format` needs, or `None` when a
/// dimension is negative or the product overflows.
fn required_bytes(width: i32, height: i32, format: Format) -> Option<usize> {
    let width = usize::try_from(width).ok()?;
    let height = usize::try_from(height).ok()?;
    width
        .checked_mul(height)?
        .checked_mul(format.bytes_per_pixel())
}

fn upload_json(upload: &TextureUpload<'_>) -> Value {
    json!({
        "width": upload.width,
        "height": upload.height,
        "format": upload.format,
        "bytesPerPixel": upload.bytes_per_pixel,
        "magnify": upload.magnify,
        "minify": upload.minify,
        "wrapS": upload.wrap_s,
        "wrapT": upload.wrap_t,
        "flipY": upload.flip_y,
        "mipmap": upload.mipmap,
        "bytes": upload.pixels.len(),
    })
}

fn print_upload(upload: &TextureUpload<'_>, json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&upload_json(upload))?);
    } else {
        println!(
            "ok: {}x{} format {:#06x} ({} bytes), mag {:#06x} min {:#06x}{}, wrap {:#06x}/{:#06x}, flipY {}",
            upload.width,
            upload.height,
            upload.format,
            upload.pixels.len(),
            upload.magnify,
            upload.minify,
            if upload.mipmap { " +mipmaps" } else { "" },
            upload.wrap_s,
            upload.wrap_t,
            upload.flip_y,
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Formats => {
            let formats: Vec<Value> = Format::ALL
                .iter()
                .map(|f| json!({"name": f.name(), "code": f.code(), "bytesPerPixel": f.bytes_per_pixel()}))
                .collect();
            let magnify: Vec<Value> = Magnify::ALL
                .iter()
                .map(|m| json!({"name": m, "code": m.code()}))
                .collect();
            let minify: Vec<Value> = Minify::ALL
                .iter()
                .map(|m| json!({"name": m, "code": m.code(), "mipmap": m.is_mipmap()}))
                .collect();
            let wraps: Vec<Value> = Wrap::ALL
                .iter()
                .map(|w| json!({"name": w, "code": w.code()}))
                .collect();
            let info = json!({
                "formats": formats,
                "magnify": magnify,
                "minify": minify,
                "wrap": wraps,
            });
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for (section, entries) in info.as_object().into_iter().flatten() {
                    println!("{section}:");
                    for entry in entries.as_array().into_iter().flatten() {
                        println!("  {:<24} {}", entry["name"].as_str().unwrap_or("?"), entry["code"]);
                    }
                }
            }
        }
        Command::Validate {
            width,
            height,
            format,
            length,
            file,
            options,
        } => {
            let format = Format::from_name(&format)
                .ok_or_else(|| CliError::Input(format!("unknown format: {format}")))?;
            let options = Options::from_json(&parse_json(&options, "--options")?)?;
            let bytes = match file {
                Some(path) => std::fs::read(&path)
                    .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?,
                None => match length.or_else(|| required_bytes(width, height, format)) {
                    Some(len) => vec![0u8; len],
                    // Unrepresentable size: an empty buffer fails validation with SizeError.
                    None => Vec::new(),
                },
            };
            let upload = validate_bytes(&options, (width, height), format, &bytes)?;
            print_upload(&upload, cli.json)?;
        }
        Command::Image { path, options } => {
            let options = Options::from_json(&parse_json(&options, "--options")?)?;
            let image = texture::load_with(options, &path).wait()?;
            let upload = validate_bytes(&image.options, image.size(), Format::Rgba, &image.pixels)?;
            print_upload(&upload, cli.json)?;
        }
        Command::Settings { settings } => {
            let settings: Vec<Setting> = serde_json::from_value(parse_json(&settings, "settings")?)
                .map_err(|e| CliError::Input(format!("invalid settings: {e}")))?;
            let encoded: Vec<Value> = settings
                .iter()
                .map(|s| json!({"setting": s, "enable": s.enable(), "disable": s.disable()}))
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&encoded)?);
            } else {
                for entry in &encoded {
                    println!("{}", entry["setting"]["kind"].as_str().unwrap_or("?"));
                    for call in entry["enable"].as_array().into_iter().flatten() {
                        println!("  on:  {}({})", call["call"].as_str().unwrap_or("?"), call["args"]);
                    }
                    for call in entry["disable"].as_array().into_iter().flatten() {
                        println!("  off: {}({})", call["call"].as_str().unwrap_or("?"), call["args"]);
                    }
                }
            }
        }
        Command::Context { options } => {
            let config = ContextConfig::from_json(&parse_json(&options, "context options")?);
            let info = json!({"config": config, "clear": config.clear_calls()});
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "alpha {} (premultiplied {}), depth {}, stencil {}, antialias {}, preserve {}",
                    config.alpha,
                    config.premultiplied_alpha,
                    config.depth,
                    config.stencil,
                    config.antialias,
                    config.preserve_drawing_buffer,
                );
                for call in info["clear"].as_array().into_iter().flatten() {
                    println!("  {}({})", call["call"].as_str().unwrap_or("?"), call["args"]);
                }
            }
        }
        Command::Grid { columns, rows } => {
            let mesh = demo::grid(columns, rows)?;
            let info = json!({
                "columns": columns,
                "rows": rows,
                "vertices": mesh.vertex_count(),
                "indices": mesh.element_count(),
                "floatsPerVertex": mesh.stride(),
                "mode": mesh.mode().code(),
            });
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "grid {columns}x{rows}: {} vertices, {} indices ({} triangles)",
                    mesh.vertex_count(),
                    mesh.element_count(),
                    mesh.element_count() / 3,
                );
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
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

    #[test]
    fn required_bytes_counts_every_channel() {
        assert_eq!(required_bytes(4, 2, Format::Rgb), Some(24));
        assert_eq!(required_bytes(0, 9, Format::Rgba), Some(0));
    }

    #[test]
    fn required_bytes_rejects_negative_dimensions() {
        assert_eq!(required_bytes(-1, 4, Format::Alpha), None);
    }

    #[test]
    fn oversized_validate_reports_size_error() {
        let cli = Cli::parse_from([
            "webgl-kit",
            "validate",
            "-W",
            "2147483647",
            "-H",
            "2147483647",
            "--options",
            r#"{"minify":"linear","horizontalWrap":"clampToEdge","verticalWrap":"clampToEdge"}"#,
        ]);
        let err = run(cli).err().expect("validation should fail");
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("2147483647x2147483647"), "got: {err}");
    }

    #[test]
    fn grid_overflow_is_a_mesh_error() {
        let columns = usize::MAX.to_string();
        let cli = Cli::parse_from(["webgl-kit", "grid", "--columns", columns.as_str(), "--rows", "1"]);
        assert_eq!(run(cli).err().map(|e| e.exit_code()), Some(14));
    }
}
