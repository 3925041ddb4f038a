use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_qr_style::tools::{dark_stats, load_rgba};
use rust_qr_style::{BodyShape, EyeShape, OuterBorderShape, StyleConfig, Styler};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR Style CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Style overrides shared by subcommands that render
#[derive(clap::Args, Default)]
struct StyleArgs {
    /// JSON style file (camelCase keys)
    #[arg(long)]
    style: Option<PathBuf>,
    /// square | rounded | dots | circle
    #[arg(long)]
    body: Option<BodyShape>,
    /// square | rounded | circle
    #[arg(long)]
    eye_frame: Option<EyeShape>,
    /// square | rounded | circle
    #[arg(long)]
    eye_ball: Option<EyeShape>,
    /// square | rounded | circle | none
    #[arg(long)]
    border: Option<OuterBorderShape>,
    /// Foreground color, #RRGGBB
    #[arg(long)]
    fg: Option<String>,
    /// Background color, #RRGGBB
    #[arg(long)]
    bg: Option<String>,
    /// Print the effective style as JSON
    #[arg(long)]
    print_style: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Re-draw a QR image with custom shapes and colors
    Style {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Print inferred module size and eye positions
    Inspect {
        #[arg(long)]
        input: PathBuf,
    },
    /// Download a QR image and re-draw it
    #[cfg(feature = "fetch")]
    Fetch {
        #[arg(long)]
        url: String,
        #[arg(long)]
        output: PathBuf,
        #[command(flatten)]
        style: StyleArgs,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Style {
            input,
            output,
            style,
        } => style_cmd(&input, &output, &style),
        Command::Inspect { input } => inspect_cmd(&input),
        #[cfg(feature = "fetch")]
        Command::Fetch { url, output, style } => fetch_cmd(&url, &output, &style),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the JSON file, then individual flags
fn build_style(args: &StyleArgs) -> Result<StyleConfig> {
    let mut config = match &args.style {
        Some(path) => load_style(path)?,
        None => StyleConfig::default(),
    };

    if let Some(body) = args.body {
        config.body_shape = body;
    }
    if let Some(frame) = args.eye_frame {
        config.eye_frame_shape = frame;
    }
    if let Some(ball) = args.eye_ball {
        config.eye_ball_shape = ball;
    }
    if let Some(border) = args.border {
        config.outer_border_shape = border;
    }
    if let Some(fg) = &args.fg {
        config.foreground_color = fg.clone();
    }
    if let Some(bg) = &args.bg {
        config.background_color = bg.clone();
    }

    if args.print_style {
        let effective = StyleConfig::from(config.resolve());
        println!("{}", serde_json::to_string_pretty(&effective)?);
    }
    Ok(config)
}

/// Read a JSON style file; unknown or non-string values fall back to defaults
fn load_style(path: &Path) -> Result<StyleConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read style {}", path.display()))?;
    StyleConfig::from_json(&text)
        .with_context(|| format!("Failed to parse style {}", path.display()))
}

fn style_cmd(input: &Path, output: &Path, args: &StyleArgs) -> Result<()> {
    let config = build_style(args)?;
    let bytes = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let start = Instant::now();
    let png = Styler::new()
        .restyle(&bytes, &config)
        .with_context(|| format!("Failed to restyle {}", input.display()))?;
    fs::write(output, &png).with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        bytes = png.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Restyled"
    );
    Ok(())
}

fn inspect_cmd(input: &Path) -> Result<()> {
    let img = load_rgba(input).with_context(|| format!("Failed to load {}", input.display()))?;
    let (width, height) = img.dimensions();
    println!("Image: {} ({}x{})", input.display(), width, height);

    let stats = dark_stats(&img);
    println!(
        "Dark: dark_pixels={} total={} dark_ratio={:.2}%",
        stats.dark_pixels,
        stats.total_pixels,
        stats.dark_ratio * 100.0
    );

    let analysis = Styler::new().analyze(&img);
    println!("Module size: {}px", analysis.module_size);
    println!("Found {} eyes", analysis.eyes.len());
    for (i, eye) in analysis.eyes.iter().enumerate() {
        println!(
            "  Eye {}: center=({:.1}, {:.1}) size={:.1}",
            i, eye.center.x, eye.center.y, eye.size
        );
    }
    Ok(())
}

#[cfg(feature = "fetch")]
fn fetch_cmd(url: &str, output: &Path, args: &StyleArgs) -> Result<()> {
    let config = build_style(args)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let png = runtime
        .block_on(rust_qr_style::fetch_and_restyle(url, &config))
        .with_context(|| format!("Failed to fetch and restyle {url}"))?;
    fs::write(output, &png).with_context(|| format!("Failed to write {}", output.display()))?;
    info!(url, output = %output.display(), bytes = png.len(), "Fetched and restyled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("qrtool-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_malformed_style_is_a_parse_error() {
        let path = write_temp("broken.json", "{ not json");
        let err = load_style(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(err.to_string().starts_with("Failed to parse style"));
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_flags_override_style_file() {
        let path = write_temp("style.json", r#"{"bodyShape": "dots", "eyeFrameShape": "circle"}"#);
        let args = StyleArgs {
            style: Some(path.clone()),
            body: Some(BodyShape::Rounded),
            ..StyleArgs::default()
        };
        let config = build_style(&args).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.body_shape, BodyShape::Rounded);
        assert_eq!(config.eye_frame_shape, EyeShape::Circle);
    }
}
