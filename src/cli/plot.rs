//! Plot command handler
//!
//! Writes the preview image; the file extension picks SVG or PNG.

use crate::cli::{CircleArgs, StyleArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::{render_png, render_svg};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

/// Plot command arguments
#[derive(Args)]
pub struct PlotArgs {
    #[command(flatten)]
    pub circle: CircleArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Output file (.svg or .png)
    #[arg(long, short = 'o', default_value = "circle_points.svg")]
    pub output: PathBuf,
}

/// Image encodings the plot command can write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Svg,
    Png,
}

impl ImageKind {
    /// Pick the encoding from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("svg") => Ok(ImageKind::Svg),
            Some("png") => Ok(ImageKind::Png),
            _ => Err(Error::Render(format!(
                "Unsupported image type for {} (use .svg or .png)",
                path.display()
            ))),
        }
    }
}

/// Run the plot command
pub fn run(args: PlotArgs) -> Result<()> {
    let config = Config::load()?;
    let points = args.circle.resolve(&config)?;
    let mut style = args.style.resolve(&config)?;
    if let Some(width) = args.width {
        style.width = width;
    }
    if let Some(height) = args.height {
        style.height = height;
    }

    match ImageKind::from_path(&args.output)? {
        ImageKind::Svg => std::fs::write(&args.output, render_svg(&points, &style)?)?,
        ImageKind::Png => render_png(&points, &style, &args.output)?,
    }

    info!("Wrote plot of {} points", points.len());
    eprintln!("Plot written to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_kind_from_path() {
        assert_eq!(ImageKind::from_path(Path::new("a.svg")).unwrap(), ImageKind::Svg);
        assert_eq!(ImageKind::from_path(Path::new("dir/a.PNG")).unwrap(), ImageKind::Png);
        assert!(ImageKind::from_path(Path::new("a.jpg")).is_err());
        assert!(ImageKind::from_path(Path::new("plot")).is_err());
    }
}
