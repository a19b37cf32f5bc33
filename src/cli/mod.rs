//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod generate;
pub mod plot;
pub mod report;
pub mod serve;

use crate::circle::{generate as generate_points, CircleSpec, PointSet};
use crate::config::Config;
use crate::error::Result;
use crate::render::RenderStyle;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Evenly spaced points on a circle
#[derive(Parser)]
#[command(name = "circle-points")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the point coordinates
    Generate(generate::GenerateArgs),

    /// Write the plot as SVG or PNG
    Plot(plot::PlotArgs),

    /// Write the PDF report
    Report(report::ReportArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Circle parameters shared by the subcommands
///
/// Unset values come from the `[defaults]` config section.
#[derive(Args, Debug, Default)]
pub struct CircleArgs {
    /// Center X coordinate in meters
    #[arg(long, short = 'x', allow_negative_numbers = true)]
    pub center_x: Option<f64>,

    /// Center Y coordinate in meters
    #[arg(long, short = 'y', allow_negative_numbers = true)]
    pub center_y: Option<f64>,

    /// Radius in meters
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Number of points
    #[arg(long, short = 'n')]
    pub points: Option<usize>,
}

impl CircleArgs {
    /// Validate and generate the point set
    pub fn resolve(&self, config: &Config) -> Result<PointSet> {
        let spec = CircleSpec::new(
            self.center_x.unwrap_or(config.defaults.center_x),
            self.center_y.unwrap_or(config.defaults.center_y),
            self.radius.unwrap_or(config.defaults.radius),
            self.points.unwrap_or(config.defaults.points),
        )?;
        Ok(generate_points(&spec))
    }
}

/// Plot style options shared by `plot` and `report`
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Point marker color (#rrggbb)
    #[arg(long)]
    pub point_color: Option<String>,

    /// Center marker color (#rrggbb)
    #[arg(long)]
    pub center_color: Option<String>,

    /// Don't number the points
    #[arg(long)]
    pub no_index: bool,
}

impl StyleArgs {
    /// Configured style with command line overrides
    pub fn resolve(&self, config: &Config) -> Result<RenderStyle> {
        let mut style = config.render_style()?;
        if let Some(color) = &self.point_color {
            style.point_color = color.parse()?;
        }
        if let Some(color) = &self.center_color {
            style.center_color = color.parse()?;
        }
        if self.no_index {
            style.show_index = false;
        }
        Ok(style)
    }
}

/// Initialize stderr logging, filtered by `RUST_LOG`
pub fn init_logging(default_filter: &str) {
    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .try_init();
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Serve(_) => init_logging("info"),
        _ => init_logging("warn"),
    }

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Plot(args) => plot::run(args),
        Commands::Report(args) => report::run(args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::render::color::ColorToken;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_center() {
        let cli = Cli::parse_from(["circle-points", "generate", "-x", "-2.5", "-y", "3", "-n", "6"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.circle.center_x, Some(-2.5));
                assert_eq!(args.circle.center_y, Some(3.0));
                assert_eq!(args.circle.points, Some(6));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_circle_args_fall_back_to_config() {
        let config = Config::default();
        let args = CircleArgs {
            radius: Some(2.0),
            ..CircleArgs::default()
        };

        let set = args.resolve(&config).unwrap();
        assert_eq!(set.len(), 8);
        assert_eq!(set.spec.radius(), 2.0);
        assert_eq!(set.spec.center(), (0.0, 0.0));
    }

    #[test]
    fn test_circle_args_reject_invalid() {
        let config = Config::default();
        let args = CircleArgs {
            radius: Some(-1.0),
            ..CircleArgs::default()
        };
        assert!(matches!(args.resolve(&config), Err(Error::InvalidRadius(_))));

        let args = CircleArgs {
            points: Some(0),
            ..CircleArgs::default()
        };
        assert!(matches!(args.resolve(&config), Err(Error::InvalidPointCount(_))));
    }

    #[test]
    fn test_style_args_override() {
        let config = Config::default();
        let args = StyleArgs {
            point_color: Some("#00f".to_string()),
            center_color: None,
            no_index: true,
        };

        let style = args.resolve(&config).unwrap();
        assert_eq!(style.point_color, ColorToken::new(0, 0, 255));
        assert_eq!(style.center_color, ColorToken::new(0, 0, 255));
        assert!(!style.show_index);
    }

    #[test]
    fn test_style_args_reject_bad_color() {
        let config = Config::default();
        let args = StyleArgs {
            point_color: Some("red".to_string()),
            ..StyleArgs::default()
        };
        assert!(matches!(args.resolve(&config), Err(Error::InvalidColor(_))));
    }
}
