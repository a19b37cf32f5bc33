//! circle-points: evenly spaced points on a circle
//!
//! A library and CLI tool that distributes points evenly around a circle,
//! draws them, and exports a one-page PDF report.
//!
//! ## Features
//!
//! - Validated circle parameters and deterministic point placement
//! - SVG and PNG plots with grid, axes, legend and point numbering
//! - PDF report with author metadata and the embedded plot
//! - HTTP form + JSON API, and a CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use circle_points::circle::{generate, CircleSpec};
//! use circle_points::render::{render_svg, RenderStyle};
//!
//! let spec = CircleSpec::new(0.0, 0.0, 5.0, 8).unwrap();
//! let points = generate(&spec);
//! assert_eq!(points.len(), 8);
//!
//! let svg = render_svg(&points, &RenderStyle::default()).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod circle;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod render;
pub mod report;
pub mod server;

// Re-export commonly used types
pub use circle::{generate, CircleSpec, Point, PointSet};
pub use config::Config;
pub use error::{Error, Result};
pub use render::color::ColorToken;
pub use report::{export_report, ReportMetadata, ReportOptions};
