//! Centralized constants for the circle-points crate
//!
//! Values shared between the generator, the renderer, the report exporter
//! and the web shell.

/// Geometry limits
pub mod geometry {
    /// Largest accepted point count
    pub const MAX_POINT_COUNT: usize = 10_000;

    /// Minimum plot margin around the circle, in data units
    pub const MIN_PLOT_MARGIN: f64 = 1.0;

    /// Plot margin as a fraction of the radius
    pub const PLOT_MARGIN_FRACTION: f64 = 0.3;
}

/// Report document settings
pub mod report {
    /// Download file name of the exported report
    pub const FILE_NAME: &str = "circle_points.pdf";

    /// MIME type of the exported report
    pub const CONTENT_TYPE: &str = "application/pdf";

    /// Marker every PDF byte stream starts with
    pub const PDF_MAGIC: &[u8] = b"%PDF-";

    /// Line written in place of the plot when it cannot be embedded
    pub const IMAGE_PLACEHOLDER: &str = "Error embedding the plot image.";

    /// Replacement for characters outside the document charset
    pub const REPLACEMENT_CHAR: char = '?';
}

/// Page geometry in PDF points (1/72 inch)
pub mod page {
    /// A4 width
    pub const WIDTH: f32 = 595.28;

    /// A4 height
    pub const HEIGHT: f32 = 841.89;

    /// Points per millimetre
    pub const PT_PER_MM: f32 = 72.0 / 25.4;

    /// Left and right page margin
    pub const MARGIN: f32 = 10.0 * PT_PER_MM;

    /// Top margin before the title line
    pub const TOP_MARGIN: f32 = 10.0 * PT_PER_MM;

    /// Bottom margin below the image
    pub const BOTTOM_MARGIN: f32 = 10.0 * PT_PER_MM;

    /// Height of the title line
    pub const TITLE_LINE: f32 = 10.0 * PT_PER_MM;

    /// Height of a body text line
    pub const BODY_LINE: f32 = 8.0 * PT_PER_MM;

    /// Body font size
    pub const FONT_SIZE: f32 = 12.0;

    /// Preferred image width on the page
    pub const IMAGE_WIDTH: f32 = 150.0 * PT_PER_MM;
}
