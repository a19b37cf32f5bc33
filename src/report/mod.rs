//! Report export
//!
//! Combines the rendered plot with the author metadata and the circle
//! parameters into a one-page PDF. Export degrades instead of failing: when
//! the plot cannot be rendered or embedded, the page carries a placeholder
//! line and is still a valid document.

pub mod pdf;
pub mod scratch;
pub mod translit;

use crate::circle::PointSet;
use crate::constants::page::{BODY_LINE, PT_PER_MM};
use crate::constants::report::IMAGE_PLACEHOLDER;
use crate::error::{Error, Result};
use crate::render::color::ColorToken;
use crate::render::{render_png, RenderStyle};
use pdf::PdfPage;
use scratch::ScratchImage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info, warn};
use translit::transliterate;

/// Who made the report and how the plot is colored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub author_name: String,
    pub author_contact: String,
    pub point_color: ColorToken,
    pub center_color: ColorToken,
}

/// Optional report content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Number the points on the plot
    #[serde(default)]
    pub show_index: bool,

    /// Additional `label: value` lines
    #[serde(default)]
    pub extra_fields: BTreeMap<String, String>,
}

/// Document-level settings, usually from the config
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub title: String,
    /// Raster size of the embedded plot, in pixels
    pub image_width: u32,
    pub image_height: u32,
}

/// Single page carrying only the placeholder line, used when even the
/// text-only document cannot be serialized
const MINIMAL_PDF: &[u8] = b"%PDF-1.5\n\
1 0 obj\n\
<< /Type /Catalog /Pages 2 0 R >>\n\
endobj\n\
2 0 obj\n\
<< /Type /Pages /Kids [3 0 R] /Count 1 /MediaBox [0 0 595.28 841.89] >>\n\
endobj\n\
3 0 obj\n\
<< /Type /Page /Parent 2 0 R /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>\n\
endobj\n\
4 0 obj\n\
<< /Length 62 >>\n\
stream\n\
BT /F1 12 Tf 28 800 Td (Error embedding the plot image.) Tj ET\n\
endstream\n\
endobj\n\
5 0 obj\n\
<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>\n\
endobj\n\
xref\n\
0 6\n\
0000000000 65535 f \n\
0000000009 00000 n \n\
0000000058 00000 n \n\
0000000145 00000 n \n\
0000000247 00000 n \n\
0000000359 00000 n \n\
trailer\n\
<< /Size 6 /Root 1 0 R >>\n\
startxref\n\
456\n\
%%EOF\n";

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: crate::config::defaults::DEFAULT_REPORT_TITLE.to_string(),
            image_width: crate::config::defaults::DEFAULT_REPORT_IMAGE_SIZE,
            image_height: crate::config::defaults::DEFAULT_REPORT_IMAGE_SIZE,
        }
    }
}

/// Build the report document
///
/// Always returns a PDF byte stream starting with `%PDF-`.
pub fn export_report(
    points: &PointSet,
    metadata: &ReportMetadata,
    options: &ReportOptions,
    settings: &ReportSettings,
) -> Vec<u8> {
    assemble(points, metadata, options, settings, ScratchImage::new())
}

fn assemble(
    points: &PointSet,
    metadata: &ReportMetadata,
    options: &ReportOptions,
    settings: &ReportSettings,
    scratch: Result<ScratchImage>,
) -> Vec<u8> {
    let title = transliterate(&settings.title);
    let author = transliterate(&metadata.author_name);

    let mut page = PdfPage::new();
    write_header(&mut page, &title, points, metadata, options);
    page.gap(6.0 * PT_PER_MM);

    if let Err(e) = embed_plot(&mut page, scratch, points, metadata, options, settings) {
        warn!("Report exported without plot: {}", e);
        page.gap(4.0 * PT_PER_MM);
        page.line(IMAGE_PLACEHOLDER);
    }

    match page.finish(&title, &author) {
        Ok(bytes) => {
            info!("Exported report ({} bytes, {} points)", bytes.len(), points.len());
            bytes
        }
        Err(e) => {
            warn!("Falling back to a text-only report: {}", e);
            text_only_report(&title, &author, points, metadata, options)
        }
    }
}

/// Title, author and circle parameter lines
pub fn report_lines(
    points: &PointSet,
    metadata: &ReportMetadata,
    options: &ReportOptions,
) -> Vec<String> {
    let spec = &points.spec;
    let mut lines = vec![
        format!("Author: {}", transliterate(&metadata.author_name)),
        format!("Contact: {}", transliterate(&metadata.author_contact)),
        String::new(),
        format!("Center: ({}, {})", spec.center_x(), spec.center_y()),
        format!("Radius: {} m", spec.radius()),
        format!("Point count: {}", spec.point_count()),
        format!("Point color: {}", metadata.point_color),
        format!("Center color: {}", metadata.center_color),
    ];
    for (label, value) in &options.extra_fields {
        lines.push(format!("{}: {}", transliterate(label), transliterate(value)));
    }
    lines
}

fn write_header(
    page: &mut PdfPage,
    title: &str,
    points: &PointSet,
    metadata: &ReportMetadata,
    options: &ReportOptions,
) {
    page.title(title);
    page.gap(4.0 * PT_PER_MM);
    for line in report_lines(points, metadata, options) {
        if line.is_empty() {
            page.gap(BODY_LINE / 2.0);
        } else {
            page.line(&line);
        }
    }
}

/// Render the plot to a scratch PNG and put it on the page
///
/// The scratch file is released whether or not embedding succeeds.
fn embed_plot(
    page: &mut PdfPage,
    scratch: Result<ScratchImage>,
    points: &PointSet,
    metadata: &ReportMetadata,
    options: &ReportOptions,
    settings: &ReportSettings,
) -> Result<()> {
    let scratch = scratch?;
    let style = RenderStyle {
        point_color: metadata.point_color,
        center_color: metadata.center_color,
        show_index: options.show_index,
        width: settings.image_width,
        height: settings.image_height,
    };

    let loaded = render_png(points, &style, scratch.path()).and_then(|()| {
        image::open(scratch.path())
            .map(|image| image.to_rgb8())
            .map_err(|e| Error::Report(format!("failed to read plot image: {e}")))
    });
    scratch.release();

    page.image(loaded?)
}

fn text_only_report(
    title: &str,
    author: &str,
    points: &PointSet,
    metadata: &ReportMetadata,
    options: &ReportOptions,
) -> Vec<u8> {
    let mut page = PdfPage::new();
    write_header(&mut page, title, points, metadata, options);
    page.gap(4.0 * PT_PER_MM);
    page.line(IMAGE_PLACEHOLDER);

    page.finish(title, author).unwrap_or_else(|e| {
        error!("Failed to serialize report: {}", e);
        MINIMAL_PDF.to_vec()
    })
}
