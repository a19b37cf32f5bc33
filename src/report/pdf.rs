//! Single-page PDF assembly
//!
//! A top-down page writer over lopdf: text lines are laid out from the top
//! margin, an image goes below them scaled to the space that is left.

use crate::constants::page::{
    BODY_LINE, BOTTOM_MARGIN, FONT_SIZE, HEIGHT, IMAGE_WIDTH, MARGIN, TITLE_LINE, TOP_MARGIN,
    WIDTH,
};
use crate::error::{Error, Result};
use crate::report::translit::to_latin1_bytes;
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

const FONT_NAME: &str = "F1";
const IMAGE_NAME: &str = "Im1";

/// Average Helvetica glyph width as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Baseline offset inside a line cell, as a fraction of the font size
const BASELINE_OFFSET: f32 = 0.35;

pub struct PdfPage {
    operations: Vec<Operation>,
    /// Distance from the top edge already used
    cursor: f32,
    image: Option<RgbImage>,
}

impl Default for PdfPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfPage {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            cursor: TOP_MARGIN,
            image: None,
        }
    }

    /// Centered title line
    pub fn title(&mut self, text: &str) {
        let estimated = text.chars().count() as f32 * FONT_SIZE * AVG_GLYPH_WIDTH;
        let x = ((WIDTH - estimated) / 2.0).max(MARGIN);
        self.text_at(text, x, TITLE_LINE);
    }

    /// Left-aligned body line
    pub fn line(&mut self, text: &str) {
        self.text_at(text, MARGIN, BODY_LINE);
    }

    /// Vertical space in points
    pub fn gap(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Space left between the cursor and the bottom margin
    pub fn remaining(&self) -> f32 {
        HEIGHT - BOTTOM_MARGIN - self.cursor
    }

    /// Place an image below the text, centered, as wide as the page allows
    pub fn image(&mut self, image: RgbImage) -> Result<()> {
        if self.image.is_some() {
            return Err(Error::Report("page already holds an image".to_string()));
        }

        let (px_width, px_height) = image.dimensions();
        if px_width == 0 || px_height == 0 {
            return Err(Error::Report("image has no pixels".to_string()));
        }

        let (width, height) = fit_image(px_width, px_height, self.remaining())
            .ok_or_else(|| Error::Report("no room left on the page for the image".to_string()))?;

        let x = (WIDTH - width) / 2.0;
        let y = HEIGHT - self.cursor - height;
        self.operations.extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    width.into(),
                    0.into(),
                    0.into(),
                    height.into(),
                    x.into(),
                    y.into(),
                ],
            ),
            Operation::new("Do", vec![IMAGE_NAME.into()]),
            Operation::new("Q", vec![]),
        ]);
        self.cursor += height;
        self.image = Some(image);
        Ok(())
    }

    /// Serialize the page as a complete PDF document
    pub fn finish(self, title: &str, author: &str) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });

        let mut resources = dictionary! {
            "Font" => dictionary! {
                FONT_NAME => font_id,
            },
        };

        if let Some(image) = self.image {
            let (width, height) = image.dimensions();
            let image_id = doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => width as i64,
                    "Height" => height as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8_i64,
                },
                image.into_raw(),
            ));
            resources.set(
                "XObject",
                dictionary! {
                    IMAGE_NAME => image_id,
                },
            );
        }
        let resources_id = doc.add_object(resources);

        let content = Content {
            operations: self.operations,
        };
        let encoded = content
            .encode()
            .map_err(|e| Error::Report(format!("failed to encode page content: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1_i64,
            "MediaBox" => vec![0.into(), 0.into(), WIDTH.into(), HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(to_latin1_bytes(title)),
            "Author" => Object::string_literal(to_latin1_bytes(author)),
            "Producer" => Object::string_literal(concat!("circle-points ", env!("CARGO_PKG_VERSION"))),
            "CreationDate" => Object::string_literal(
                chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()
            ),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| Error::Report(format!("failed to write PDF: {e}")))?;
        Ok(bytes)
    }

    fn text_at(&mut self, text: &str, x: f32, line_height: f32) {
        let baseline = self.cursor + line_height / 2.0 + FONT_SIZE * BASELINE_OFFSET;
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![FONT_NAME.into(), FONT_SIZE.into()]),
            Operation::new("Td", vec![x.into(), (HEIGHT - baseline).into()]),
            Operation::new("Tj", vec![Object::string_literal(to_latin1_bytes(text))]),
            Operation::new("ET", vec![]),
        ]);
        self.cursor += line_height;
    }
}

/// Page size of an image: `IMAGE_WIDTH` wide, shrunk to fit `available` height
///
/// Returns `None` when there is no vertical space at all.
pub fn fit_image(px_width: u32, px_height: u32, available: f32) -> Option<(f32, f32)> {
    if available <= 0.0 {
        return None;
    }
    let aspect = px_height as f32 / px_width as f32;
    let mut width = IMAGE_WIDTH.min(WIDTH - 2.0 * MARGIN);
    let mut height = width * aspect;
    if height > available {
        height = available;
        width = height / aspect;
    }
    Some((width, height))
}
