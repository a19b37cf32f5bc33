//! Plot rendering
//!
//! Draws the circle scene with plotters. The same drawing routine runs on the
//! SVG backend (live preview) and the bitmap backend (report image):
//! - dotted grid, frame with ticks, axes through the origin
//! - dashed circle outline
//! - markers at every point, optionally numbered
//! - center marker with its coordinates
//! - legend

pub mod color;
pub mod layout;

use crate::circle::{Bounds, PointSet};
use crate::error::{Error, Result};
use color::ColorToken;
use layout::{format_tick, round_i32, tick_step, ticks, to_backend_points, PlotLayout};
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::register_font;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

const FONT_FAMILY: &str = "sans-serif";
const FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const TICK_FONT: f64 = 16.0;
const LABEL_FONT: f64 = 20.0;
const ANNOTATION_FONT: f64 = 16.0;
const INDEX_FONT: f64 = 14.0;

const POINT_RADIUS: f64 = 6.0;
const CENTER_SIZE: f64 = 9.0;
const TICK_LENGTH: f64 = 8.0;

/// Approximate tick count per axis
const TICK_TARGET: usize = 6;

/// Samples used to draw the circle outline
const CIRCLE_SAMPLES: usize = 360;

const GRID_COLOR: RGBColor = RGBColor(190, 190, 190);

/// Visual options for a plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub point_color: ColorToken,
    pub center_color: ColorToken,
    /// Draw 1..n next to the points
    pub show_index: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            point_color: ColorToken::new(255, 0, 0),
            center_color: ColorToken::new(0, 0, 255),
            show_index: true,
            width: 800,
            height: 800,
        }
    }
}

/// Render the scene as an SVG document
pub fn render_svg(points: &PointSet, style: &RenderStyle) -> Result<String> {
    check_size(style)?;
    let mut svg = String::new();
    {
        let area = SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        draw_scene(&area, points, style)?;
        area.present()
            .map_err(|e| Error::Render(format!("failed to finish SVG: {e}")))?;
    }
    Ok(svg)
}

/// Render the scene into a PNG file
pub fn render_png(points: &PointSet, style: &RenderStyle, path: &Path) -> Result<()> {
    check_size(style)?;
    let area = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw_scene(&area, points, style)?;
    area.present()
        .map_err(|e| Error::Render(format!("failed to write {}: {e}", path.display())))
}

fn check_size(style: &RenderStyle) -> Result<()> {
    if style.width == 0 || style.height == 0 {
        return Err(Error::Render(format!(
            "plot size {}x{} has no pixels",
            style.width, style.height
        )));
    }
    Ok(())
}

/// Draw the whole scene on any plotters backend
fn draw_scene<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    points: &PointSet,
    style: &RenderStyle,
) -> Result<()> {
    ensure_font()?;
    let layout = PlotLayout::new(style.width, style.height, points.bounds());

    area.fill(&WHITE)
        .map_err(|e| Error::Render(format!("failed to clear drawing area: {e}")))?;

    draw_grid(area, &layout)?;
    draw_axes(area, &layout)?;
    draw_circle_outline(area, &layout, points)?;
    draw_points(area, &layout, points, style)?;
    draw_center(area, &layout, points, style)?;
    draw_legend(area, &layout, style)?;

    Ok(())
}

fn draw_grid<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, layout: &PlotLayout) -> Result<()> {
    let bounds = layout.bounds();
    let dotted = ShapeStyle::from(&GRID_COLOR).stroke_width(1);
    let (dot, gap) = (layout.px_i32(1.5), layout.px_i32(4.0));

    let mut lines = Vec::new();
    for x in ticks(bounds.min_x, bounds.max_x, TICK_TARGET) {
        let px = layout.project_x(x);
        lines.push([(px, layout.data_top), (px, layout.data_bottom)]);
    }
    for y in ticks(bounds.min_y, bounds.max_y, TICK_TARGET) {
        let py = layout.project_y(y);
        lines.push([(layout.data_left, py), (layout.data_right, py)]);
    }

    for line in lines {
        area.draw(&DashedPathElement::new(to_backend_points(&line), dot, gap, dotted))
            .map_err(|e| Error::Render(format!("failed to draw grid: {e}")))?;
    }
    Ok(())
}

fn draw_axes<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, layout: &PlotLayout) -> Result<()> {
    let bounds = layout.bounds();
    let frame = [
        (layout.data_left, layout.data_top),
        (layout.data_right, layout.data_top),
        (layout.data_right, layout.data_bottom),
        (layout.data_left, layout.data_bottom),
        (layout.data_left, layout.data_top),
    ];
    area.draw(&PathElement::new(to_backend_points(&frame), ShapeStyle::from(&BLACK)))
        .map_err(|e| Error::Render(format!("failed to draw frame: {e}")))?;

    // Axes through the origin, only when it is in view
    let axis = ShapeStyle::from(&BLACK).stroke_width(layout.px_i32(1.0) as u32);
    if bounds.min_y <= 0.0 && bounds.max_y >= 0.0 {
        let y = layout.project_y(0.0);
        let line = [(layout.data_left, y), (layout.data_right, y)];
        area.draw(&PathElement::new(to_backend_points(&line), axis))
            .map_err(|e| Error::Render(format!("failed to draw x axis: {e}")))?;
    }
    if bounds.min_x <= 0.0 && bounds.max_x >= 0.0 {
        let x = layout.project_x(0.0);
        let line = [(x, layout.data_top), (x, layout.data_bottom)];
        area.draw(&PathElement::new(to_backend_points(&line), axis))
            .map_err(|e| Error::Render(format!("failed to draw y axis: {e}")))?;
    }

    draw_ticks(area, layout, bounds)?;

    let x_label = text_style(area, layout, LABEL_FONT).pos(Pos::new(HPos::Center, VPos::Top));
    draw_label(
        area,
        "x [m]",
        &x_label,
        (
            round_i32(layout.data_center_x()),
            round_i32(layout.data_bottom + layout.px(TICK_LENGTH + 28.0)),
        ),
    );

    let y_label = text_style(area, layout, LABEL_FONT)
        .transform(FontTransform::Rotate270)
        .pos(Pos::new(HPos::Center, VPos::Center));
    draw_label(
        area,
        "y [m]",
        &y_label,
        (
            round_i32((layout.data_left - layout.px(TICK_LENGTH + 52.0)).max(10.0)),
            round_i32(layout.data_center_y()),
        ),
    );

    Ok(())
}

fn draw_ticks<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &PlotLayout,
    bounds: Bounds,
) -> Result<()> {
    let tick_len = layout.px(TICK_LENGTH);
    let bottom = text_style(area, layout, TICK_FONT).pos(Pos::new(HPos::Center, VPos::Top));
    let left = text_style(area, layout, TICK_FONT).pos(Pos::new(HPos::Right, VPos::Center));

    let x_step = tick_step(bounds.min_x, bounds.max_x, TICK_TARGET);
    for value in ticks(bounds.min_x, bounds.max_x, TICK_TARGET) {
        let x = layout.project_x(value);
        let tick = [(x, layout.data_bottom), (x, layout.data_bottom + tick_len)];
        area.draw(&PathElement::new(to_backend_points(&tick), ShapeStyle::from(&BLACK)))
            .map_err(|e| Error::Render(format!("failed to draw x tick: {e}")))?;
        draw_label(
            area,
            &format_tick(value, x_step),
            &bottom,
            (round_i32(x), round_i32(layout.data_bottom + tick_len + layout.px(4.0))),
        );
    }

    let y_step = tick_step(bounds.min_y, bounds.max_y, TICK_TARGET);
    for value in ticks(bounds.min_y, bounds.max_y, TICK_TARGET) {
        let y = layout.project_y(value);
        let tick = [(layout.data_left, y), (layout.data_left - tick_len, y)];
        area.draw(&PathElement::new(to_backend_points(&tick), ShapeStyle::from(&BLACK)))
            .map_err(|e| Error::Render(format!("failed to draw y tick: {e}")))?;
        draw_label(
            area,
            &format_tick(value, y_step),
            &left,
            (round_i32(layout.data_left - tick_len - layout.px(4.0)), round_i32(y)),
        );
    }

    Ok(())
}

fn draw_circle_outline<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &PlotLayout,
    points: &PointSet,
) -> Result<()> {
    let (x0, y0) = points.spec.center();
    let r = points.spec.radius();
    let outline: Vec<(f64, f64)> = (0..=CIRCLE_SAMPLES)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / CIRCLE_SAMPLES as f64;
            layout.project(x0 + r * theta.cos(), y0 + r * theta.sin())
        })
        .collect();

    let stroke = ShapeStyle::from(&BLACK).stroke_width(layout.px_i32(1.5) as u32);
    area.draw(&DashedPathElement::new(
        to_backend_points(&outline),
        layout.px_i32(10.0),
        layout.px_i32(6.0),
        stroke,
    ))
    .map_err(|e| Error::Render(format!("failed to draw circle outline: {e}")))?;
    Ok(())
}

fn draw_points<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &PlotLayout,
    points: &PointSet,
    style: &RenderStyle,
) -> Result<()> {
    let fill = style.point_color.to_rgb().filled();
    let index_style = text_style(area, layout, INDEX_FONT).pos(Pos::new(HPos::Right, VPos::Bottom));

    for point in points {
        let (x, y) = layout.project(point.x, point.y);
        let coord = (round_i32(x), round_i32(y));
        area.draw(&Circle::new(coord, layout.px_i32(POINT_RADIUS), fill))
            .map_err(|e| Error::Render(format!("failed to draw point {}: {e}", point.index)))?;

        if style.show_index {
            draw_label(
                area,
                &point.index.to_string(),
                &index_style,
                (coord.0 - layout.px_i32(3.0), coord.1 - layout.px_i32(3.0)),
            );
        }
    }
    Ok(())
}

fn draw_center<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &PlotLayout,
    points: &PointSet,
    style: &RenderStyle,
) -> Result<()> {
    let (x0, y0) = points.spec.center();
    let (x, y) = layout.project(x0, y0);
    let coord = (round_i32(x), round_i32(y));
    let stroke = style
        .center_color
        .to_rgb()
        .stroke_width(layout.px_i32(3.0) as u32);

    area.draw(&Cross::new(coord, layout.px_i32(CENTER_SIZE), stroke))
        .map_err(|e| Error::Render(format!("failed to draw center: {e}")))?;

    let annotation = text_style(area, layout, ANNOTATION_FONT).pos(Pos::new(HPos::Left, VPos::Bottom));
    draw_label(
        area,
        &center_annotation(x0, y0),
        &annotation,
        (coord.0 + layout.px_i32(6.0), coord.1 - layout.px_i32(6.0)),
    );
    Ok(())
}

fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &PlotLayout,
    style: &RenderStyle,
) -> Result<()> {
    let width = layout.px(120.0);
    let row = layout.px(26.0);
    let pad = layout.px(10.0);
    let right = layout.data_right - pad;
    let left = right - width;
    let top = layout.data_top + pad;
    let bottom = top + 2.0 * row + pad;

    let corners = [
        (round_i32(left), round_i32(top)),
        (round_i32(right), round_i32(bottom)),
    ];
    area.draw(&Rectangle::new(corners, WHITE.filled()))
        .map_err(|e| Error::Render(format!("failed to draw legend: {e}")))?;
    area.draw(&Rectangle::new(corners, ShapeStyle::from(&GRID_COLOR)))
        .map_err(|e| Error::Render(format!("failed to draw legend border: {e}")))?;

    let marker_x = round_i32(left + layout.px(18.0));
    let text_x = round_i32(left + layout.px(36.0));
    let first_row = round_i32(top + pad / 2.0 + row / 2.0);
    let second_row = round_i32(top + pad / 2.0 + row * 1.5);

    area.draw(&Circle::new(
        (marker_x, first_row),
        layout.px_i32(POINT_RADIUS),
        style.point_color.to_rgb().filled(),
    ))
    .map_err(|e| Error::Render(format!("failed to draw legend marker: {e}")))?;
    area.draw(&Cross::new(
        (marker_x, second_row),
        layout.px_i32(CENTER_SIZE * 0.8),
        style.center_color.to_rgb().stroke_width(layout.px_i32(3.0) as u32),
    ))
    .map_err(|e| Error::Render(format!("failed to draw legend marker: {e}")))?;

    let entry = text_style(area, layout, ANNOTATION_FONT).pos(Pos::new(HPos::Left, VPos::Center));
    draw_label(area, "points", &entry, (text_x, first_row));
    draw_label(area, "center", &entry, (text_x, second_row));
    Ok(())
}

/// Text shown next to the center marker
pub fn center_annotation(x0: f64, y0: f64) -> String {
    format!("({:.2}, {:.2})", x0, y0)
}

fn text_style<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &PlotLayout,
    size: f64,
) -> TextStyle<'static> {
    (FONT_FAMILY, layout.px(size)).into_font().into_text_style(area)
}

/// Register the bundled font under `FONT_FAMILY`
///
/// Runs once per process; every later call returns the first outcome.
fn ensure_font() -> Result<()> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let ok = *REGISTERED.get_or_init(|| {
        register_font(FONT_FAMILY, FontStyle::Normal, FONT_DATA).is_ok()
    });
    if ok {
        Ok(())
    } else {
        Err(Error::Render("bundled font could not be loaded".to_string()))
    }
}

/// Draw text, logging labels the backend rejects
fn draw_label<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    style: &TextStyle,
    pos: (i32, i32),
) {
    if let Err(e) = area.draw_text(text, style, pos) {
        debug!("Skipping label {:?}: {}", text, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::{generate, CircleSpec};
    use tempfile::TempDir;

    fn points(x0: f64, y0: f64, r: f64, n: usize) -> PointSet {
        generate(&CircleSpec::new(x0, y0, r, n).unwrap())
    }

    #[test]
    fn test_svg_document() {
        let svg = render_svg(&points(0.0, 0.0, 5.0, 8), &RenderStyle::default()).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_svg_draws_every_point() {
        let style = RenderStyle::default();
        let svg = render_svg(&points(0.0, 0.0, 5.0, 12), &style).unwrap();

        // one circle per point plus the legend marker
        assert_eq!(svg.matches("<circle").count(), 13);
    }

    #[test]
    fn test_svg_uses_point_color() {
        let style = RenderStyle {
            point_color: "#12ab34".parse().unwrap(),
            ..RenderStyle::default()
        };
        let svg = render_svg(&points(0.0, 0.0, 5.0, 3), &style).unwrap();

        assert!(svg.to_lowercase().contains("#12ab34"));
    }

    #[test]
    fn test_svg_index_labels() {
        let set = points(0.0, 0.0, 5.0, 6);
        let labelled = render_svg(&set, &RenderStyle::default()).unwrap();
        let plain = render_svg(
            &set,
            &RenderStyle {
                show_index: false,
                ..RenderStyle::default()
            },
        )
        .unwrap();

        assert_eq!(
            labelled.matches("<text").count(),
            plain.matches("<text").count() + 6
        );
    }

    #[test]
    fn test_svg_annotates_center() {
        let svg = render_svg(&points(2.0, 3.0, 1.0, 1), &RenderStyle::default()).unwrap();

        assert!(svg.contains(&center_annotation(2.0, 3.0)));
        assert!(svg.contains("x [m]"));
        assert!(svg.contains("points"));
        assert!(svg.contains("center"));
    }

    #[test]
    fn test_zero_size_rejected() {
        let style = RenderStyle {
            width: 0,
            ..RenderStyle::default()
        };
        assert!(matches!(
            render_svg(&points(0.0, 0.0, 1.0, 3), &style),
            Err(Error::Render(_))
        ));
    }

    #[test]
    fn test_center_annotation_format() {
        assert_eq!(center_annotation(2.0, -3.456), "(2.00, -3.46)");
    }

    #[test]
    fn test_png_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plot.png");
        let style = RenderStyle {
            width: 300,
            height: 300,
            ..RenderStyle::default()
        };

        render_png(&points(0.0, 0.0, 5.0, 8), &style, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    fn png_pixels(set: &PointSet, style: &RenderStyle, dir: &TempDir, name: &str) -> Vec<u8> {
        let path = dir.path().join(name);
        render_png(set, style, &path).unwrap();
        image::open(&path).unwrap().to_rgb8().into_raw()
    }

    #[test]
    fn test_png_index_labels_change_pixels() {
        let dir = TempDir::new().unwrap();
        let set = points(0.0, 0.0, 5.0, 8);
        let labelled = RenderStyle {
            width: 400,
            height: 400,
            ..RenderStyle::default()
        };
        let plain = RenderStyle {
            show_index: false,
            ..labelled
        };

        let with_index = png_pixels(&set, &labelled, &dir, "labelled.png");
        let without_index = png_pixels(&set, &plain, &dir, "plain.png");

        assert_eq!(with_index.len(), without_index.len());
        assert_ne!(with_index, without_index);
    }

    #[test]
    fn test_render_is_repeatable() {
        let dir = TempDir::new().unwrap();
        let set = points(1.0, -2.0, 3.0, 5);
        let style = RenderStyle {
            width: 200,
            height: 200,
            ..RenderStyle::default()
        };

        assert_eq!(
            png_pixels(&set, &style, &dir, "one.png"),
            png_pixels(&set, &style, &dir, "two.png")
        );
    }
}
