//! Pixel layout of the plot
//!
//! Maps data coordinates onto a square data area inside the image so both
//! axes share one scale.

use crate::circle::Bounds;

const LEFT_MARGIN: f64 = 80.0;
const RIGHT_MARGIN: f64 = 30.0;
const TOP_MARGIN: f64 = 30.0;
const BOTTOM_MARGIN: f64 = 70.0;

/// Reference image edge the margins and font sizes are tuned for
const REFERENCE_SIZE: f64 = 800.0;

#[derive(Debug, Clone, Copy)]
pub struct PlotLayout {
    pub width: f64,
    pub height: f64,
    pub data_left: f64,
    pub data_right: f64,
    pub data_top: f64,
    pub data_bottom: f64,
    /// Multiplier for font sizes, markers and margins
    pub scale: f64,
    bounds: Bounds,
}

impl PlotLayout {
    pub fn new(width: u32, height: u32, bounds: Bounds) -> Self {
        let width = width as f64;
        let height = height as f64;
        let scale = (width.min(height) / REFERENCE_SIZE).max(0.25);

        let left = (LEFT_MARGIN * scale).min(width / 2.0);
        let right = (RIGHT_MARGIN * scale).min(width / 2.0);
        let top = (TOP_MARGIN * scale).min(height / 2.0);
        let bottom = (BOTTOM_MARGIN * scale).min(height / 2.0);

        let avail_width = (width - left - right).max(10.0);
        let avail_height = (height - top - bottom).max(10.0);
        let data_size = avail_width.min(avail_height);
        let data_left = left + (avail_width - data_size) / 2.0;
        let data_top = top + (avail_height - data_size) / 2.0;

        Self {
            width,
            height,
            data_left,
            data_right: data_left + data_size,
            data_top,
            data_bottom: data_top + data_size,
            scale,
            bounds,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn data_size(&self) -> f64 {
        self.data_right - self.data_left
    }

    pub fn data_center_x(&self) -> f64 {
        (self.data_left + self.data_right) / 2.0
    }

    pub fn data_center_y(&self) -> f64 {
        (self.data_top + self.data_bottom) / 2.0
    }

    pub fn project_x(&self, x: f64) -> f64 {
        let span = (self.bounds.max_x - self.bounds.min_x).max(f64::EPSILON);
        self.data_left + (x - self.bounds.min_x) / span * self.data_size()
    }

    pub fn project_y(&self, y: f64) -> f64 {
        let span = (self.bounds.max_y - self.bounds.min_y).max(f64::EPSILON);
        self.data_bottom - (y - self.bounds.min_y) / span * self.data_size()
    }

    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (self.project_x(x), self.project_y(y))
    }

    /// Scale a reference pixel length to this image
    pub fn px(&self, length: f64) -> f64 {
        length * self.scale
    }

    /// Scale a reference pixel length, rounded for the backend
    pub fn px_i32(&self, length: f64) -> i32 {
        round_i32(self.px(length)).max(1)
    }
}

/// "Nice" tick positions (1, 2 or 5 times a power of ten) covering [min, max]
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let step = tick_step(min, max, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

pub fn tick_step(min: f64, max: f64, target: usize) -> f64 {
    let raw = ((max - min) / target.max(1) as f64).max(f64::EPSILON);
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 + 1e-9 {
        1.0
    } else if residual <= 2.0 + 1e-9 {
        2.0
    } else if residual <= 5.0 + 1e-9 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Format a tick value with as many decimals as the step needs
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10() - 1e-9).ceil().max(0.0) as usize
    };
    let text = format!("{:.*}", decimals, value);
    // avoid "-0"
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

pub fn round_i32(value: f64) -> i32 {
    value.round() as i32
}

pub fn to_backend_points(points: &[(f64, f64)]) -> Vec<(i32, i32)> {
    points
        .iter()
        .map(|&(x, y)| (round_i32(x), round_i32(y)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_bounds() -> Bounds {
        Bounds {
            min_x: -1.0,
            max_x: 1.0,
            min_y: -1.0,
            max_y: 1.0,
        }
    }

    #[test]
    fn test_layout_is_square() {
        let layout = PlotLayout::new(1000, 600, unit_bounds());
        assert_relative_eq!(
            layout.data_right - layout.data_left,
            layout.data_bottom - layout.data_top,
            epsilon = 1e-9
        );
        assert!(layout.data_right <= 1000.0);
        assert!(layout.data_bottom <= 600.0);
    }

    #[test]
    fn test_projection_corners() {
        let layout = PlotLayout::new(800, 800, unit_bounds());

        let (left, bottom) = layout.project(-1.0, -1.0);
        assert_relative_eq!(left, layout.data_left, epsilon = 1e-9);
        assert_relative_eq!(bottom, layout.data_bottom, epsilon = 1e-9);

        let (right, top) = layout.project(1.0, 1.0);
        assert_relative_eq!(right, layout.data_right, epsilon = 1e-9);
        assert_relative_eq!(top, layout.data_top, epsilon = 1e-9);
    }

    #[test]
    fn test_y_axis_points_up() {
        let layout = PlotLayout::new(800, 800, unit_bounds());
        assert!(layout.project_y(0.5) < layout.project_y(-0.5));
    }

    #[test]
    fn test_scale_follows_image_size() {
        let small = PlotLayout::new(800, 800, unit_bounds());
        let large = PlotLayout::new(1600, 1600, unit_bounds());
        assert_relative_eq!(small.scale, 1.0);
        assert_relative_eq!(large.scale, 2.0);
        assert_eq!(large.px_i32(5.0), 10);
    }

    #[test]
    fn test_tick_step_is_nice() {
        assert_relative_eq!(tick_step(-6.5, 6.5, 6), 5.0, epsilon = 1e-12);
        assert_relative_eq!(tick_step(0.0, 1.0, 5), 0.2, epsilon = 1e-12);
        assert_relative_eq!(tick_step(0.0, 100.0, 10), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ticks_within_range() {
        let values = ticks(-6.5, 6.5, 6);
        assert_eq!(values, vec![-5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(5.0, 5.0), "5");
        assert_eq!(format_tick(0.4, 0.2), "0.4");
        assert_eq!(format_tick(-0.0, 1.0), "0");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
    }

    #[test]
    fn test_backend_points_round() {
        assert_eq!(
            to_backend_points(&[(1.4, 2.6), (-0.6, 0.4)]),
            vec![(1, 3), (-1, 0)]
        );
    }
}
