//! Circle specification and generated point sets
//!
//! This module handles:
//! - Validating the circle parameters at the input boundary
//! - Distributing points evenly around the circle
//! - Plot extents for the renderer

pub mod point;

use crate::constants::geometry::{MAX_POINT_COUNT, MIN_PLOT_MARGIN, PLOT_MARGIN_FRACTION};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Validated circle parameters
///
/// Built only through [`CircleSpec::new`], so a value of this type always has
/// a positive finite radius and a point count in `1..=MAX_POINT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleSpec {
    center_x: f64,
    center_y: f64,
    radius: f64,
    point_count: usize,
}

impl CircleSpec {
    /// Create a circle spec, rejecting invalid geometry
    pub fn new(center_x: f64, center_y: f64, radius: f64, point_count: usize) -> Result<Self> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(Error::InvalidCoordinates(format!(
                "Center ({}, {}) must be finite",
                center_x, center_y
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidRadius(format!(
                "Radius {} must be a positive number",
                radius
            )));
        }
        if point_count < 1 {
            return Err(Error::InvalidPointCount(
                "At least one point is required".to_string(),
            ));
        }
        if point_count > MAX_POINT_COUNT {
            return Err(Error::InvalidPointCount(format!(
                "Point count {} exceeds the maximum of {}",
                point_count, MAX_POINT_COUNT
            )));
        }

        Ok(Self {
            center_x,
            center_y,
            radius,
            point_count,
        })
    }

    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Margin kept between the circle and the plot edge
    pub fn plot_margin(&self) -> f64 {
        (self.radius * PLOT_MARGIN_FRACTION).max(MIN_PLOT_MARGIN)
    }
}

/// A generated point on the circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// 1-based position in the set
    pub index: usize,
    pub x: f64,
    pub y: f64,
    /// Angle in radians, in [0, 2π)
    pub angle: f64,
}

impl Point {
    /// Euclidean distance to (x, y)
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

/// Plot extent in data coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Whether (x, y) lies inside the extent
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Ordered points evenly distributed on a circle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSet {
    pub spec: CircleSpec,
    pub points: Vec<Point>,
}

impl PointSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The square view around the circle, with margin on every side
    pub fn bounds(&self) -> Bounds {
        let (x0, y0) = self.spec.center();
        let extent = self.spec.radius() + self.spec.plot_margin();
        Bounds {
            min_x: x0 - extent,
            max_x: x0 + extent,
            min_y: y0 - extent,
            max_y: y0 + extent,
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Generate the point set for a validated circle spec
pub fn generate(spec: &CircleSpec) -> PointSet {
    PointSet {
        spec: *spec,
        points: point::points_on_circle(spec.center(), spec.radius(), spec.point_count()),
    }
}
