//! Even point distribution on a circle
//!
//! Points are spaced by a uniform angular step of 2π/n, starting at angle 0
//! (the point directly right of the center) and proceeding counter-clockwise.

use crate::circle::Point;
use std::f64::consts::TAU;

/// Place `count` points evenly on the circle
///
/// # Arguments
/// * `center` - Center of the circle as (x, y)
/// * `radius` - Radius, expected positive
/// * `count` - Number of points
///
/// # Returns
/// Points ordered by increasing angle, indexed from 1
///
/// Inputs are not validated here; build a [`crate::circle::CircleSpec`]
/// first.
pub fn points_on_circle(center: (f64, f64), radius: f64, count: usize) -> Vec<Point> {
    let (x0, y0) = center;
    let step = TAU / count as f64;

    (0..count)
        .map(|k| {
            let angle = step * k as f64;
            Point {
                index: k + 1,
                x: x0 + radius * angle.cos(),
                y: y0 + radius * angle.sin(),
                angle,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_four_points_on_radius_five() {
        let points = points_on_circle((0.0, 0.0), 5.0, 4);
        let expected = [(5.0, 0.0), (0.0, 5.0), (-5.0, 0.0), (0.0, -5.0)];

        assert_eq!(points.len(), 4);
        for (point, (ex, ey)) in points.iter().zip(expected) {
            assert_relative_eq!(point.x, ex, epsilon = 1e-9);
            assert_relative_eq!(point.y, ey, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_single_point() {
        let points = points_on_circle((2.0, 3.0), 1.0, 1);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].index, 1);
        assert_eq!((points[0].x, points[0].y), (3.0, 3.0));
    }

    #[test]
    fn test_first_point_is_right_of_center() {
        for count in [1, 2, 3, 7, 100] {
            let points = points_on_circle((-4.5, 12.25), 2.5, count);
            assert_eq!(points[0].x, -2.0);
            assert_eq!(points[0].y, 12.25);
            assert_eq!(points[0].angle, 0.0);
        }
    }

    #[test]
    fn test_all_points_on_circle() {
        let center = (3.0, -7.0);
        let radius = 12.5;

        for count in [1, 2, 5, 16, 360, 1000] {
            let points = points_on_circle(center, radius, count);
            assert_eq!(points.len(), count);
            for point in &points {
                assert_relative_eq!(
                    point.distance_to(center.0, center.1),
                    radius,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_angles_strictly_increasing_in_range() {
        let points = points_on_circle((0.0, 0.0), 1.0, 37);

        for pair in points.windows(2) {
            assert!(pair[0].angle < pair[1].angle);
        }
        for point in &points {
            assert!(point.angle >= 0.0 && point.angle < TAU);
        }
    }

    #[test]
    fn test_uniform_angular_step() {
        let points = points_on_circle((0.0, 0.0), 1.0, 12);
        let step = TAU / 12.0;

        for pair in points.windows(2) {
            assert_relative_eq!(pair[1].angle - pair[0].angle, step, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_indices_are_one_based() {
        let points = points_on_circle((0.0, 0.0), 1.0, 5);
        let indices: Vec<usize> = points.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_deterministic() {
        let first = points_on_circle((1.5, -0.5), 3.25, 64);
        let second = points_on_circle((1.5, -0.5), 3.25, 64);
        assert_eq!(first, second);
    }
}
