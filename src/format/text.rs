//! Human-readable text output formatter

use crate::circle::PointSet;
use crate::error::Result;
use crate::format::{round4, OutputFormatter};

/// Text formatter - outputs a summary and a coordinate table
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable coordinate table"
    }

    fn format(&self, points: &PointSet) -> Result<String> {
        let spec = &points.spec;
        let mut output = String::new();

        // Header
        output.push_str(&format!(
            "Center: ({}, {})\n",
            spec.center_x(),
            spec.center_y()
        ));
        output.push_str(&format!("Radius: {} m\n", spec.radius()));
        output.push_str(&format!("Points: {}\n\n", spec.point_count()));

        // Table
        let width = points.len().to_string().len().max(1);
        output.push_str(&format!(
            "{:>width$}  {:>12}  {:>12}\n",
            "#",
            "x [m]",
            "y [m]",
            width = width
        ));
        for point in points {
            output.push_str(&format!(
                "{:>width$}  {:>12}  {:>12}\n",
                point.index,
                round4(point.x),
                round4(point.y),
                width = width
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::{generate, CircleSpec};

    #[test]
    fn test_text_format() {
        let set = generate(&CircleSpec::new(0.0, 0.0, 5.0, 4).unwrap());
        let output = TextFormatter.format(&set).unwrap();

        assert!(output.contains("Center: (0, 0)"));
        assert!(output.contains("Radius: 5 m"));
        assert!(output.contains("Points: 4"));
        assert!(output.contains("x [m]"));

        let header: Vec<&str> = output.lines().nth(4).unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["#", "x", "[m]", "y", "[m]"]);

        let rows: Vec<&str> = output.lines().skip(5).collect();
        assert_eq!(rows.len(), 4);
        let first: Vec<&str> = rows[0].split_whitespace().collect();
        assert_eq!(first, vec!["1", "5", "0"]);
        let third: Vec<&str> = rows[2].split_whitespace().collect();
        assert_eq!(third, vec!["3", "-5", "0"]);
    }

    #[test]
    fn test_text_rounds_to_four_decimals() {
        let set = generate(&CircleSpec::new(0.0, 0.0, 5.0, 8).unwrap());
        let output = TextFormatter.format(&set).unwrap();
        assert!(output.contains("3.5355"));
        assert!(!output.contains("3.53553"));
    }

    #[test]
    fn test_text_formatter_info() {
        let formatter = TextFormatter;
        assert_eq!(formatter.name(), "text");
        assert!(!formatter.description().is_empty());
    }
}
