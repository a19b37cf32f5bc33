//! CSV output formatter

use crate::circle::PointSet;
use crate::error::Result;
use crate::format::OutputFormatter;

/// CSV formatter - one row per point, full precision
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "Comma-separated index, x, y, angle"
    }

    fn format(&self, points: &PointSet) -> Result<String> {
        let mut output = String::from("index,x,y,angle\n");
        for point in points {
            output.push_str(&format!(
                "{},{},{},{}\n",
                point.index, point.x, point.y, point.angle
            ));
        }
        Ok(output)
    }
}
