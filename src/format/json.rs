//! JSON output formatter

use crate::circle::PointSet;
use crate::error::Result;
use crate::format::OutputFormatter;

/// JSON formatter - outputs the spec and every point as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Circle parameters and points as JSON"
    }

    fn format(&self, points: &PointSet) -> Result<String> {
        Ok(serde_json::to_string_pretty(points)?)
    }
}
