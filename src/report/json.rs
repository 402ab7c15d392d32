//! Machine-readable export of a run.

use super::summary::ScanSummary;
use crate::types::{Result, ScriptRecord};
use serde::Serialize;

/// Everything a run produced, in one serializable document.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub primary_domain: &'a str,
    pub summary: ScanSummary,
    pub records: &'a [ScriptRecord],
}

impl<'a> JsonReport<'a> {
    pub fn new(records: &'a [ScriptRecord], primary_domain: &'a str) -> Self {
        Self {
            primary_domain,
            summary: ScanSummary::from_records(records),
            records,
        }
    }
}

/// Render the records and summary as pretty-printed JSON.
pub fn render_json(records: &[ScriptRecord], primary_domain: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(records, primary_domain))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;

    #[test]
    fn test_render_json() {
        let records = Pipeline::new("example.com").process_lines([
            "https://maps.googleapis.com/maps/api/js?key=abc",
            "https://www.example.com/app.js",
        ]);
        let json = render_json(&records, "example.com").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["primary_domain"], "example.com");
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["first_party"], 1);
        assert_eq!(value["records"][0]["category"], "maps");
        assert_eq!(value["records"][0]["subcategory"], "maps.googleapis.com");
        assert_eq!(value["records"][0]["path"], "/maps/api/js");
        assert_eq!(value["records"][1]["first_party"], true);
    }

    #[test]
    fn test_render_json_empty() {
        let json = render_json(&[], "example.com").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["total"], 0);
        assert_eq!(value["records"].as_array().map(Vec::len), Some(0));
    }
}
