use crate::error::Result;
use crate::exporters::{ExportedList, Exporter};
use crate::results::ExtractedRecord;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    list_id: &'a str,
    title: &'a str,
    record_count: usize,
    records: &'a [ExtractedRecord],
}

/// Pretty-printed JSON document wrapping the records
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn render(&self, list: &ExportedList) -> Result<String> {
        let doc = JsonDocument {
            list_id: &list.list_id,
            title: &list.title,
            record_count: list.records.len(),
            records: &list.records,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn file_extension(&self) -> &'static str {
        ".json"
    }
}
