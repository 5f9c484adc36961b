use crate::error::Result;
use crate::exporters::{ExportedList, Exporter};
use std::fmt::Write;

/// Numbered Markdown link list
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn render(&self, list: &ExportedList) -> Result<String> {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "# {}\n", list.title);
        let _ = writeln!(out, "**Videos:** {}\n", list.records.len());
        let _ = writeln!(out, "---\n");
        let _ = writeln!(out, "## Videos\n");

        for (idx, record) in list.records.iter().enumerate() {
            let _ = writeln!(out, "{}. [{}]({})", idx + 1, record.title, record.url);
            if !record.author_name.is_empty() {
                let _ = writeln!(out, "   - Channel: {}", record.author_name);
            }
            if !record.added_at.is_empty() {
                let _ = writeln!(out, "   - Added: {}", record.added_at);
            }
            out.push('\n');
        }

        Ok(out)
    }

    fn file_extension(&self) -> &'static str {
        ".md"
    }
}
