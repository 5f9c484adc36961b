pub mod html;
pub mod json;
pub mod markdown;

use crate::error::{ExtractError, Result};
use crate::filter::WATCH_LATER_LIST_ID;
use crate::results::ExtractedRecord;
use crate::utils::sanitize_filename;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A finished extraction, ready to be written out
#[derive(Debug, Clone)]
pub struct ExportedList {
    pub list_id: String,
    pub title: String,
    pub records: Vec<ExtractedRecord>,
}

impl ExportedList {
    /// A Watch Later export with the given title
    pub fn watch_later(title: impl Into<String>, records: Vec<ExtractedRecord>) -> Self {
        Self {
            list_id: WATCH_LATER_LIST_ID.to_string(),
            title: title.into(),
            records,
        }
    }
}

/// Output formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
    Html,
}

impl ExportFormat {
    pub fn exporter(&self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Json => Box::new(json::JsonExporter),
            ExportFormat::Markdown => Box::new(markdown::MarkdownExporter),
            ExportFormat::Html => Box::new(html::HtmlExporter),
        }
    }
}

/// Renders a list to one output format
pub trait Exporter {
    /// Render the whole document
    fn render(&self, list: &ExportedList) -> Result<String>;

    /// Extension including the leading dot
    fn file_extension(&self) -> &'static str;

    /// Write the rendered document to `<output_dir>/<title>/<title><ext>` and return its path
    fn export(&self, list: &ExportedList, output_dir: &Path) -> Result<PathBuf> {
        let name = sanitize_filename(&list.title);
        if name.is_empty() {
            return Err(ExtractError::Config(format!(
                "list title {:?} cannot be used as a file name",
                list.title
            )));
        }
        let list_dir = output_dir.join(&name);
        fs::create_dir_all(&list_dir)?;

        let path = list_dir.join(format!("{}{}", name, self.file_extension()));
        fs::write(&path, self.render(list)?)?;

        ::log::info!("Wrote {} records to {}", list.records.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExportedList {
        ExportedList::watch_later(
            "Watch Later: saved?",
            vec![ExtractedRecord::new("a", "A", "https://www.youtube.com/watch?v=a")],
        )
    }

    #[test]
    fn test_export_writes_into_sanitized_directory() {
        let dir = tempfile::tempdir().unwrap();

        for format in [ExportFormat::Json, ExportFormat::Markdown, ExportFormat::Html] {
            let path = format.exporter().export(&sample(), dir.path()).unwrap();
            assert!(path.exists());
            assert!(path.starts_with(dir.path().join("Watch Later_ saved_")));
        }

        let md = dir.path().join("Watch Later_ saved_/Watch Later_ saved_.md");
        let contents = fs::read_to_string(md).unwrap();
        assert!(contents.contains("[A](https://www.youtube.com/watch?v=a)"));
    }

    #[test]
    fn test_blank_title_is_not_exported() {
        let dir = tempfile::tempdir().unwrap();
        let list = ExportedList::watch_later("   ", vec![]);

        for format in [ExportFormat::Json, ExportFormat::Markdown, ExportFormat::Html] {
            let err = format.exporter().export(&list, dir.path()).unwrap_err();
            assert!(matches!(err, ExtractError::Config(_)));
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_format_names() {
        let format: ExportFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, ExportFormat::Markdown);
        assert_eq!(ExportFormat::Html.exporter().file_extension(), ".html");
    }
}
