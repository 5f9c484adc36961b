use crate::error::Result;
use crate::exporters::{ExportedList, Exporter};
use crate::results::ExtractedRecord;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/320x180?text=No+Thumbnail";

const STYLESHEET: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            background-color: #f5f5f5;
            padding: 20px;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        h1 { color: #1a1a1a; margin-bottom: 10px; font-size: 2em; }
        .playlist-info {
            color: #666;
            margin-bottom: 20px;
            padding-bottom: 20px;
            border-bottom: 2px solid #eee;
        }
        .video-count { font-weight: 600; color: #d32f2f; }
        .videos-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 20px;
            margin-top: 30px;
        }
        .video-card {
            border: 1px solid #e0e0e0;
            border-radius: 8px;
            overflow: hidden;
            transition: transform 0.2s, box-shadow 0.2s;
            background: white;
        }
        .video-card:hover { transform: translateY(-4px); box-shadow: 0 4px 12px rgba(0,0,0,0.15); }
        .video-thumbnail { width: 100%; height: 180px; object-fit: cover; display: block; }
        .video-info { padding: 15px; }
        .video-title {
            font-weight: 600;
            margin-bottom: 8px;
            font-size: 0.95em;
            line-height: 1.4;
            display: -webkit-box;
            -webkit-line-clamp: 2;
            -webkit-box-orient: vertical;
            overflow: hidden;
        }
        .video-title a { color: #1a1a1a; text-decoration: none; }
        .video-title a:hover { color: #d32f2f; }
        .video-meta { font-size: 0.85em; color: #666; margin-top: 8px; }
        .video-channel { margin-top: 5px; }
        @media (max-width: 768px) {
            .videos-grid { grid-template-columns: 1fr; }
            .container { padding: 15px; }
        }
"#;

/// Self-contained page with one card per record.
///
/// Every field that came from the scraped page is escaped, in text and in
/// attributes alike.
pub struct HtmlExporter;

fn render_card(out: &mut String, record: &ExtractedRecord) {
    let url = encode_double_quoted_attribute(&record.url);
    let thumbnail: &str = if record.thumbnail_url.is_empty() {
        PLACEHOLDER_THUMBNAIL
    } else {
        &record.thumbnail_url
    };

    let _ = write!(
        out,
        r#"
            <div class="video-card">
                <a href="{url}" target="_blank">
                    <img src="{thumb}" alt="{alt}" class="video-thumbnail"
                         onerror="this.src='{placeholder}'">
                </a>
                <div class="video-info">
                    <div class="video-title">
                        <a href="{url}" target="_blank">{title}</a>
                    </div>"#,
        url = url,
        thumb = encode_double_quoted_attribute(thumbnail),
        alt = encode_double_quoted_attribute(&record.title),
        placeholder = PLACEHOLDER_THUMBNAIL,
        title = encode_text(&record.title),
    );
    if !record.author_name.is_empty() {
        let _ = write!(
            out,
            r#"
                    <div class="video-meta video-channel">Channel: {}</div>"#,
            encode_text(&record.author_name)
        );
    }
    if !record.added_at.is_empty() {
        // Only the date part of a timestamp is shown
        let added = record.added_at.get(..10).unwrap_or(&record.added_at);
        let _ = write!(
            out,
            r#"
                    <div class="video-meta">Added: {}</div>"#,
            encode_text(added)
        );
    }
    out.push_str(
        r#"
                </div>
            </div>"#,
    );
}

impl Exporter for HtmlExporter {
    fn render(&self, list: &ExportedList) -> Result<String> {
        let title = encode_text(&list.title);
        let mut cards = String::new();
        for record in &list.records {
            render_card(&mut cards, record);
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <div class="playlist-info">
            <div class="video-count">{count} videos</div>
        </div>

        <div class="videos-grid">{cards}
        </div>
    </div>
</body>
</html>
"#,
            title = title,
            style = STYLESHEET,
            count = list.records.len(),
            cards = cards,
        ))
    }

    fn file_extension(&self) -> &'static str {
        ".html"
    }
}
