use crate::error::Result;
use crate::parsers::html;
use crate::results::ExtractedRecord;
use async_trait::async_trait;
use url::Url;

/// Snapshot of one item container taken during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateElement {
    /// Outer HTML of the container
    pub html: String,

    /// Address of the page the container was found on, used to resolve links
    pub base: Url,
}

impl CandidateElement {
    pub fn new(html: impl Into<String>, base: Url) -> Self {
        Self {
            html: html.into(),
            base,
        }
    }
}

/// What the collection loop needs from a rendered page
#[async_trait]
pub trait PageSource: Send {
    /// Address currently shown
    async fn current_url(&mut self) -> Result<Url>;

    /// All item containers currently in the DOM; grows as rows lazy-load
    async fn list_candidates(&mut self) -> Result<Vec<CandidateElement>>;

    /// Move the viewport to the maximum scroll offset so the platform loads more rows
    async fn scroll_to_bottom(&mut self) -> Result<()>;

    /// Turn a container into a record, or `None` when it is not a real row
    fn extract_from(&self, candidate: &CandidateElement) -> Option<ExtractedRecord> {
        html::extract_from_fragment(&candidate.html, &candidate.base)
    }
}
