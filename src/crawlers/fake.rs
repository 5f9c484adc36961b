use crate::crawlers::{CandidateElement, PageSource};
use crate::error::{ExtractError, Result};
use async_trait::async_trait;
use url::Url;

/// Scripted page whose DOM grows by one batch of rows per scroll
pub struct FakePage {
    url: Url,
    batches: Vec<Vec<String>>,
    loaded: usize,
    pub scans: usize,
    pub scrolls: usize,
    fail_on_scan: Option<usize>,
}

impl FakePage {
    /// Each batch becomes visible after one more scroll; the first is visible immediately
    pub fn new(url: &str, batches: Vec<Vec<String>>) -> Self {
        Self {
            url: Url::parse(url).unwrap(),
            batches,
            loaded: 1,
            scans: 0,
            scrolls: 0,
            fail_on_scan: None,
        }
    }

    /// Make the given (1-based) scan fail as if the browser session died
    pub fn failing_on_scan(mut self, scan: usize) -> Self {
        self.fail_on_scan = Some(scan);
        self
    }
}

#[async_trait]
impl PageSource for FakePage {
    async fn current_url(&mut self) -> Result<Url> {
        Ok(self.url.clone())
    }

    async fn list_candidates(&mut self) -> Result<Vec<CandidateElement>> {
        self.scans += 1;
        if self.fail_on_scan == Some(self.scans) {
            return Err(ExtractError::Loop("invalid session id".to_string()));
        }
        Ok(self
            .batches
            .iter()
            .take(self.loaded)
            .flatten()
            .map(|html| CandidateElement::new(html.clone(), self.url.clone()))
            .collect())
    }

    async fn scroll_to_bottom(&mut self) -> Result<()> {
        self.scrolls += 1;
        self.loaded += 1;
        Ok(())
    }
}
