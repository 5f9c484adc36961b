use crate::collector;
use crate::config::CollectorConfig;
use crate::crawlers::PageSource;
use crate::error::{ExtractError, Result};
use crate::filter::{self, WATCH_LATER_URL};
use crate::results::ExtractedRecord;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Inbound request, e.g. `{"action": "extractList"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum ExtractionRequest {
    #[serde(rename = "extractList")]
    ExtractList,
}

/// Outcome of a request; failures are values, never errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResponse {
    Success {
        records: Vec<ExtractedRecord>,
        count: usize,
    },
    Failure {
        error: String,
    },
}

impl ExtractionResponse {
    pub fn success(records: Vec<ExtractedRecord>) -> Self {
        let count = records.len();
        ExtractionResponse::Success { records, count }
    }

    pub fn failure(error: impl ToString) -> Self {
        ExtractionResponse::Failure {
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResponse::Success { .. })
    }
}

impl Serialize for ExtractionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ExtractionResponse::Success { records, count } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("records", records)?;
                map.serialize_entry("count", count)?;
                map.end()
            }
            ExtractionResponse::Failure { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

/// Refuse to run anywhere but the Watch Later list
async fn ensure_watch_later<S>(source: &mut S) -> Result<()>
where
    S: PageSource + ?Sized,
{
    let url = source.current_url().await?;
    if filter::is_watch_later_page(&url) {
        Ok(())
    } else {
        ::log::warn!("Refusing to extract from {}", url);
        Err(ExtractError::WrongPage {
            expected_url: WATCH_LATER_URL.to_string(),
        })
    }
}

/// Run one extraction request to completion.
///
/// Every error, including a wrong page, is reported in the response.
/// Calls share no state, so concurrent requests against separate pages run
/// independently.
pub async fn handle_request<S>(
    source: &mut S,
    request: &ExtractionRequest,
    config: &CollectorConfig,
) -> ExtractionResponse
where
    S: PageSource + ?Sized,
{
    match request {
        ExtractionRequest::ExtractList => {
            let outcome = match ensure_watch_later(source).await {
                Ok(()) => collector::collect_all(source, config).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(records) => {
                    ::log::info!("Extraction finished with {} records", records.len());
                    ExtractionResponse::success(records)
                }
                Err(e) => {
                    ::log::error!("Extraction failed: {}", e);
                    ExtractionResponse::failure(e)
                }
            }
        }
    }
}

/// Decode a raw JSON message and handle it
pub async fn handle_message<S>(
    source: &mut S,
    message: &str,
    config: &CollectorConfig,
) -> ExtractionResponse
where
    S: PageSource + ?Sized,
{
    match serde_json::from_str::<ExtractionRequest>(message) {
        Ok(request) => handle_request(source, &request, config).await,
        Err(e) => {
            ::log::error!("Rejecting message {}: {}", message, e);
            ExtractionResponse::failure(format!("Unsupported request: {}", e))
        }
    }
}
