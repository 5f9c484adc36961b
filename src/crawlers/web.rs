use crate::crawlers::{CandidateElement, PageSource};
use crate::error::{ExtractError, Result};
use crate::parsers::html;
use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

/// Moves the viewport to the maximum scroll offset
const SCROLL_TO_BOTTOM_SCRIPT: &str =
    "window.scrollTo(0, document.documentElement.scrollHeight);";

/// A live browser tab driven over WebDriver
pub struct WebDriverPage {
    client: Client,
}

impl WebDriverPage {
    /// Connect to WebDriver and open the list page.
    ///
    /// `login_wait` gives the user time to sign in inside the driven browser
    /// before the first scan; the Watch Later list is only rendered for a
    /// signed-in account.
    pub async fn open(webdriver_url: &str, list_url: &str, login_wait: Duration) -> Result<Self> {
        let client = connect_to_webdriver(webdriver_url).await?;

        if let Err(e) = client.goto(list_url).await {
            let err = navigation_error(e, "opening", list_url);
            close_client(client).await;
            return Err(err);
        }
        ::log::info!("Opened {}", list_url);

        if !login_wait.is_zero() {
            ::log::info!(
                "Waiting {} seconds before scanning (sign in now if needed)",
                login_wait.as_secs()
            );
            tokio::time::sleep(login_wait).await;
        }

        Ok(Self { client })
    }

    /// End the WebDriver session
    pub async fn close(self) {
        close_client(self.client).await;
    }
}

#[async_trait]
impl PageSource for WebDriverPage {
    async fn current_url(&mut self) -> Result<Url> {
        Ok(self.client.current_url().await?)
    }

    async fn list_candidates(&mut self) -> Result<Vec<CandidateElement>> {
        let base = self.client.current_url().await?;
        let source = match self.client.source().await {
            Ok(source) => source,
            Err(e) => return Err(scan_error(e, base.as_str())),
        };

        let candidates = html::candidate_fragments(&source)
            .into_iter()
            .map(|fragment| CandidateElement::new(fragment, base.clone()))
            .collect::<Vec<_>>();
        ::log::debug!("Found {} candidate rows on {}", candidates.len(), base);
        Ok(candidates)
    }

    async fn scroll_to_bottom(&mut self) -> Result<()> {
        self.client
            .execute(SCROLL_TO_BOTTOM_SCRIPT, Vec::new())
            .await
            .map_err(|e| ExtractError::Loop(format!("Scroll failed: {}", e)))?;
        Ok(())
    }
}

/// Connects to the WebDriver instance, trying common local ports if the configured one is down
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::warn!(
                "Failed to connect to WebDriver at {}: {}",
                webdriver_url,
                e
            );
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4444", // geckodriver / Selenium default
        "http://127.0.0.1:4444",
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    Err(ExtractError::WebDriver(format!(
        "could not connect to {} or any fallback; start a WebDriver server or set WEBDRIVER_URL",
        webdriver_url
    )))
}

async fn close_client(client: Client) {
    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session: {}", e);
    }
}

/// Logs a WebDriver command failure, noting lost sessions separately
fn log_command_error(error: &fantoccini::error::CmdError, context: &str, url: &str) -> String {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while {} {}", context, url);
    } else {
        ::log::error!("Failed {} {}: {}", context, url, error);
    }
    format!("{} {}: {}", context, url, error)
}

/// Failure while setting the page up, before the loop starts
fn navigation_error(error: fantoccini::error::CmdError, context: &str, url: &str) -> ExtractError {
    ExtractError::WebDriver(log_command_error(&error, context, url))
}

/// Failure while reading the page during the loop; same kind as a failed scroll
fn scan_error(error: fantoccini::error::CmdError, url: &str) -> ExtractError {
    ExtractError::Loop(log_command_error(&error, "getting source for", url))
}
