use clap::Parser;
use std::path::PathBuf;
use watch_later_extract::config::ExtractorConfig;
use watch_later_extract::exporters::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "watch-later-extract")]
#[command(about = "Scroll through a Watch Later playlist in a real browser and export every video")]
#[command(version)]
pub struct Args {
    /// Playlist page to open (defaults to the Watch Later list)
    pub url: Option<String>,

    /// JSON configuration file; command-line flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL of the WebDriver server
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Output format (repeatable: json, markdown, html)
    #[arg(short, long, value_enum)]
    pub format: Vec<ExportFormat>,

    /// Directory to write exports into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Milliseconds to wait after each scroll
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Consecutive empty rounds before stopping
    #[arg(long)]
    pub stable_rounds: Option<u32>,

    /// Seconds to wait after opening the page, e.g. to sign in
    #[arg(long)]
    pub login_wait: Option<u64>,

    /// Title used in exports and file names
    #[arg(long)]
    pub title: Option<String>,
}

impl Args {
    /// Layer the command-line values over a base configuration
    pub fn apply(&self, mut config: ExtractorConfig) -> ExtractorConfig {
        if let Some(url) = &self.url {
            config.list_url = url.clone();
        }
        if let Some(url) = &self.webdriver_url {
            config.webdriver_url = url.clone();
        }
        if !self.format.is_empty() {
            config.formats = self.format.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(ms) = self.poll_interval_ms {
            config.poll_interval_ms = ms;
        }
        if let Some(rounds) = self.stable_rounds {
            config.stable_round_threshold = rounds;
        }
        if let Some(secs) = self.login_wait {
            config.login_wait_secs = secs;
        }
        if let Some(title) = &self.title {
            config.list_title = title.clone();
        }
        config
    }
}
