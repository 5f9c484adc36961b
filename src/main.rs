use clap::Parser;
use std::process::ExitCode;
use watch_later_extract::config::ExtractorConfig;
use watch_later_extract::exporters::ExportedList;
use watch_later_extract::{ExtractionResponse, Extractor};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => match ExtractorConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ExtractorConfig::default(),
    };
    let config = args.apply(base);

    ::log::info!("Starting extraction for: {}", config.list_url);
    println!("Note: extraction requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default {}",
        config.webdriver_url
    );

    let response = match Extractor::new().with_config(config.clone()).run().await {
        Ok(response) => response,
        Err(e) => {
            ::log::error!("Failed to start extraction: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let records = match response {
        ExtractionResponse::Success { records, count } => {
            println!("Extracted {} videos", count);
            records
        }
        ExtractionResponse::Failure { error } => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let list = ExportedList::watch_later(config.list_title.clone(), records);
    for format in &config.formats {
        match format.exporter().export(&list, &config.output_dir) {
            Ok(path) => println!("Saved {}", path.display()),
            Err(e) => {
                ::log::error!("Failed to write {:?} export: {}", format, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
