mod fetch;
mod parse;

pub use parse::{parse_records, RawBuildRecord};

use log::info;
use url::Url;

use crate::error::Result;

/// Resolves a source argument to raw CSV text: http(s) URLs are fetched,
/// anything else is treated as a local path.
pub async fn load_source(source: &str) -> Result<String> {
    match Url::parse(source) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            fetch::CsvFetcher::new()?.fetch(&url).await
        }
        _ => {
            info!("Reading build history from file: {source}");
            Ok(std::fs::read_to_string(source)?)
        }
    }
}
