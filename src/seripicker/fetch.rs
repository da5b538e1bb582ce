use log::debug;
use reqwest::Client;
use seripicker_model::Series;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure. HTTP status codes are deliberately not
    /// inspected; a non-success body that fails to decode surfaces as
    /// `Decode` instead.
    #[error("failed to fetch series list: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed series list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Single GET against the feed, no retry, no caching. Array order of the
/// response is preserved.
pub async fn fetch_series(client: &Client, url: &str) -> Result<Vec<Series>, FetchError> {
    debug!("Fetching series list from {url}");
    let body = client.get(url).send().await?.bytes().await?;
    let series = decode_series(&body)?;
    debug!("Fetched {} series", series.len());
    Ok(series)
}

fn decode_series(body: &[u8]) -> Result<Vec<Series>, serde_json::Error> {
    serde_json::from_slice(body)
}
