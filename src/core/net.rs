//! Document fetcher shared by every scraper.

use scraper::Html;
use url::Url;

use crate::core::{PalClient, PalError};

/// GET `url` and return the body as text.
///
/// A non-2xx status yields [`PalError::Status`]; transport failures come back
/// as [`PalError::Http`]. There are no retries here.
pub async fn fetch_text(client: &PalClient, url: &Url) -> Result<String, PalError> {
    tracing::debug!(%url, "fetching");
    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(PalError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp.text().await?)
}

/// GET `url` and parse it into a traversable HTML document.
pub async fn fetch_document(client: &PalClient, url: &Url) -> Result<Html, PalError> {
    let body = fetch_text(client, url).await?;
    Ok(Html::parse_document(&body))
}
