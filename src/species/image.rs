//! Artwork lookup on the companion wiki.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::core::{PalClient, PalError, net::fetch_text};

static INFOBOX_IMG: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".infobox img, .portable-infobox img").expect("infobox selector")
});
static ANY_IMG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("img selector"));

/// Variant suffixes the wiki names differently; no alternate title is tried for these yet.
const VARIANT_MARKERS: [&str; 3] = [" Lux", " Cryst", " Ignis"];

/// Resolve an artwork URL for `name`, or an empty string when nothing is found.
///
/// The primary article is `<wiki_base>/<Name_With_Underscores>`. If that fetch fails a
/// single alternate title is tried (see [`alternate_title`]). Lookup failures are logged
/// and never surface as errors.
#[tracing::instrument(skip(client))]
pub async fn resolve_image(client: &PalClient, name: &str) -> String {
    match try_resolve(client, name).await {
        Ok(Some(url)) => {
            tracing::debug!(%url, "image resolved");
            url
        }
        Ok(None) => {
            tracing::warn!("no image found");
            String::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "image lookup failed");
            String::new()
        }
    }
}

async fn try_resolve(client: &PalClient, name: &str) -> Result<Option<String>, PalError> {
    let title = name.replace(' ', "_");
    let primary = article_url(client.wiki_base(), &title)?;

    client.image_pacing().wait().await;

    let body = match fetch_text(client, &primary).await {
        Ok(body) => body,
        Err(e) => {
            let Some(alt) = alternate_title(name).filter(|alt| *alt != title) else {
                return Err(e);
            };
            tracing::debug!(error = %e, alternate = %alt, "primary article failed");
            let alternate = article_url(client.wiki_base(), &alt)?;
            fetch_text(client, &alternate).await?
        }
    };

    let Some(src) = pick_image_src(&body, name) else {
        return Ok(None);
    };
    absolutize(client.wiki_base(), &src).map(Some)
}

/// Append one path segment (percent-encoded) to the wiki base.
fn article_url(base: &Url, title: &str) -> Result<Url, PalError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| PalError::InvalidParams(format!("wiki base cannot take a path: {base}")))?
        .pop_if_empty()
        .push(title);
    Ok(url)
}

/// The one alternate article title tried after the primary fails.
///
/// - names with `Special` map to `Base_Name_(Special)`
/// - element variants (`Lux`, `Cryst`, `Ignis`) get no alternate
/// - everything else is retried with spaces removed
pub(crate) fn alternate_title(name: &str) -> Option<String> {
    if name.contains("Special") {
        let base = name.replace("Special ", "").replace(" Special", "");
        return Some(format!("{}_(Special)", base.replace(' ', "_")));
    }
    if VARIANT_MARKERS.iter().any(|m| name.contains(m)) {
        return None;
    }
    Some(name.replace(' ', ""))
}

/// Pick the artwork `src` out of a wiki article.
///
/// Infobox images win; within the infobox a thumbnail is skipped unless it is the
/// `150px` rendition. Otherwise the first image whose alt text mentions the name
/// (case-insensitively) is used.
pub(crate) fn pick_image_src(body: &str, name: &str) -> Option<String> {
    let doc = Html::parse_document(body);

    let infobox = doc.select(&INFOBOX_IMG).find_map(|img| {
        let src = img.value().attr("src")?;
        (!src.contains("thumb") || src.contains("150px")).then(|| src.to_string())
    });
    if infobox.is_some() {
        return infobox;
    }

    let needle = name.to_lowercase();
    doc.select(&ANY_IMG).find_map(|img| {
        let src = img.value().attr("src")?;
        let alt = img.value().attr("alt").unwrap_or_default();
        alt.to_lowercase().contains(&needle).then(|| src.to_string())
    })
}

/// Root-relative (and protocol-relative) sources are resolved against the wiki host.
fn absolutize(base: &Url, src: &str) -> Result<String, PalError> {
    if src.starts_with('/') {
        Ok(base.join(src)?.to_string())
    } else {
        Ok(src.to_string())
    }
}
