//! Species list page + per-species breeding page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::image::resolve_image;
use super::{Child, Species, Suitability};
use crate::core::{
    PalClient, PalError,
    id_order::sort_by_species_id,
    net::{fetch_document, fetch_text},
    text::{element_text, next_table_sibling, same_name},
};

static SPECIES_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.a-table.flexible-cell").expect("table selector"));
static BODY_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr").expect("row selector"));
static TH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").expect("th selector"));
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("td selector"));
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("a selector"));
static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".align").expect("rating selector"));
static SECTION_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3.a-header--3").expect("heading selector"));

const BREEDING_HEADING: &str = "Best Ways to";
const SUITABILITY_COLUMN: usize = 2;
const PARENT_COLUMN: usize = 2;
const CHILD_COLUMN: usize = 4;

/// One row of the species table, before any follow-up requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListingRow {
    pub id: String,
    pub name: String,
    pub detail_href: Option<String>,
    pub ratings: Vec<String>,
}

/// Scrape the species list page and merge it into `existing`.
///
/// New names get artwork, suitability and breeding data; known names only have an
/// empty `image_url` backfilled. The result is sorted by species id.
///
/// # Errors
///
/// Fails when the list page cannot be fetched or has no species table. Per-species
/// follow-up failures (artwork, breeding page) are logged and leave that field empty.
#[tracing::instrument(skip(client, existing), fields(existing = existing.len()), err)]
pub async fn extract_species(
    client: &PalClient,
    existing: Vec<Species>,
) -> Result<Vec<Species>, PalError> {
    let page_url = client.species_url().clone();
    let rows = {
        let doc = fetch_document(client, &page_url).await?;
        parse_listing(&doc)?
    };
    tracing::info!(rows = rows.len(), "species table parsed");

    let mut species = existing;
    for row in rows {
        match species.iter().position(|s| same_name(&s.name, &row.name)) {
            Some(idx) => {
                if species[idx].image_url.is_empty() {
                    tracing::info!(name = %row.name, "backfilling image");
                    species[idx].image_url = resolve_image(client, &row.name).await;
                }
            }
            None => {
                tracing::info!(id = %row.id, name = %row.name, "new species");
                let image_url = resolve_image(client, &row.name).await;
                let suitability = parse_ratings(&row.name, &row.ratings);
                let children = match &row.detail_href {
                    Some(href) => load_children(client, &page_url, href, &row.name).await,
                    None => Vec::new(),
                };
                species.push(Species {
                    id: row.id,
                    name: row.name,
                    image_url,
                    suitability,
                    children,
                });
            }
        }
    }

    sort_by_species_id(&mut species, |s| s.id.as_str());
    Ok(species)
}

/// Rows of every species table on the list page. Rows without an id or name are dropped.
pub(crate) fn parse_listing(doc: &Html) -> Result<Vec<ListingRow>, PalError> {
    let mut tables = doc.select(&SPECIES_TABLE).peekable();
    if tables.peek().is_none() {
        return Err(PalError::Parse("species table not found".into()));
    }

    let mut rows = Vec::new();
    for table in tables {
        for row in table.select(&BODY_ROW) {
            if let Some(listing) = parse_listing_row(row) {
                rows.push(listing);
            }
        }
    }
    Ok(rows)
}

fn parse_listing_row(row: ElementRef<'_>) -> Option<ListingRow> {
    let id = row.select(&TH).next().map(element_text).unwrap_or_default();
    let name = row
        .select(&TD)
        .find_map(|td| td.select(&LINK).next())
        .map(element_text)
        .unwrap_or_default();
    if id.is_empty() || name.is_empty() {
        return None;
    }

    let cells: Vec<ElementRef<'_>> = row.select(&TD).collect();
    let detail_href = cells
        .first()
        .and_then(|td| td.select(&LINK).next())
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);
    let ratings = cells
        .get(SUITABILITY_COLUMN)
        .map(|td| td.select(&RATING).map(element_text).collect())
        .unwrap_or_default();

    Some(ListingRow {
        id,
        name,
        detail_href,
        ratings,
    })
}

fn parse_ratings(name: &str, ratings: &[String]) -> Vec<Suitability> {
    ratings
        .iter()
        .filter_map(|text| {
            let parsed = parse_suitability(text);
            if parsed.is_none() {
                tracing::warn!(%name, entry = %text, "skipping malformed suitability entry");
            }
            parsed
        })
        .collect()
}

/// `"Kindling Lv 2"` → `{ work: "Kindling", level: 2 }`. The first token is the work and
/// the third the level; anything shorter or non-numeric is rejected.
pub(crate) fn parse_suitability(text: &str) -> Option<Suitability> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [work, _, level, ..] = tokens.as_slice() else {
        return None;
    };
    let level = level.parse::<u32>().ok()?;
    Some(Suitability {
        work: (*work).to_string(),
        level,
    })
}

async fn load_children(client: &PalClient, page_url: &Url, href: &str, name: &str) -> Vec<Child> {
    let url = match page_url.join(href) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(%name, %href, error = %e, "bad detail link");
            return Vec::new();
        }
    };

    client.detail_pacing().wait().await;

    let body = match fetch_text(client, &url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(%name, error = %e, "detail page fetch failed");
            return Vec::new();
        }
    };

    match parse_breeding(&Html::parse_document(&body)) {
        Ok(children) => children,
        Err(e) => {
            tracing::warn!(%name, error = %e, "breeding table missing");
            Vec::new()
        }
    }
}

/// Breeding pairs from every "Best Ways to ..." section of a detail page.
///
/// A matching heading with no table after it fails the whole page.
pub(crate) fn parse_breeding(doc: &Html) -> Result<Vec<Child>, PalError> {
    let mut children = Vec::new();
    for heading in doc
        .select(&SECTION_HEADING)
        .filter(|h| element_text(*h).contains(BREEDING_HEADING))
    {
        let table = next_table_sibling(heading)
            .ok_or_else(|| PalError::Parse("no table after breeding heading".into()))?;

        for row in table.select(&BODY_ROW) {
            let cells: Vec<String> = row.select(&TD).map(element_text).collect();
            let (Some(parent), Some(child)) = (cells.get(PARENT_COLUMN), cells.get(CHILD_COLUMN))
            else {
                continue;
            };
            if parent.is_empty() || child.is_empty() {
                continue;
            }
            children.push(Child {
                parent: parent.clone(),
                child: child.clone(),
            });
        }
    }
    Ok(children)
}
