use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{ComboCategory, ComboPassiveSkill};
use crate::core::{
    PalClient, PalError,
    net::fetch_document,
    text::{element_text, next_table_sibling},
};

/// Longest list kept per category.
pub const MAX_COMBO_SKILLS: usize = 4;

static WITH_ID: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[id]").expect("id selector"));
static BODY_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr td").expect("cell selector"));

/// Scrape one combo list per [`ComboCategory`].
///
/// Prior state is never merged. A category whose heading or table is missing yields an
/// empty list rather than an error; only a failed page fetch aborts the run.
#[tracing::instrument(skip(client), err)]
pub async fn extract_combos(client: &PalClient) -> Result<Vec<ComboPassiveSkill>, PalError> {
    let doc = fetch_document(client, client.combos_url()).await?;

    let combos = ComboCategory::ALL
        .into_iter()
        .map(|category| {
            let anchor = category.anchor(client.combo_anchors());
            let skills = parse_combo_section(&doc, anchor).unwrap_or_else(|e| {
                tracing::warn!(%category, error = %e, "combo section unreadable");
                Vec::new()
            });
            tracing::debug!(%category, skills = skills.len(), "combo parsed");
            ComboPassiveSkill {
                name: category,
                skills,
            }
        })
        .collect();
    Ok(combos)
}

/// The first [`MAX_COMBO_SKILLS`] non-empty cells of the table after `#anchor`.
pub(crate) fn parse_combo_section(doc: &Html, anchor: &str) -> Result<Vec<String>, PalError> {
    let heading = doc
        .select(&WITH_ID)
        .find(|el| el.value().id() == Some(anchor))
        .ok_or_else(|| PalError::Parse(format!("combo heading #{anchor} not found")))?;
    let table = next_table_sibling(heading)
        .ok_or_else(|| PalError::Parse(format!("no table after heading #{anchor}")))?;

    Ok(table
        .select(&BODY_CELL)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .take(MAX_COMBO_SKILLS)
        .collect())
}
