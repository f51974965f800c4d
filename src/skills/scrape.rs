use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::PassiveSkill;
use crate::core::{
    PalClient, PalError,
    net::fetch_document,
    text::{element_text, next_table_sibling, same_name},
};

static SECTION_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3.a-header--3").expect("heading selector"));
static BODY_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr").expect("row selector"));
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("td selector"));

/// Scrape the passive skill table and merge it into `existing`.
///
/// Names already present (case-insensitively) are left alone, so running this twice
/// against an unchanged page is a no-op. The result is sorted by ascending tier; equal
/// tiers keep their existing relative order.
#[tracing::instrument(skip(client, existing), fields(existing = existing.len()), err)]
pub async fn extract_skills(
    client: &PalClient,
    existing: Vec<PassiveSkill>,
) -> Result<Vec<PassiveSkill>, PalError> {
    let scraped = {
        let doc = fetch_document(client, client.skills_url()).await?;
        parse_skill_table(&doc, client.skills_anchor())?
    };
    tracing::info!(rows = scraped.len(), "passive skill table parsed");

    let mut skills = existing;
    for skill in scraped {
        if skills.iter().any(|s| same_name(&s.name, &skill.name)) {
            continue;
        }
        tracing::debug!(name = %skill.name, tier = skill.tier, "new passive skill");
        skills.push(skill);
    }

    skills.sort_by_key(|s| s.tier);
    Ok(skills)
}

/// Skills from the first table after the heading with id `anchor`.
pub(crate) fn parse_skill_table(doc: &Html, anchor: &str) -> Result<Vec<PassiveSkill>, PalError> {
    let heading = doc
        .select(&SECTION_HEADING)
        .find(|h| h.value().id() == Some(anchor))
        .ok_or_else(|| PalError::Parse(format!("passive skill heading #{anchor} not found")))?;
    let table = next_table_sibling(heading)
        .ok_or_else(|| PalError::Parse(format!("no table after heading #{anchor}")))?;

    Ok(table.select(&BODY_ROW).filter_map(parse_skill_row).collect())
}

fn parse_skill_row(row: ElementRef<'_>) -> Option<PassiveSkill> {
    let cells: Vec<String> = row.select(&TD).map(element_text).collect();
    let name = cells.first().filter(|n| !n.is_empty())?.clone();

    // Some layouts leave column 1 blank and put the effect in column 2.
    let effect = match cells.get(1) {
        Some(e) if !e.is_empty() => e.clone(),
        _ => cells.get(2).cloned().unwrap_or_default(),
    };

    let tier_text = cells.get(3).map(String::as_str).unwrap_or_default();
    let Some(tier) = parse_tier(tier_text) else {
        tracing::warn!(%name, tier = %tier_text, "skipping passive skill with unreadable tier");
        return None;
    };

    Some(PassiveSkill { name, effect, tier })
}

/// `"Tier 3"` → `3`. Tier 0 is not a valid tier.
pub(crate) fn parse_tier(text: &str) -> Option<u32> {
    text.split_whitespace()
        .nth(1)?
        .parse::<u32>()
        .ok()
        .filter(|t| *t >= 1)
}
