//! Passive skill catalog scraped from the skill reference page.

mod scrape;

pub use scrape::extract_skills;

use serde::{Deserialize, Serialize};

use crate::{CatalogStore, PalClient, PalError};

/// A passive skill with its effect text and tier (1 is the weakest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassiveSkill {
    pub name: String,
    pub effect: String,
    pub tier: u32,
}

/// Load the stored skill catalog, merge a fresh scrape into it and write it back.
pub async fn refresh_skills(
    client: &PalClient,
    store: &CatalogStore,
) -> Result<Vec<PassiveSkill>, PalError> {
    let existing = store.load_skills()?;
    let skills = extract_skills(client, existing).await?;
    store.save_skills(&skills)?;
    tracing::info!(count = skills.len(), path = %store.skills_path().display(), "passive skills saved");
    Ok(skills)
}
