//! Recommended passive skill combos, one short list per category.

mod scrape;

pub use scrape::{MAX_COMBO_SKILLS, extract_combos};

use serde::{Deserialize, Serialize};

use crate::core::ComboAnchors;
use crate::{CatalogStore, PalClient, PalError};

/// The fixed set of combo categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComboCategory {
    Combat,
    Work,
    Mount,
}

impl ComboCategory {
    /// Every category, in the order they are scraped and stored.
    pub const ALL: [Self; 3] = [Self::Combat, Self::Work, Self::Mount];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combat => "Combat",
            Self::Work => "Work",
            Self::Mount => "Mount",
        }
    }

    pub(crate) fn anchor<'a>(&self, anchors: &'a ComboAnchors) -> &'a str {
        match self {
            Self::Combat => &anchors.combat,
            Self::Work => &anchors.work,
            Self::Mount => &anchors.mount,
        }
    }
}

impl std::fmt::Display for ComboCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Up to [`MAX_COMBO_SKILLS`] skill names recommended for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboPassiveSkill {
    pub name: ComboCategory,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Scrape the combo sections and replace the stored combo file wholesale.
pub async fn refresh_combos(
    client: &PalClient,
    store: &CatalogStore,
) -> Result<Vec<ComboPassiveSkill>, PalError> {
    let combos = extract_combos(client).await?;
    store.save_combos(&combos)?;
    tracing::info!(count = combos.len(), path = %store.combos_path().display(), "combos saved");
    Ok(combos)
}
