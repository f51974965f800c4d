use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PalError;

/// Gender of an owned pal. Stored as `"m"` / `"f"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m", alias = "male")]
    Male,
    #[serde(rename = "f", alias = "female")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = PalError;

    /// Accepts `m`, `male`, `f` and `female` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            other => Err(PalError::InvalidParams(format!(
                "gender must be m or f, got `{other}`"
            ))),
        }
    }
}

/// One owned pal. `id` runs 1..=n within its species group with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPal {
    pub id: u32,
    pub gender: Gender,
    #[serde(default)]
    pub passive_skills: Vec<String>,
}

/// All owned pals of one species. Never persisted empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalSpecies {
    pub name: String,
    #[serde(default)]
    pub stored_pals: Vec<StoredPal>,
}

/// Flattened view of an owned pal joined with its species artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedPal {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    pub gender: Gender,
    pub passive_skills: Vec<String>,
}
