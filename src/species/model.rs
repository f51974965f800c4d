use serde::{Deserialize, Serialize};

/// One pal species as listed in the catalog, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// Paldeck number, e.g. `"002"` or `"002B"` for a variant.
    pub id: String,
    pub name: String,
    /// Absolute artwork URL, empty when the wiki lookup found nothing.
    #[serde(default)]
    pub image_url: String,
    /// Work suitability ratings in page order.
    #[serde(default)]
    pub suitability: Vec<Suitability>,
    /// Breeding pairs that produce this species.
    #[serde(default)]
    pub children: Vec<Child>,
}

/// A single job rating, e.g. `Kindling` at level 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suitability {
    pub work: String,
    pub level: u32,
}

/// One breeding combination: `parent` paired with another pal yields `child`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub parent: String,
    pub child: String,
}
