//! JSON persistence for the three catalogs and the inventory.
//!
//! Every document is a pretty-printed JSON array that is read whole and rewritten
//! whole. Writes go through a sibling `*.tmp` file and a rename, so an interrupted
//! save leaves the previous document in place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::combos::ComboPassiveSkill;
use crate::inventory::PalSpecies;
use crate::skills::PassiveSkill;
use crate::species::Species;
use crate::PalError;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_SPECIES_FILE: &str = "pals.json";
const DEFAULT_SKILLS_FILE: &str = "passive_skills.json";
const DEFAULT_COMBOS_FILE: &str = "passive_skill_combos.json";
const DEFAULT_INVENTORY_FILE: &str = "stored_pals.json";

/// Locations of the four data documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStore {
    dir: PathBuf,
    species_file: String,
    skills_file: String,
    combos_file: String,
    inventory_file: String,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl CatalogStore {
    /// A store rooted at `dir` using the default file names.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            species_file: DEFAULT_SPECIES_FILE.to_string(),
            skills_file: DEFAULT_SKILLS_FILE.to_string(),
            combos_file: DEFAULT_COMBOS_FILE.to_string(),
            inventory_file: DEFAULT_INVENTORY_FILE.to_string(),
        }
    }

    pub fn with_species_file(mut self, name: impl Into<String>) -> Self {
        self.species_file = name.into();
        self
    }
    pub fn with_skills_file(mut self, name: impl Into<String>) -> Self {
        self.skills_file = name.into();
        self
    }
    pub fn with_combos_file(mut self, name: impl Into<String>) -> Self {
        self.combos_file = name.into();
        self
    }
    pub fn with_inventory_file(mut self, name: impl Into<String>) -> Self {
        self.inventory_file = name.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
    pub fn species_path(&self) -> PathBuf {
        self.dir.join(&self.species_file)
    }
    pub fn skills_path(&self) -> PathBuf {
        self.dir.join(&self.skills_file)
    }
    pub fn combos_path(&self) -> PathBuf {
        self.dir.join(&self.combos_file)
    }
    pub fn inventory_path(&self) -> PathBuf {
        self.dir.join(&self.inventory_file)
    }

    /* ----------------------- species ----------------------- */

    /// The species catalog; empty if it has never been written.
    pub fn load_species(&self) -> Result<Vec<Species>, PalError> {
        load_list(&self.species_path())
    }
    pub fn save_species(&self, species: &[Species]) -> Result<(), PalError> {
        save_list(&self.species_path(), species)
    }
    /// Species names in catalog order.
    pub fn species_names(&self) -> Result<Vec<String>, PalError> {
        Ok(self.load_species()?.into_iter().map(|s| s.name).collect())
    }

    /* ----------------------- skills ----------------------- */

    pub fn load_skills(&self) -> Result<Vec<PassiveSkill>, PalError> {
        load_list(&self.skills_path())
    }
    pub fn save_skills(&self, skills: &[PassiveSkill]) -> Result<(), PalError> {
        save_list(&self.skills_path(), skills)
    }
    /// Passive skill names in catalog (tier) order.
    pub fn skill_names(&self) -> Result<Vec<String>, PalError> {
        Ok(self.load_skills()?.into_iter().map(|s| s.name).collect())
    }

    /* ----------------------- combos ----------------------- */

    pub fn load_combos(&self) -> Result<Vec<ComboPassiveSkill>, PalError> {
        load_list(&self.combos_path())
    }
    pub fn save_combos(&self, combos: &[ComboPassiveSkill]) -> Result<(), PalError> {
        save_list(&self.combos_path(), combos)
    }

    /* ----------------------- inventory ----------------------- */

    pub fn load_inventory(&self) -> Result<Vec<PalSpecies>, PalError> {
        load_list(&self.inventory_path())
    }
    pub fn save_inventory(&self, groups: &[PalSpecies]) -> Result<(), PalError> {
        save_list(&self.inventory_path(), groups)
    }
}

/// A missing file reads as an empty list, and so does a literal `null` document.
fn load_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PalError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no document yet");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let items: Option<Vec<T>> =
        serde_json::from_slice(&bytes).map_err(|source| PalError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(items.unwrap_or_default())
}

fn save_list<T: Serialize>(path: &Path, items: &[T]) -> Result<(), PalError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_vec_pretty(items)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), items = items.len(), "document written");
    Ok(())
}
