//! The user's owned pals, validated against the species and skill catalogs.
//!
//! Each operation reads the catalogs and the inventory document fresh, applies the
//! change in memory and rewrites the inventory document in full. Nothing is written
//! when validation fails.

mod model;

pub use model::{Gender, OwnedPal, PalSpecies, StoredPal};

use std::collections::HashMap;

use crate::core::text::same_name;
use crate::{CatalogKind, CatalogStore, PalError};

/// Inventory operations over the documents of a [`CatalogStore`].
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    store: CatalogStore,
}

impl Inventory {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// The inventory document as stored.
    pub fn groups(&self) -> Result<Vec<PalSpecies>, PalError> {
        self.store.load_inventory()
    }

    /// Record a new owned pal and return it.
    ///
    /// The species and every skill must exist in their catalogs (case-insensitive);
    /// the stored names use the catalog spelling. The new pal's id is the group's
    /// current size plus one.
    ///
    /// # Errors
    ///
    /// [`PalError::NotFound`] for an unknown species or skill, in which case the
    /// inventory file is left untouched.
    #[tracing::instrument(skip(self, skill_names), fields(skills = skill_names.len()), err)]
    pub fn add_instance<S: AsRef<str>>(
        &self,
        species_name: &str,
        gender: Gender,
        skill_names: &[S],
    ) -> Result<StoredPal, PalError> {
        let species = self.store.load_species()?;
        let canonical_species = species
            .iter()
            .find(|s| same_name(&s.name, species_name))
            .map(|s| s.name.clone())
            .ok_or_else(|| PalError::NotFound {
                kind: CatalogKind::Species,
                name: species_name.to_string(),
            })?;

        let skills = self.store.load_skills()?;
        let passive_skills = skill_names
            .iter()
            .map(|wanted| {
                let wanted = wanted.as_ref();
                skills
                    .iter()
                    .find(|s| same_name(&s.name, wanted))
                    .map(|s| s.name.clone())
                    .ok_or_else(|| PalError::NotFound {
                        kind: CatalogKind::PassiveSkill,
                        name: wanted.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut groups = self.store.load_inventory()?;
        let pal = push_pal(&mut groups, &canonical_species, gender, passive_skills);
        self.store.save_inventory(&groups)?;

        tracing::info!(species = %canonical_species, id = pal.id, "pal stored");
        Ok(pal)
    }

    /// Remove the pal `id` from the group named `species_name` and close the gap.
    ///
    /// Returns the removed pal, or `None` when the group or id does not exist. The
    /// inventory document is rewritten either way.
    #[tracing::instrument(skip(self), err)]
    pub fn remove_instance(
        &self,
        species_name: &str,
        id: u32,
    ) -> Result<Option<StoredPal>, PalError> {
        let mut groups = self.store.load_inventory()?;
        let removed = take_pal(&mut groups, species_name, id);
        self.store.save_inventory(&groups)?;

        match &removed {
            Some(_) => tracing::info!("pal removed"),
            None => tracing::debug!("nothing to remove"),
        }
        Ok(removed)
    }

    /// Every owned pal with its species artwork, in inventory order.
    pub fn owned(&self) -> Result<Vec<OwnedPal>, PalError> {
        let images: HashMap<String, String> = self
            .store
            .load_species()?
            .into_iter()
            .map(|s| (s.name.to_lowercase(), s.image_url))
            .collect();

        let groups = self.store.load_inventory()?;
        Ok(groups
            .into_iter()
            .flat_map(|group| {
                let image_url = images
                    .get(&group.name.to_lowercase())
                    .cloned()
                    .unwrap_or_default();
                let name = group.name;
                group.stored_pals.into_iter().map(move |pal| OwnedPal {
                    id: pal.id,
                    name: name.clone(),
                    image_url: image_url.clone(),
                    gender: pal.gender,
                    passive_skills: pal.passive_skills,
                })
            })
            .collect())
    }
}

fn push_pal(
    groups: &mut Vec<PalSpecies>,
    species: &str,
    gender: Gender,
    passive_skills: Vec<String>,
) -> StoredPal {
    let idx = match groups.iter().position(|g| same_name(&g.name, species)) {
        Some(idx) => idx,
        None => {
            groups.push(PalSpecies {
                name: species.to_string(),
                stored_pals: Vec::new(),
            });
            groups.len() - 1
        }
    };

    let group = &mut groups[idx];
    // Ids are dense, so the next one is the group size plus one.
    let pal = StoredPal {
        id: group.stored_pals.len() as u32 + 1,
        gender,
        passive_skills,
    };
    group.stored_pals.push(pal.clone());
    pal
}

fn take_pal(groups: &mut Vec<PalSpecies>, species: &str, id: u32) -> Option<StoredPal> {
    let idx = groups.iter().position(|g| same_name(&g.name, species))?;
    let group = &mut groups[idx];

    let removed = group
        .stored_pals
        .iter()
        .position(|p| p.id == id)
        .map(|pos| group.stored_pals.remove(pos));

    if removed.is_some() {
        for pal in group.stored_pals.iter_mut().filter(|p| p.id > id) {
            pal.id -= 1;
        }
    }
    if group.stored_pals.is_empty() {
        groups.remove(idx);
    }
    removed
}
