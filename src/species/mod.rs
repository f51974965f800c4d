//! The species catalog: list page scrape, wiki artwork and breeding pairs.
//!
//! Internals are split into:
//! - `scrape`: species table + detail page parsing
//! - `image`:  artwork lookup on the wiki with fallback titles

mod image;
mod model;
pub(crate) mod scrape;

pub use image::resolve_image;
pub use model::{Child, Species, Suitability};
pub use scrape::extract_species;

use crate::{CatalogStore, PalClient, PalError};

/// Load the stored species catalog, merge a fresh scrape into it and write it back.
///
/// The file is only rewritten once the whole scrape has finished.
pub async fn refresh_species(
    client: &PalClient,
    store: &CatalogStore,
) -> Result<Vec<Species>, PalError> {
    let existing = store.load_species()?;
    let species = extract_species(client, existing).await?;
    store.save_species(&species)?;
    tracing::info!(count = species.len(), path = %store.species_path().display(), "species saved");
    Ok(species)
}
