//! paldex: scrape a Palworld species / passive skill / combo catalog and track
//! owned pals against it.
//!
//! The acquisition side is a [`PalClient`] plus one extractor per catalog
//! ([`species`], [`skills`], [`combos`]), chained by [`pipeline::refresh`]. The
//! catalogs and the user's [`Inventory`] are plain JSON documents managed by a
//! [`CatalogStore`].
//!
//! ```no_run
//! # use paldex::{CatalogStore, Gender, Inventory, PalClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), paldex::PalError> {
//! let client = PalClient::default();
//! let store = CatalogStore::new("./data");
//! paldex::pipeline::refresh(&client, &store).await?;
//!
//! let inventory = Inventory::new(store);
//! inventory.add_instance("Lamball", Gender::Female, &["Runner"])?;
//! # Ok(())
//! # }
//! ```

pub mod combos;
pub mod core;
pub mod inventory;
pub mod pipeline;
pub mod skills;
pub mod species;
pub mod store;

pub use crate::core::{
    CatalogKind, ComboAnchors, Pacing, PalClient, PalClientBuilder, PalError,
    compare_species_ids, sort_by_species_id,
};
pub use combos::{ComboCategory, ComboPassiveSkill};
pub use inventory::{Gender, Inventory, OwnedPal, PalSpecies, StoredPal};
pub use pipeline::{RefreshReport, refresh};
pub use skills::PassiveSkill;
pub use species::{Child, Species, Suitability};
pub use store::CatalogStore;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Convenience for binaries and tests; library code only emits events.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
