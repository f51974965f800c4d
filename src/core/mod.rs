//! Core components of the `paldex` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`PalClient`] and its builder.
//! - The primary [`PalError`] type.
//! - Request [`Pacing`] and the HTML document fetcher.
//! - The species-id ordering shared by every catalog sort.

/// The main client (`PalClient`), builder, and configuration.
pub mod client;
/// The primary error type (`PalError`) for the crate.
pub mod error;
/// Species id comparator.
pub mod id_order;
/// HTTP GET into text or a parsed document.
pub mod net;
/// Politeness delays between requests.
pub mod pacing;
pub(crate) mod text;

// convenient re-exports so most code can just `use crate::core::PalClient`
pub use client::{ComboAnchors, PalClient, PalClientBuilder};
pub use error::{CatalogKind, PalError};
pub use id_order::{compare_species_ids, sort_by_species_id};
pub use pacing::Pacing;
