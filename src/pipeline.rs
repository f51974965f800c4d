//! Full catalog refresh: species, then passive skills, then combos.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::combos::refresh_combos;
use crate::skills::refresh_skills;
use crate::species::refresh_species;
use crate::{CatalogStore, PalClient, PalError};

/// Catalog sizes after a successful refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshReport {
    pub species: usize,
    pub skills: usize,
    pub combos: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Run every extraction phase in order, pausing `phase_pacing` between them.
///
/// Each phase writes its own file when it completes. If a phase fails the error is
/// returned at once; files written by earlier phases are kept and files of later
/// phases are not touched.
#[tracing::instrument(skip(client, store), fields(dir = %store.dir().display()), err)]
pub async fn refresh(client: &PalClient, store: &CatalogStore) -> Result<RefreshReport, PalError> {
    let started_at = Utc::now();

    let species = refresh_species(client, store).await?.len();
    client.phase_pacing().wait().await;

    let skills = refresh_skills(client, store).await?.len();
    client.phase_pacing().wait().await;

    let combos = refresh_combos(client, store).await?.len();

    let report = RefreshReport {
        species,
        skills,
        combos,
        started_at,
        finished_at: Utc::now(),
    };
    tracing::info!(species, skills, combos, "catalog refresh complete");
    Ok(report)
}
