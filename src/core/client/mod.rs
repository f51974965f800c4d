//! Public client surface + builder.
//! Defaults for endpoints, anchors and pacing live in `constants`.

mod constants;

use crate::core::{PalError, Pacing};
use constants::{
    DEFAULT_COMBO_ANCHORS, DEFAULT_COMBOS_URL, DEFAULT_DETAIL_PACING_MS, DEFAULT_IMAGE_PACING_MS,
    DEFAULT_PHASE_PACING_MS, DEFAULT_SKILLS_ANCHOR, DEFAULT_SKILLS_URL, DEFAULT_SPECIES_URL,
    DEFAULT_WIKI_BASE, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Heading anchors of the three combo sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboAnchors {
    pub combat: String,
    pub work: String,
    pub mount: String,
}

impl Default for ComboAnchors {
    fn default() -> Self {
        let [combat, work, mount] = DEFAULT_COMBO_ANCHORS;
        Self {
            combat: combat.to_string(),
            work: work.to_string(),
            mount: mount.to_string(),
        }
    }
}

/// Shared HTTP client plus every source location the scrapers read from.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct PalClient {
    http: Client,
    species_url: Url,
    skills_url: Url,
    combos_url: Url,
    wiki_base: Url,
    skills_anchor: String,
    combo_anchors: ComboAnchors,

    image_pacing: Pacing,
    detail_pacing: Pacing,
    phase_pacing: Pacing,
}

impl Default for PalClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl PalClient {
    /// Create a new builder.
    pub fn builder() -> PalClientBuilder {
        PalClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn species_url(&self) -> &Url {
        &self.species_url
    }
    pub(crate) fn skills_url(&self) -> &Url {
        &self.skills_url
    }
    pub(crate) fn combos_url(&self) -> &Url {
        &self.combos_url
    }
    pub(crate) fn wiki_base(&self) -> &Url {
        &self.wiki_base
    }
    pub(crate) fn skills_anchor(&self) -> &str {
        &self.skills_anchor
    }
    pub(crate) fn combo_anchors(&self) -> &ComboAnchors {
        &self.combo_anchors
    }

    /// Delay applied before every wiki image lookup.
    pub fn image_pacing(&self) -> Pacing {
        self.image_pacing
    }
    /// Delay applied before every species detail page fetch.
    pub fn detail_pacing(&self) -> Pacing {
        self.detail_pacing
    }
    /// Delay applied between the phases of a full refresh.
    pub fn phase_pacing(&self) -> Pacing {
        self.phase_pacing
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PalClientBuilder {
    user_agent: Option<String>,
    species_url: Option<Url>,
    skills_url: Option<Url>,
    combos_url: Option<Url>,
    wiki_base: Option<Url>,
    skills_anchor: Option<String>,
    combo_anchors: Option<ComboAnchors>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,

    image_pacing: Option<Pacing>,
    detail_pacing: Option<Pacing>,
    phase_pacing: Option<Pacing>,
}

impl PalClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the species list page (e.g., `https://game8.co/games/Palworld/archives/439556`).
    pub fn species_url(mut self, url: Url) -> Self {
        self.species_url = Some(url);
        self
    }

    /// Override the passive skill page.
    pub fn skills_url(mut self, url: Url) -> Self {
        self.skills_url = Some(url);
        self
    }

    /// Override the page holding the combo sections.
    pub fn combos_url(mut self, url: Url) -> Self {
        self.combos_url = Some(url);
        self
    }

    /// Override the wiki article base (e.g., `https://palworld.wiki.gg/wiki/`).
    ///
    /// The pal name is joined onto this, so it should end with a slash.
    pub fn wiki_base(mut self, url: Url) -> Self {
        self.wiki_base = Some(url);
        self
    }

    /// Heading id that introduces the passive skill table.
    pub fn skills_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.skills_anchor = Some(anchor.into());
        self
    }

    /// Heading ids that introduce the combat, work and mount combo tables.
    pub fn combo_anchors(
        mut self,
        combat: impl Into<String>,
        work: impl Into<String>,
        mount: impl Into<String>,
    ) -> Self {
        self.combo_anchors = Some(ComboAnchors {
            combat: combat.into(),
            work: work.into(),
            mount: mount.into(),
        });
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Pacing before each wiki image lookup. Default: 1s.
    pub fn image_pacing(mut self, pacing: Pacing) -> Self {
        self.image_pacing = Some(pacing);
        self
    }

    /// Pacing before each species detail page fetch. Default: 2s.
    pub fn detail_pacing(mut self, pacing: Pacing) -> Self {
        self.detail_pacing = Some(pacing);
        self
    }

    /// Pacing between refresh phases. Default: 5s.
    pub fn phase_pacing(mut self, pacing: Pacing) -> Self {
        self.phase_pacing = Some(pacing);
        self
    }

    /// Apply one pacing policy everywhere. `Pacing::Disabled` in tests.
    pub fn pacing(self, pacing: Pacing) -> Self {
        self.image_pacing(pacing)
            .detail_pacing(pacing)
            .phase_pacing(pacing)
    }

    pub fn build(self) -> Result<PalClient, PalError> {
        let species_url = match self.species_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_SPECIES_URL)?,
        };
        let skills_url = match self.skills_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_SKILLS_URL)?,
        };
        let combos_url = match self.combos_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_COMBOS_URL)?,
        };
        let wiki_base = match self.wiki_base {
            Some(u) => u,
            None => Url::parse(DEFAULT_WIKI_BASE)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PalClient {
            http,
            species_url,
            skills_url,
            combos_url,
            wiki_base,
            skills_anchor: self
                .skills_anchor
                .unwrap_or_else(|| DEFAULT_SKILLS_ANCHOR.to_string()),
            combo_anchors: self.combo_anchors.unwrap_or_default(),
            image_pacing: self
                .image_pacing
                .unwrap_or(Pacing::millis(DEFAULT_IMAGE_PACING_MS)),
            detail_pacing: self
                .detail_pacing
                .unwrap_or(Pacing::millis(DEFAULT_DETAIL_PACING_MS)),
            phase_pacing: self
                .phase_pacing
                .unwrap_or(Pacing::millis(DEFAULT_PHASE_PACING_MS)),
        })
    }
}
