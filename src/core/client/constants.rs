//! Centralized constants for default endpoints, anchors and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Game8 page listing every pal with work suitability.
pub(crate) const DEFAULT_SPECIES_URL: &str = "https://game8.co/games/Palworld/archives/439556";

/// Game8 passive skill reference page.
pub(crate) const DEFAULT_SKILLS_URL: &str = "https://game8.co/games/Palworld/archives/439667";

/// The combo sections live on the passive skill page.
pub(crate) const DEFAULT_COMBOS_URL: &str = DEFAULT_SKILLS_URL;

/// Wiki article base (pal name is appended).
pub(crate) const DEFAULT_WIKI_BASE: &str = "https://palworld.wiki.gg/wiki/";

/// Heading id of the "All Passive Skills" section.
pub(crate) const DEFAULT_SKILLS_ANCHOR: &str = "hm_1";

/// Heading ids of the combat / work / mount combo sections.
pub(crate) const DEFAULT_COMBO_ANCHORS: [&str; 3] = ["hm_2", "hm_3", "hm_4"];

pub(crate) const DEFAULT_IMAGE_PACING_MS: u64 = 1_000;
pub(crate) const DEFAULT_DETAIL_PACING_MS: u64 = 2_000;
pub(crate) const DEFAULT_PHASE_PACING_MS: u64 = 5_000;
