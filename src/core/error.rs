use std::path::PathBuf;

use thiserror::Error;

/// Which catalog a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// The species catalog (`pals.json`).
    Species,
    /// The passive-skill catalog (`passive_skills.json`).
    PassiveSkill,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Species => f.write_str("pal species"),
            Self::PassiveSkill => f.write_str("passive skill"),
        }
    }
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum PalError {
    /// An error occurred during an HTTP request (transport, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A configured or scraped URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The fetched page is missing an expected heading, table or cell shape.
    #[error("Page structure unexpected: {0}")]
    Parse(String),

    /// A persisted JSON document does not match the expected structure.
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        /// The document that failed to decode.
        path: PathBuf,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A catalog could not be encoded to JSON.
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A referenced species or skill name is absent from its catalog.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// The catalog that was searched.
        kind: CatalogKind,
        /// The name as supplied by the caller.
        name: String,
    },

    /// A data file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-supplied value is outside the accepted set.
    #[error("Invalid parameter: {0}")]
    InvalidParams(String),
}
