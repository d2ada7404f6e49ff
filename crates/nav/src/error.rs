//! Navigation error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading menu definitions or rendering templates.
///
/// Building a [`NavView`](crate::view::NavView) never fails; only the edges
/// that touch operator-supplied files or templates do.
#[derive(Debug, Error)]
pub enum NavError {
    /// Two entries in the menu tree share an id.
    #[error("duplicate menu id '{id}'")]
    DuplicateId { id: String },

    /// A group lists a page that is another entry's link or belongs to
    /// another group.
    #[error("group '{group}' cannot claim page '{page}': already owned by '{owner}'")]
    ConflictingMemberPage {
        group: String,
        page: String,
        owner: String,
    },

    /// An entry was defined with an empty id.
    #[error("empty menu id in {context}")]
    EmptyId { context: String },

    /// The menu definition file could not be read.
    #[error("failed to read menu definition {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML menu definition")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid JSON menu definition")]
    Json(#[from] serde_json::Error),

    /// The menu file extension is not `.yml`, `.yaml` or `.json`.
    #[error("unsupported menu definition format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("template error")]
    Template(#[from] tera::Error),
}

/// Result type alias using NavError.
pub type NavResult<T> = Result<T, NavError>;
