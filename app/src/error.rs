//! Errors raised while loading regression case files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("failed to read case file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid case file")]
    Parse(#[from] toml::de::Error),

    #[error("case file contains no [[case]] tables")]
    Empty,

    #[error("case #{0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate case name: {0}")]
    DuplicateName(String),
}
