use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generation pass. Configuration problems are not
/// represented here: they are downgraded to warnings and a skipped run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read project manifest `{path}`")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse project manifest `{path}`")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not read string table for locale `{locale}` at `{path}`")]
    LocaleRead {
        locale: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse string table for locale `{locale}` at `{path}`")]
    LocaleParse {
        locale: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write generated module `{path}`")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
