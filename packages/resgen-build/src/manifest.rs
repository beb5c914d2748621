//! Asset declarations from the host project manifest.
//!
//! The manifest is the host `Cargo.toml`; declared assets live under
//! `[package.metadata.resgen]` as a list of path strings. A manifest without
//! that table simply declares no assets.

use std::fs;

use serde::Deserialize;

use crate::{Error, Options};

#[derive(Deserialize, Default)]
struct Manifest {
    #[serde(default)]
    package: Package,
}

#[derive(Deserialize, Default)]
struct Package {
    #[serde(default)]
    metadata: Metadata,
}

#[derive(Deserialize, Default)]
struct Metadata {
    #[serde(default)]
    resgen: AssetDeclarations,
}

#[derive(Deserialize, Default)]
struct AssetDeclarations {
    #[serde(default)]
    assets: Vec<String>,
}

/// Declared asset paths, in manifest order. Unreadable or unparsable
/// manifests are fatal for the run.
pub fn asset_patterns(opts: &mut Options) -> Result<Vec<String>, Error> {
    let path = opts.manifest_file_path();
    let text = fs::read_to_string(&path).map_err(|source| Error::ManifestRead {
        path: path.clone(),
        source,
    })?;
    let manifest: Manifest =
        toml::from_str(&text).map_err(|source| Error::ManifestParse { path, source })?;
    Ok(manifest.package.metadata.resgen.assets)
}
