//! Build-time generator of typed asset accessors.
//!
//! Reads the host project's declared assets and optional `resgen.toml`, and
//! writes a single `assets.rs` module with one constant per discovered file
//! plus, when enabled, a locale-aware string accessor. Intended to run from
//! a build script:
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     resgen_build::generate(resgen_build::Options::cargo_defaults()?)?;
//!     Ok(())
//! }
//! ```

mod asset;
mod codegen;
mod config;
mod discover;
mod error;
mod ident;
mod locale;
mod manifest;
mod tree;

use std::path::PathBuf;

use anyhow::Result;

pub use asset::{AssetRef, Category};
pub use config::{GeneratorOptions, Options};
pub use error::Error;
pub use ident::name_for;

/// How a generation pass ended. Skips are deliberate non-failures: a
/// misconfigured consumer logs a diagnostic instead of breaking the build.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    SkippedInvalidPath,
    SkippedEmpty,
}

pub fn generate(mut opts: Options) -> Result<Outcome> {
    let raw = opts.read_config();
    if let Some(text) = raw.as_deref()
        && !text.trim().is_empty()
        && toml::from_str::<toml::Value>(text).is_err()
    {
        opts.warn("config file is not valid TOML; falling back to default options");
    }
    let generator = GeneratorOptions::resolve(raw.as_deref());

    if !generator.is_path_valid() {
        let shown = generator.output.clone().unwrap_or_default();
        opts.warn(&format!(
            "configured output path `{}` is neither the default nor under `src/`; \
             skipping generation",
            shown.display()
        ));
        return Ok(Outcome::SkippedInvalidPath);
    }
    opts.apply_output(&generator);

    let patterns = manifest::asset_patterns(&mut opts)?;
    let assets = discover::discover(&mut opts, &patterns);

    let categories = [
        tree::CategoryGenerator::images().generate(&assets),
        tree::CategoryGenerator::vectors().generate(&assets),
    ];

    let strings = if generator.generate_strings {
        let tables = locale::load_tables(&mut opts, &generator)?;
        for orphan in locale::orphan_keys(&tables, &generator) {
            opts.warn(&orphan);
        }
        Some(locale::generate(&tables, &generator))
    } else {
        None
    };

    let text = codegen::emit(&categories, strings.as_ref());
    match config::write_output(&opts, &text)? {
        Some(path) => Ok(Outcome::Written(path)),
        None => Ok(Outcome::SkippedEmpty),
    }
}
