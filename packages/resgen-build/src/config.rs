use std::{
    collections::HashSet,
    env, fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;

pub const CONFIG_FILE: &str = "resgen.toml";
pub const MANIFEST_FILE: &str = "Cargo.toml";
pub const OUTPUT_FILE: &str = "assets.rs";
pub const DEFAULT_LOCALE: &str = "en";

/// Source root under which a non-default output path must live.
const SOURCE_ROOT: &str = "src";

/// Invocation context for one generation pass: where inputs live, where the
/// generated module goes, and whether to emit cargo build directives.
pub struct Options {
    config_file: PathBuf,
    manifest_file: PathBuf,
    input_dir: PathBuf,
    output_dir: PathBuf,
    emit_cargo: bool,
    seen: HashSet<PathBuf>,
}

impl Options {
    /// Defaults for use from a build script: inputs relative to the crate
    /// root, output into `OUT_DIR`, cargo directives on stdout.
    pub fn cargo_defaults() -> Result<Self> {
        Ok(Self {
            config_file: PathBuf::from(CONFIG_FILE),
            manifest_file: PathBuf::from(MANIFEST_FILE),
            input_dir: env::current_dir()?,
            output_dir: PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR not defined")),
            emit_cargo: true,
            seen: HashSet::new(),
        })
    }

    /// Explicit directories, no cargo directives. Used by tests and by hosts
    /// driving the generator outside a build script.
    pub fn from_dirs(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_file: PathBuf::from(CONFIG_FILE),
            manifest_file: PathBuf::from(MANIFEST_FILE),
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            emit_cargo: false,
            seen: HashSet::new(),
        }
    }

    pub(crate) fn manifest_file_path(&mut self) -> PathBuf {
        self.input_path(&self.manifest_file.clone())
    }

    /// Contents of the config file, if present. Absence is not an error.
    pub(crate) fn read_config(&mut self) -> Option<String> {
        let path = self.input_path(&self.config_file.clone());
        fs::read_to_string(path).ok()
    }

    pub(crate) fn input_path(&mut self, path: &Path) -> PathBuf {
        let result = self.input_dir.join(path);
        if self.emit_cargo && self.seen.insert(result.clone()) {
            println!("cargo:rerun-if-changed={}", result.display());
        }
        result
    }

    /// Redirect output when the config chose a path under the source root.
    pub(crate) fn apply_output(&mut self, generator: &GeneratorOptions) {
        if let Some(path) = &generator.output {
            self.output_dir = self.input_dir.join(path);
        }
    }

    pub(crate) fn output_path(&self, file: &str) -> PathBuf {
        self.output_dir.join(file)
    }

    pub(crate) fn output_file(&self, file: &str) -> std::io::Result<BufWriter<fs::File>> {
        fs::create_dir_all(&self.output_dir)?;
        let file = fs::File::create(self.output_dir.join(file))?;
        Ok(BufWriter::new(file))
    }

    pub(crate) fn warn(&self, message: &str) {
        if self.emit_cargo {
            println!("cargo:warning=resgen: {message}");
        } else {
            eprintln!("warning: resgen: {message}");
        }
    }
}

/// Generator options resolved from the optional config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Output directory override, relative to the project root. `None` means
    /// the canonical default (`OUT_DIR` under cargo).
    pub output: Option<PathBuf>,
    pub generate_strings: bool,
    /// Declared locales, order preserved, duplicates removed. Never empty.
    pub supported_locales: Vec<String>,
    /// Always a member of `supported_locales`.
    pub fallback_locale: String,
}

impl GeneratorOptions {
    /// Resolve options from raw config text. Never fails: absent, empty or
    /// unparsable input falls back to defaults, and every recognized key is
    /// read independently with its own default, so one malformed or
    /// wrongly-typed key cannot reset the others. Unknown keys are ignored.
    pub fn resolve(raw: Option<&str>) -> Self {
        let table: toml::Table = raw
            .and_then(|text| text.parse().ok())
            .unwrap_or_default();

        let output = table
            .get("path")
            .and_then(|v| v.as_str())
            .map(PathBuf::from);
        let generate_strings = table
            .get("generate_strings")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let mut supported_locales: Vec<String> = Vec::new();
        let declared = table
            .get("supported_locales")
            .and_then(|v| v.as_array())
            .into_iter()
            .flatten()
            .filter_map(|v| v.as_str());
        for locale in declared {
            let locale = locale.trim().to_string();
            if !locale.is_empty() && !supported_locales.contains(&locale) {
                supported_locales.push(locale);
            }
        }
        if supported_locales.is_empty() {
            supported_locales.push(DEFAULT_LOCALE.to_string());
        }

        let fallback_locale = table
            .get("fallback_locale")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map_or_else(|| supported_locales[0].clone(), str::to_string);
        // A fallback outside the declared set would make the generated
        // lookup reference an untracked locale; track it implicitly.
        if !supported_locales.contains(&fallback_locale) {
            supported_locales.push(fallback_locale.clone());
        }

        Self {
            output,
            generate_strings,
            supported_locales,
            fallback_locale,
        }
    }

    /// Whether the configured output location is acceptable: either the
    /// canonical default, or nested under the source root.
    pub fn is_path_valid(&self) -> bool {
        match &self.output {
            None => true,
            Some(path) => path.starts_with(SOURCE_ROOT),
        }
    }
}

/// Flushes the assembled module to disk. An empty body is a silent no-op.
pub(crate) fn write_output(opts: &Options, text: &str) -> Result<Option<PathBuf>, crate::Error> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let path = opts.output_path(OUTPUT_FILE);
    let mut file = opts.output_file(OUTPUT_FILE).map_err(|source| {
        crate::Error::OutputWrite {
            path: path.clone(),
            source,
        }
    })?;
    file.write_all(text.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|source| crate::Error::OutputWrite {
            path: path.clone(),
            source,
        })?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_config_yields_defaults() {
        let opts = GeneratorOptions::resolve(None);
        assert_eq!(opts.output, None);
        assert!(!opts.generate_strings);
        assert_eq!(opts.supported_locales, [DEFAULT_LOCALE]);
        assert_eq!(opts.fallback_locale, DEFAULT_LOCALE);
        assert!(opts.is_path_valid());
    }

    #[test]
    fn empty_and_malformed_config_yield_defaults() {
        assert_eq!(
            GeneratorOptions::resolve(Some("")),
            GeneratorOptions::resolve(None)
        );
        assert_eq!(
            GeneratorOptions::resolve(Some("not = [valid")),
            GeneratorOptions::resolve(None)
        );
    }

    #[test]
    fn keys_resolve_independently() {
        let opts = GeneratorOptions::resolve(Some("generate_strings = true"));
        assert!(opts.generate_strings);
        assert_eq!(opts.supported_locales, [DEFAULT_LOCALE]);

        let opts = GeneratorOptions::resolve(Some("supported_locales = [\"fr\", \"de\"]"));
        assert!(!opts.generate_strings);
        // Fallback defaults to the first declared locale.
        assert_eq!(opts.fallback_locale, "fr");
    }

    #[test]
    fn a_bad_typed_key_does_not_reset_the_others() {
        let opts = GeneratorOptions::resolve(Some(
            "generate_strings = \"yes\"\npath = \"src/gen\"\nsupported_locales = [\"fr\"]\n",
        ));
        assert!(!opts.generate_strings);
        assert_eq!(opts.output, Some(PathBuf::from("src/gen")));
        assert_eq!(opts.supported_locales, ["fr"]);

        let opts = GeneratorOptions::resolve(Some(
            "supported_locales = \"fr\"\ngenerate_strings = true\n",
        ));
        assert_eq!(opts.supported_locales, [DEFAULT_LOCALE]);
        assert!(opts.generate_strings);
    }

    #[test]
    fn non_string_locale_entries_are_skipped() {
        let opts = GeneratorOptions::resolve(Some("supported_locales = [\"en\", 3, \"fr\"]"));
        assert_eq!(opts.supported_locales, ["en", "fr"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let opts = GeneratorOptions::resolve(Some("unknown_key = 3\npath = \"src/gen\""));
        assert_eq!(opts.output, Some(PathBuf::from("src/gen")));
    }

    #[test]
    fn fallback_locale_is_tracked_implicitly() {
        let opts = GeneratorOptions::resolve(Some(
            "supported_locales = [\"fr\", \"de\"]\nfallback_locale = \"en\"",
        ));
        assert_eq!(opts.supported_locales, ["fr", "de", "en"]);
        assert_eq!(opts.fallback_locale, "en");
    }

    #[test]
    fn duplicate_locales_collapse() {
        let opts = GeneratorOptions::resolve(Some("supported_locales = [\"en\", \"en\", \"fr\"]"));
        assert_eq!(opts.supported_locales, ["en", "fr"]);
    }

    #[test]
    fn output_path_validity() {
        let valid = GeneratorOptions::resolve(Some("path = \"src/generated\""));
        assert!(valid.is_path_valid());

        let invalid = GeneratorOptions::resolve(Some("path = \"build/out\""));
        assert!(!invalid.is_path_valid());

        let sneaky = GeneratorOptions::resolve(Some("path = \"srcdir/out\""));
        assert!(!sneaky.is_path_valid());
    }
}
