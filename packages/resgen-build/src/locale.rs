//! Per-locale string tables and the generated locale-aware accessor type.
//!
//! Accessors are keyed on the fallback locale's table. The fallback wiring is
//! baked into the emitted `match` arms because the active locale is only
//! known at application runtime, not at generation time.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    Error, GeneratorOptions, Options,
    codegen::{GeneratedFragment, Item},
    ident::{self, Case},
};

const STRINGS_DIR: &str = "assets/strings";
const CLASS_NAME: &str = "strings";

pub type Table = BTreeMap<String, String>;

/// Reads one JSON table per supported locale. Reads run in parallel and all
/// complete before the merge step; any missing or malformed table fails the
/// whole pass.
pub fn load_tables(
    opts: &mut Options,
    generator: &GeneratorOptions,
) -> Result<BTreeMap<String, Table>, Error> {
    let sources: Vec<(String, PathBuf)> = generator
        .supported_locales
        .iter()
        .map(|locale| {
            let rel = format!("{STRINGS_DIR}/{locale}.json");
            (locale.clone(), opts.input_path(Path::new(&rel)))
        })
        .collect();

    sources
        .into_par_iter()
        .map(|(locale, path)| {
            let text = fs::read_to_string(&path).map_err(|source| Error::LocaleRead {
                locale: locale.clone(),
                path: path.clone(),
                source,
            })?;
            let table: Table = serde_json::from_str(&text).map_err(|source| Error::LocaleParse {
                locale: locale.clone(),
                path,
                source,
            })?;
            Ok((locale, table))
        })
        .collect()
}

/// Keys declared in non-fallback tables that the fallback table does not
/// know. They get no accessor; the caller reports them.
pub fn orphan_keys(tables: &BTreeMap<String, Table>, generator: &GeneratorOptions) -> Vec<String> {
    let Some(fallback) = tables.get(&generator.fallback_locale) else {
        return Vec::new();
    };
    let mut orphans = Vec::new();
    for locale in &generator.supported_locales {
        if *locale == generator.fallback_locale {
            continue;
        }
        let Some(table) = tables.get(locale) else {
            continue;
        };
        for key in table.keys() {
            if !fallback.contains_key(key) {
                orphans.push(format!(
                    "key `{key}` in locale `{locale}` is missing from fallback locale \
                     `{}` and gets no accessor",
                    generator.fallback_locale
                ));
            }
        }
    }
    orphans
}

/// Emits the `Locale` enum and the `Strings` accessor type. One method per
/// fallback-locale key; each method matches on the runtime locale with the
/// fallback value as the wildcard arm.
pub fn generate(
    tables: &BTreeMap<String, Table>,
    generator: &GeneratorOptions,
) -> GeneratedFragment {
    let variants: Vec<(String, String)> = {
        let mut used = BTreeSet::new();
        generator
            .supported_locales
            .iter()
            .map(|locale| {
                let variant = ident::disambiguate(&mut used, ident::sanitize(locale, Case::Pascal));
                (locale.clone(), variant)
            })
            .collect()
    };
    let variant_of = |locale: &str| -> &str {
        variants
            .iter()
            .find(|(code, _)| code == locale)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    };

    let mut lines: Vec<String> = Vec::new();
    lines.push("#[derive(Clone, Copy, Debug, PartialEq, Eq)]".to_string());
    lines.push("pub enum Locale {".to_string());
    for (_, variant) in &variants {
        lines.push(format!("    {variant},"));
    }
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("impl Locale {".to_string());
    lines.push("    pub fn from_tag(tag: &str) -> Option<Self> {".to_string());
    lines.push("        match tag {".to_string());
    for (code, variant) in &variants {
        lines.push(format!("            {code:?} => Some(Self::{variant}),"));
    }
    lines.push("            _ => None,".to_string());
    lines.push("        }".to_string());
    lines.push("    }".to_string());
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("pub struct Strings {".to_string());
    lines.push("    locale: Locale,".to_string());
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("impl Strings {".to_string());
    lines.push("    pub const fn of(locale: Locale) -> Self {".to_string());
    lines.push("        Self { locale }".to_string());
    lines.push("    }".to_string());

    let fallback_table = tables.get(&generator.fallback_locale);
    let empty = Table::new();
    let fallback_table = fallback_table.unwrap_or(&empty);

    let mut used = BTreeSet::new();
    used.insert("of".to_string());
    for (key, fallback_value) in fallback_table {
        let method = ident::disambiguate(&mut used, ident::sanitize(key, Case::Snake));
        lines.push(String::new());
        lines.push(format!("    pub fn {method}(&self) -> &'static str {{"));
        lines.push("        match self.locale {".to_string());
        for locale in &generator.supported_locales {
            if *locale == generator.fallback_locale {
                continue;
            }
            if let Some(value) = tables.get(locale).and_then(|t| t.get(key)) {
                lines.push(format!(
                    "            Locale::{} => {value:?},",
                    variant_of(locale)
                ));
            }
        }
        lines.push(format!("            _ => {fallback_value:?},"));
        lines.push("        }".to_string());
        lines.push("    }".to_string());
    }
    lines.push("}".to_string());

    GeneratedFragment {
        symbol: CLASS_NAME.to_string(),
        item: Item::Module {
            name: CLASS_NAME.to_string(),
            items: vec![Item::Verbatim(lines)],
        },
    }
}
