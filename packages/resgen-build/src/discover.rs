//! Expansion of declared asset patterns into the discovered asset set.

use std::{collections::BTreeSet, fs, path::Path};

use crate::{AssetRef, Options};

/// A normalized asset declaration. Directory-style declarations (trailing
/// separator) match everything under the directory; anything else is an
/// exact file match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Pattern {
    Exact(String),
    Subtree(String),
}

fn normalize(raw: &str) -> Option<Pattern> {
    let mut trimmed = raw.trim();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    if trimmed.is_empty() || trimmed == "/" {
        return None;
    }
    match trimmed.strip_suffix('/') {
        Some(dir) => {
            let dir = dir.trim_end_matches('/');
            if dir.is_empty() {
                None
            } else {
                Some(Pattern::Subtree(dir.to_string()))
            }
        }
        None => Some(Pattern::Exact(trimmed.to_string())),
    }
}

/// Expands declared patterns against the files actually present under the
/// project root. Patterns are deduplicated before expansion; matches from
/// all patterns are unioned, so overlapping declarations cannot produce
/// duplicate assets. Hidden files and files without a meaningful name
/// component are dropped.
pub fn discover(opts: &mut Options, declared: &[String]) -> BTreeSet<AssetRef> {
    let patterns: BTreeSet<Pattern> = declared.iter().filter_map(|raw| normalize(raw)).collect();

    let mut assets = BTreeSet::new();
    for pattern in &patterns {
        match pattern {
            Pattern::Exact(rel) => {
                let abs = opts.input_path(Path::new(rel));
                if abs.is_file() {
                    admit(&mut assets, rel);
                } else {
                    opts.warn(&format!("declared asset `{rel}` not found"));
                }
            }
            Pattern::Subtree(rel) => {
                let abs = opts.input_path(Path::new(rel));
                if abs.is_dir() {
                    walk(&mut assets, opts, &abs, rel);
                } else {
                    opts.warn(&format!("declared asset directory `{rel}/` not found"));
                }
            }
        }
    }
    assets
}

fn walk(assets: &mut BTreeSet<AssetRef>, opts: &mut Options, dir: &Path, rel: &str) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        // Dot-directories (`.git` and friends) hold no declarable assets.
        if name.starts_with('.') {
            continue;
        }
        let child_rel = format!("{rel}/{name}");
        let path = entry.path();
        if path.is_dir() {
            walk(assets, opts, &path, &child_rel);
        } else {
            opts.input_path(Path::new(&child_rel));
            admit(assets, &child_rel);
        }
    }
}

fn admit(assets: &mut BTreeSet<AssetRef>, rel: &str) {
    let asset = AssetRef::new(rel);
    // Hidden artifacts have no name component left once the leading dot
    // is accounted for; they never become constants.
    if asset.file_name().starts_with('.') || asset.stem().is_empty() {
        return;
    }
    assets.insert(asset);
}
