//! Derivation of legal, unique, deterministic Rust identifiers from raw
//! path segments and string keys.

use std::collections::BTreeSet;

use convert_case::{Boundary, Casing};

pub use convert_case::Case;

/// Words that cannot serve as module or method names.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try",
    "type", "unsafe", "use", "where", "while",
];

/// Turns one raw segment into a legal identifier in the requested case.
///
/// Identifier-illegal characters become word boundaries, digit-leading
/// segments get a letter prefix, and keywords get a trailing underscore.
/// Pure and total: the same input always produces the same output.
pub fn sanitize(raw: &str, case: Case) -> String {
    let mut cleaned = String::with_capacity(raw.len() + 2);
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            cleaned.push(c);
        } else if !cleaned.ends_with(' ') {
            cleaned.push(' ');
        }
    }
    let cleaned = cleaned.trim();
    let cleaned = if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        format!("a {cleaned}")
    } else if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned.to_string()
    };

    let mut ident = cleaned
        .with_boundaries(&[Boundary::Space, Boundary::LowerUpper])
        .to_case(case);
    // `Self` is the one reserved form casing can produce from a non-keyword.
    if KEYWORDS.contains(&ident.as_str()) || ident == "Self" {
        ident.push('_');
    }
    ident
}

/// Claims a unique name within a sibling set. The first claimant of a
/// sanitized name keeps it; later claimants receive a numeric suffix.
/// Callers iterate siblings in lexicographic order of the raw segment, so
/// the assignment is total and independent of discovery order.
pub fn disambiguate(used: &mut BTreeSet<String>, base: String) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}_{n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Namespace path and leaf identifier for one asset, without sibling
/// context. Collision resolution happens per sibling set in the tree pass.
pub fn name_for(asset: &crate::AssetRef) -> (Vec<String>, String) {
    let namespace = asset
        .dir_segments()
        .skip(1)
        .map(|seg| sanitize(seg, Case::Snake))
        .collect();
    (namespace, sanitize(asset.stem(), Case::UpperSnake))
}
