use std::fs;
use std::path::Path;

use resgen_build::{Options, Outcome, generate};

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn manifest_with_assets(assets: &[&str]) -> String {
    let list = assets
        .iter()
        .map(|a| format!("{a:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n\n\
         [package.metadata.resgen]\nassets = [{list}]\n"
    )
}

#[test]
fn basic_assets_produce_nested_constants() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "Cargo.toml",
        &manifest_with_assets(&["images/icon.png", "images/sub/logo.png", "icons/arrow.svg"]),
    );
    write(root, "images/icon.png", "");
    write(root, "images/sub/logo.png", "");
    write(root, "icons/arrow.svg", "");

    let out = root.join("out");
    let outcome = generate(Options::from_dirs(root, &out)).unwrap();
    assert_eq!(outcome, Outcome::Written(out.join("assets.rs")));

    let text = fs::read_to_string(out.join("assets.rs")).unwrap();
    assert!(text.starts_with("// GENERATED CODE - DO NOT MODIFY BY HAND\n"));
    assert!(text.contains("pub const ICON: &str = \"images/icon.png\";"));
    assert!(text.contains("pub mod sub {"));
    assert!(text.contains("pub const LOGO: &str = \"images/sub/logo.png\";"));
    assert!(text.contains("pub const ARROW: &str = \"icons/arrow.svg\";"));
    assert!(!text.contains("Strings"));
}

#[test]
fn empty_project_still_compiles_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "Cargo.toml", "[package]\nname = \"demo\"\n");

    let out = root.join("out");
    let outcome = generate(Options::from_dirs(root, &out)).unwrap();
    assert_eq!(outcome, Outcome::Written(out.join("assets.rs")));

    let text = fs::read_to_string(out.join("assets.rs")).unwrap();
    assert!(text.contains("pub mod images {}"));
    assert!(text.contains("pub mod vectors {}"));
}

#[test]
fn locale_fallback_is_baked_into_the_accessor() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "Cargo.toml", "[package]\nname = \"demo\"\n");
    write(
        root,
        "resgen.toml",
        "generate_strings = true\nsupported_locales = [\"en\", \"fr\"]\nfallback_locale = \"en\"\n",
    );
    write(
        root,
        "assets/strings/en.json",
        "{\"greeting\": \"Hello\", \"farewell\": \"Goodbye\"}",
    );
    write(root, "assets/strings/fr.json", "{\"farewell\": \"Au revoir\"}");

    let out = root.join("out");
    generate(Options::from_dirs(root, &out)).unwrap();
    let text = fs::read_to_string(out.join("assets.rs")).unwrap();

    assert!(text.contains("pub use self::strings::{Locale, Strings};"));
    assert!(text.contains("pub fn farewell(&self) -> &'static str {"));
    assert!(text.contains("Locale::Fr => \"Au revoir\","));
    // `fr` lacks `greeting`: its lookup must resolve to the fallback value.
    let greeting = text.split("pub fn greeting").nth(1).unwrap();
    let body = &greeting[..greeting.find('}').unwrap_or(greeting.len())];
    assert!(!body.contains("Locale::Fr"));
    assert!(text.contains("_ => \"Hello\","));
}

#[test]
fn assets_from_both_roots_keep_their_constants() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "Cargo.toml",
        &manifest_with_assets(&["images/", "photos/"]),
    );
    write(root, "images/icon.png", "");
    write(root, "photos/icon.png", "");

    let out = root.join("out");
    generate(Options::from_dirs(root, &out)).unwrap();
    let text = fs::read_to_string(out.join("assets.rs")).unwrap();
    assert!(text.contains("pub const ICON: &str = \"images/icon.png\";"));
    assert!(text.contains("pub const ICON_2: &str = \"photos/icon.png\";"));
}

#[test]
fn missing_locale_table_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "Cargo.toml", "[package]\nname = \"demo\"\n");
    write(
        root,
        "resgen.toml",
        "generate_strings = true\nsupported_locales = [\"en\", \"fr\"]\n",
    );
    write(root, "assets/strings/en.json", "{}");

    let out = root.join("out");
    assert!(generate(Options::from_dirs(root, &out)).is_err());
    assert!(!out.join("assets.rs").exists());
}

#[test]
fn invalid_output_path_skips_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "Cargo.toml", "[package]\nname = \"demo\"\n");
    write(root, "resgen.toml", "path = \"build/out\"\n");

    let out = root.join("out");
    let outcome = generate(Options::from_dirs(root, &out)).unwrap();
    assert_eq!(outcome, Outcome::SkippedInvalidPath);
    assert!(!out.join("assets.rs").exists());
    assert!(!root.join("build/out/assets.rs").exists());
}

#[test]
fn configured_source_path_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "Cargo.toml", "[package]\nname = \"demo\"\n");
    write(root, "resgen.toml", "path = \"src/generated\"\n");

    let outcome = generate(Options::from_dirs(root, root.join("out"))).unwrap();
    assert_eq!(
        outcome,
        Outcome::Written(root.join("src/generated/assets.rs"))
    );
    assert!(root.join("src/generated/assets.rs").exists());
}

#[test]
fn missing_manifest_is_a_build_failure() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let outcome = generate(Options::from_dirs(root, root.join("out")));
    assert!(outcome.is_err());
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "Cargo.toml",
        &manifest_with_assets(&["images/", "icons/arrow.svg"]),
    );
    write(root, "images/my-icon.png", "");
    write(root, "images/my_icon.png", "");
    write(root, "images/deep/nest/art.webp", "");
    write(root, "icons/arrow.svg", "");
    write(
        root,
        "resgen.toml",
        "generate_strings = true\nsupported_locales = [\"en\", \"fr\"]\n",
    );
    write(root, "assets/strings/en.json", "{\"greeting\": \"Hello\"}");
    write(root, "assets/strings/fr.json", "{\"greeting\": \"Bonjour\"}");

    let out = root.join("out");
    generate(Options::from_dirs(root, &out)).unwrap();
    let first = fs::read(out.join("assets.rs")).unwrap();
    generate(Options::from_dirs(root, &out)).unwrap();
    let second = fs::read(out.join("assets.rs")).unwrap();
    assert_eq!(first, second);

    let text = String::from_utf8(first).unwrap();
    // Sanitized-away differences must not collide silently.
    assert!(text.contains("pub const MY_ICON: &str = \"images/my-icon.png\";"));
    assert!(text.contains("pub const MY_ICON_2: &str = \"images/my_icon.png\";"));
}
