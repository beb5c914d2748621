//! In-memory representation of the generated module and the emitter that
//! serializes it. Keeping the structure explicit (rather than concatenating
//! strings inside the generators) lets nesting and ordering be tested apart
//! from textual details.

const INDENT: &str = "    ";

/// One generated item. `Verbatim` carries pre-formed lines for surfaces that
/// are not plain constants (the strings accessor type); the renderer still
/// owns their indentation.
pub enum Item {
    Module { name: String, items: Vec<Item> },
    Const { name: String, value: String },
    Verbatim(Vec<String>),
}

impl Item {
    fn render(&self, out: &mut String, depth: usize) {
        let pad = INDENT.repeat(depth);
        match self {
            Item::Const { name, value } => {
                out.push_str(&format!("{pad}pub const {name}: &str = {value:?};\n"));
            }
            Item::Module { name, items } => {
                if items.is_empty() {
                    out.push_str(&format!("{pad}pub mod {name} {{}}\n"));
                } else {
                    out.push_str(&format!("{pad}pub mod {name} {{\n"));
                    for item in items {
                        item.render(out, depth + 1);
                    }
                    out.push_str(&format!("{pad}}}\n"));
                }
            }
            Item::Verbatim(lines) => {
                for line in lines {
                    if line.is_empty() {
                        out.push('\n');
                    } else {
                        out.push_str(&format!("{pad}{line}\n"));
                    }
                }
            }
        }
    }
}

/// A self-contained unit of generated source: the item tree plus the symbol
/// the rest of the module refers to it by.
pub struct GeneratedFragment {
    pub symbol: String,
    pub item: Item,
}

impl GeneratedFragment {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.item.render(&mut out, 0);
        out
    }
}

/// Assembles the final module text in fixed order: header, the conditional
/// strings re-export, category fragments, then the strings fragment. The
/// output carries no timestamps, so identical inputs reproduce identical
/// bytes.
pub fn emit(categories: &[GeneratedFragment], strings: Option<&GeneratedFragment>) -> String {
    if categories.is_empty() && strings.is_none() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("// GENERATED CODE - DO NOT MODIFY BY HAND\n");
    out.push_str(concat!(
        "// Generated by resgen-build ",
        env!("CARGO_PKG_VERSION"),
        "\n"
    ));
    out.push('\n');

    if let Some(strings) = strings {
        out.push_str(&format!(
            "pub use self::{}::{{Locale, Strings}};\n\n",
            strings.symbol
        ));
    }

    for fragment in categories.iter().chain(strings) {
        out.push_str("#[allow(dead_code)]\n");
        out.push_str(&fragment.render());
        out.push('\n');
    }
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}
