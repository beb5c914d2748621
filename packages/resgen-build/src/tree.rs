//! Namespace trees mirroring directory structure, and the per-category
//! constant class generators built on top of them.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    AssetRef,
    asset::Category,
    codegen::{GeneratedFragment, Item},
    ident::{self, Case},
};

/// One level of generated module nesting. Children are keyed by the raw
/// directory segment; identifiers are assigned in a separate pass so that
/// collisions resolve against the full sibling set.
#[derive(Default)]
pub struct NamespaceNode {
    children: BTreeMap<String, NamespaceNode>,
    leaves: BTreeMap<String, AssetRef>,
}

impl NamespaceNode {
    /// Places one asset at its directory position. The leading directory
    /// segment is the declared asset root and does not open a namespace
    /// level of its own. Leaves are keyed by the full original path:
    /// distinct roots can contribute equal remaining paths to one node, and
    /// every discovered asset must survive as its own constant.
    pub fn insert(&mut self, asset: &AssetRef) {
        let mut node = self;
        for segment in asset.dir_segments().skip(1) {
            node = node.children.entry(segment.to_string()).or_default();
        }
        node.leaves.insert(asset.path().to_string(), asset.clone());
    }

    /// Renders this level into items: constants first in lexicographic order
    /// of the full asset path, nested modules after in order of the raw
    /// segment. Leaf constants and child modules live in different Rust
    /// namespaces and different cases, so they are disambiguated
    /// independently.
    pub fn items(&self) -> Vec<Item> {
        let mut items = Vec::new();

        let mut used = BTreeSet::new();
        for asset in self.leaves.values() {
            let name = ident::disambiguate(&mut used, ident::sanitize(asset.stem(), Case::UpperSnake));
            items.push(Item::Const {
                name,
                value: asset.path().to_string(),
            });
        }

        let mut used = BTreeSet::new();
        for (raw, child) in &self.children {
            let name = ident::disambiguate(&mut used, ident::sanitize(raw, Case::Snake));
            items.push(Item::Module {
                name,
                items: child.items(),
            });
        }
        items
    }
}

/// Builds the constant class for one asset category. The two category
/// predicates are disjoint, so no asset is claimed twice and the top-level
/// module names never collide.
pub struct CategoryGenerator {
    class_name: &'static str,
    category: Category,
}

impl CategoryGenerator {
    pub fn images() -> Self {
        Self {
            class_name: "images",
            category: Category::Image,
        }
    }

    pub fn vectors() -> Self {
        Self {
            class_name: "vectors",
            category: Category::Vector,
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// An empty category still yields a valid empty module, so the generated
    /// file compiles no matter what was discovered.
    pub fn generate(&self, assets: &BTreeSet<AssetRef>) -> GeneratedFragment {
        let mut root = NamespaceNode::default();
        for asset in assets {
            if asset.category() == self.category {
                root.insert(asset);
            }
        }
        GeneratedFragment {
            symbol: self.class_name().to_string(),
            item: Item::Module {
                name: self.class_name().to_string(),
                items: root.items(),
            },
        }
    }
}
