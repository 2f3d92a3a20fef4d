use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

use serde_json::Value;

/// Catalog every other catalog is checked against; also the default locale.
const REFERENCE_CATALOG: &str = "locales/it.json";
const OTHER_CATALOGS: &[&str] = &["locales/en.json"];

fn main() {
    println!("cargo:rerun-if-changed={REFERENCE_CATALOG}");
    for path in OTHER_CATALOGS {
        println!("cargo:rerun-if-changed={path}");
    }

    let reference = leaf_keys(REFERENCE_CATALOG);

    // Every catalog must carry exactly the reference key set.
    for path in OTHER_CATALOGS {
        let keys = leaf_keys(path);
        let missing: Vec<_> = reference.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&reference).collect();
        if !missing.is_empty() || !extra.is_empty() {
            panic!("{path} is out of sync with {REFERENCE_CATALOG}: missing {missing:?}, extra {extra:?}");
        }
    }

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("translation_keys.rs");
    std::fs::write(&dest, render_keys(&reference)).expect("Failed to write translation keys");
}

fn leaf_keys(path: &str) -> BTreeSet<String> {
    let content = std::fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    let root: Value =
        serde_json::from_str(&content).unwrap_or_else(|e| panic!("Invalid JSON in {path}: {e}"));

    let mut keys = BTreeSet::new();
    collect(&root, String::new(), path, &mut keys);
    keys
}

fn collect(value: &Value, prefix: String, path: &str, keys: &mut BTreeSet<String>) {
    match value {
        Value::String(_) => {
            keys.insert(prefix);
        }
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect(child, key, path, keys);
            }
        }
        other => panic!("{path}: `{prefix}` must be a string or an object, found {other}"),
    }
}

fn variant_name(key: &str) -> String {
    key.split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn render_keys(keys: &BTreeSet<String>) -> String {
    let mut variants = BTreeSet::new();
    let mut out = String::new();

    out.push_str("/// Translation keys present in every bundled catalog.\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
    out.push_str("pub enum Key {\n");
    for key in keys {
        let variant = variant_name(key);
        if !variants.insert(variant.clone()) {
            panic!("Translation key `{key}` collides with another key as `{variant}`");
        }
        let _ = writeln!(out, "    /// `{key}`\n    {variant},");
    }
    out.push_str("}\n\n");

    out.push_str("impl Key {\n");
    out.push_str("    /// All keys in catalog order\n");
    out.push_str("    pub const ALL: &'static [Key] = &[\n");
    for key in keys {
        let _ = writeln!(out, "        Key::{},", variant_name(key));
    }
    out.push_str("    ];\n\n");
    out.push_str("    /// Dotted catalog path for this key\n");
    out.push_str("    pub const fn as_str(self) -> &'static str {\n        match self {\n");
    for key in keys {
        let _ = writeln!(out, "            Key::{} => \"{key}\",", variant_name(key));
    }
    out.push_str("        }\n    }\n}\n");

    out
}
