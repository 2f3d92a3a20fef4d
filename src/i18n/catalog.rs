//! Catalogs - nested key/value translation tables
//!
//! Each locale ships a JSON document under `locales/` where leaves are strings
//! and objects group related keys. Lookups walk the tree one dotted segment at
//! a time.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use ahash::RandomState;
use rust_embed::RustEmbed;
use serde::Deserialize;

use super::Locale;
use crate::error::{Error, Result};

/// Catalog files bundled at compile time
#[derive(RustEmbed)]
#[folder = "locales"]
struct CatalogAssets;

/// A catalog node: either a translated string or a group of nodes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CatalogEntry {
    Text(String),
    Group(HashMap<String, CatalogEntry, RandomState>),
}

/// Translation table for one locale; immutable once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    root: HashMap<String, CatalogEntry, RandomState>,
}

impl Catalog {
    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let root = serde_json::from_str(json)?;
        Ok(Self { root })
    }

    /// Walk a dotted path; `None` as soon as a segment is missing
    pub fn entry(&self, key: &str) -> Option<&CatalogEntry> {
        let mut segments = key.split('.');
        let mut node = self.root.get(segments.next()?)?;

        for segment in segments {
            match node {
                CatalogEntry::Group(children) => node = children.get(segment)?,
                CatalogEntry::Text(_) => return None,
            }
        }

        Some(node)
    }

    /// Resolve a dotted path to a string leaf
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.entry(key)? {
            CatalogEntry::Text(text) => Some(text),
            CatalogEntry::Group(_) => None,
        }
    }
}

/// One catalog per supported locale
#[derive(Debug, Clone)]
pub struct Catalogs {
    it: Arc<Catalog>,
    en: Arc<Catalog>,
}

static BUNDLED: OnceLock<Catalogs> = OnceLock::new();

impl Catalogs {
    pub fn new(it: Catalog, en: Catalog) -> Self {
        Self {
            it: Arc::new(it),
            en: Arc::new(en),
        }
    }

    /// Catalogs compiled into the binary, parsed once per process
    pub fn bundled() -> Result<Self> {
        if let Some(catalogs) = BUNDLED.get() {
            return Ok(catalogs.clone());
        }

        let catalogs = Self::new(load_bundled(Locale::It)?, load_bundled(Locale::En)?);
        Ok(BUNDLED.get_or_init(|| catalogs).clone())
    }

    /// Catalog for a locale
    pub fn get(&self, locale: Locale) -> Arc<Catalog> {
        match locale {
            Locale::It => self.it.clone(),
            Locale::En => self.en.clone(),
        }
    }
}

fn load_bundled(locale: Locale) -> Result<Catalog> {
    let file_name = format!("{}.json", locale.code());
    let file = CatalogAssets::get(&file_name).ok_or_else(|| Error::Catalog {
        locale: locale.code().to_string(),
        message: format!("{file_name} is not bundled"),
    })?;

    let json = std::str::from_utf8(&file.data).map_err(|e| Error::Catalog {
        locale: locale.code().to_string(),
        message: e.to_string(),
    })?;

    Catalog::from_json(json).map_err(|e| Error::Catalog {
        locale: locale.code().to_string(),
        message: e.to_string(),
    })
}

/// Replace `{name}` placeholders with matching arguments.
///
/// Placeholders without a matching argument, and braces that do not form a
/// placeholder, are copied through verbatim. Substituted values are not
/// scanned again.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find(['}', '{']) {
            Some(close) if after.as_bytes()[close] == b'}' => {
                let name = &after[..close];
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            // A second `{` before any `}`: this brace opens nothing
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
