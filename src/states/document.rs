//! Document host - where the page language attribute lives

use crate::error::{Error, Result};
use std::sync::RwLock;

/// The rendered document, as far as the language store is concerned
pub trait DocumentHost: Send + Sync {
    /// Set the document language attribute (`<html lang="...">`)
    fn set_language(&self, code: &str) -> Result<()>;
}

/// Document whose attributes are kept in memory and rendered on demand
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    lang: RwLock<Option<String>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current language attribute
    pub fn language(&self) -> Option<String> {
        self.lang.read().ok().and_then(|lang| lang.clone())
    }

    /// Opening `<html>` tag carrying the language attribute
    pub fn html_open_tag(&self) -> String {
        match self.language() {
            Some(lang) => format!("<html lang=\"{lang}\">"),
            None => "<html>".to_string(),
        }
    }
}

impl DocumentHost for InMemoryDocument {
    fn set_language(&self, code: &str) -> Result<()> {
        let mut lang = self.lang.write().map_err(|_| Error::Invalid {
            message: "document lock poisoned".to_string(),
        })?;
        *lang = Some(code.to_string());
        Ok(())
    }
}
