//! i18n - Internationalization Module
//!
//! Supported locales, bundled catalogs, generated translation keys and
//! locale-aware formatting.

mod catalog;
pub mod format;
mod keys;

pub use catalog::*;
pub use keys::Key;

use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Italian (Italy)
    #[default]
    It,
    /// English (US formatting)
    En,
}

/// Entry shown by the language switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub locale: Locale,
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

impl Locale {
    /// Every supported locale, in switcher order
    pub const ALL: [Locale; 2] = [Locale::It, Locale::En];

    /// Parse an exact two-letter code; `None` for anything unsupported
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "it" => Some(Locale::It),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Parse a stored or remote value, ignoring case and surrounding whitespace
    pub(crate) fn parse_lenient(code: &str) -> Option<Self> {
        Self::parse(code.trim().to_ascii_lowercase().as_str())
    }

    /// Parse a code, falling back to the default locale
    pub fn coerce(code: &str) -> Self {
        Self::parse(code).unwrap_or_default()
    }

    /// Two-letter code, also used as the document language attribute
    pub fn code(self) -> &'static str {
        match self {
            Locale::It => "it",
            Locale::En => "en",
        }
    }

    /// BCP 47 tag used for formatting
    pub fn bcp47(self) -> &'static str {
        match self {
            Locale::It => "it-IT",
            Locale::En => "en-US",
        }
    }

    /// ISO 4217 code used when the caller does not name a currency
    pub fn default_currency(self) -> &'static str {
        match self {
            Locale::It => "EUR",
            Locale::En => "USD",
        }
    }

    /// Native display name
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::It => "Italiano",
            Locale::En => "English",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::It => "🇮🇹",
            Locale::En => "🇬🇧",
        }
    }

    pub fn info(self) -> LanguageInfo {
        LanguageInfo {
            locale: self,
            code: self.code(),
            name: self.display_name(),
            flag: self.flag(),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Supported languages in declaration order
pub fn list_languages() -> [LanguageInfo; 2] {
    Locale::ALL.map(Locale::info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_supported_codes_only() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("it"), Some(Locale::It));
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse(" it "), None);
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn lenient_parse_normalizes_stored_values() {
        assert_eq!(Locale::parse_lenient(" IT "), Some(Locale::It));
        assert_eq!(Locale::parse_lenient("En"), Some(Locale::En));
        assert_eq!(Locale::parse_lenient("fr"), None);
    }

    #[test]
    fn coerce_falls_back_to_italian() {
        assert_eq!(Locale::coerce("de"), Locale::It);
        assert_eq!(Locale::coerce("en"), Locale::En);
        assert_eq!(Locale::coerce("It"), Locale::It);
        assert_eq!(Locale::coerce("EN"), Locale::It);
    }

    #[test]
    fn languages_keep_declaration_order() {
        let codes: Vec<_> = list_languages().iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["it", "en"]);
        assert_eq!(list_languages()[1].name, "English");
    }

    #[test]
    fn locale_serializes_as_code() {
        let json = serde_json::to_string(&Locale::En).expect("serialize");
        assert_eq!(json, "\"en\"");
    }
}
