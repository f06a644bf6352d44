//! Internationalization (i18n) module for the Scalenty site
//!
//! Flat, locale-keyed tables of UI strings addressed as `namespace.key`.
//! There is no cross-locale fallback: every key the default locale defines
//! must exist in every other locale, which the tests below enforce.
//!
//! Templates may carry `{name}` placeholders; callers substitute them with
//! [`fill`].

mod en;
mod tr;

use crate::error::CatalogError;
use crate::state::Locale;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

type Table = HashMap<&'static str, &'static str>;

static CATALOG: Lazy<MessageCatalog> = Lazy::new(MessageCatalog::bundled);

/// Locale-keyed dictionary of UI strings
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    tables: HashMap<Locale, Table>,
}

impl MessageCatalog {
    /// The catalog compiled into the crate
    pub fn bundled() -> Self {
        Self::from_tables(&[(Locale::En, en::MESSAGES), (Locale::Tr, tr::MESSAGES)])
    }

    /// Shared bundled catalog
    pub fn global() -> &'static Self {
        &CATALOG
    }

    /// Build a catalog from raw `(path, template)` tables
    pub fn from_tables(tables: &[(Locale, &'static [(&'static str, &'static str)])]) -> Self {
        Self {
            tables: tables
                .iter()
                .map(|(locale, entries)| (*locale, entries.iter().copied().collect()))
                .collect(),
        }
    }

    /// Look up a `namespace.key` path
    pub fn get(&self, locale: Locale, path: &str) -> Result<&'static str, CatalogError> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(path))
            .copied()
            .ok_or_else(|| CatalogError::MissingKey {
                locale: locale.code(),
                key: path.to_string(),
            })
    }

    /// Look up `key` inside `namespace`
    pub fn lookup(
        &self,
        locale: Locale,
        namespace: &str,
        key: &str,
    ) -> Result<&'static str, CatalogError> {
        self.get(locale, &format!("{}.{}", namespace, key))
    }

    /// All paths defined for a locale, sorted
    pub fn keys(&self, locale: Locale) -> Vec<&'static str> {
        let keys: BTreeSet<_> = self
            .tables
            .get(&locale)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default();
        keys.into_iter().collect()
    }

    /// Paths the default locale defines that `locale` lacks or leaves empty
    pub fn missing_keys(&self, locale: Locale) -> Vec<&'static str> {
        let table = self.tables.get(&locale);
        self.keys(Locale::default())
            .into_iter()
            .filter(|path| {
                table
                    .and_then(|t| t.get(path))
                    .map_or(true, |value| value.trim().is_empty())
            })
            .collect()
    }

    /// Every missing translation across the supported locales
    pub fn verify_complete(&self) -> Result<(), Vec<CatalogError>> {
        let missing: Vec<CatalogError> = Locale::ALL
            .iter()
            .flat_map(|&locale| {
                self.missing_keys(locale)
                    .into_iter()
                    .map(move |path| CatalogError::MissingKey {
                        locale: locale.code(),
                        key: path.to_string(),
                    })
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

/// Initialize the bundled catalog
pub fn init() {
    let catalog = MessageCatalog::global();
    log::debug!(
        "i18n initialized with {} keys per locale",
        catalog.keys(Locale::default()).len()
    );
}

/// Look up `namespace.key` in the bundled catalog
pub fn lookup(locale: Locale, namespace: &str, key: &str) -> Result<&'static str, CatalogError> {
    MessageCatalog::global().lookup(locale, namespace, key)
}

/// Replace every `{name}` placeholder in `template` with `value`
pub fn fill(template: &str, name: &str, value: &str) -> String {
    template.replace(&format!("{{{}}}", name), value)
}

/// Macro for accessing localized strings by `namespace.key` path
#[macro_export]
macro_rules! t {
    ($locale:expr, $path:literal) => {
        $crate::i18n::MessageCatalog::global().get($locale, $path)
    };
}
