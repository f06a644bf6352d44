//! Locale context
//!
//! Holds the current UI language, persists it under `scalenty-locale`, and
//! mirrors it onto the document `lang` attribute.

use crate::error::ValueError;
use crate::platform::PresentationSink;
use crate::storage::{Preference, PreferenceValue, Storage, LOCALE_KEY};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::str::FromStr;

/// Supported UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the fallback language
    #[default]
    En,
    /// Turkish
    Tr,
}

impl Locale {
    /// Every supported locale, default first
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    /// Short language code stored and exposed on the document
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// Name of the language in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Tr => "Türkçe",
        }
    }
}

impl FromStr for Locale {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "tr" => Ok(Locale::Tr),
            other => Err(ValueError::UnsupportedLocale(other.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl PreferenceValue for Locale {
    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn encode(&self) -> String {
        self.code().to_string()
    }
}

/// Validator for stored locales
pub fn is_supported_locale(locale: &Locale) -> bool {
    Locale::ALL.contains(locale)
}

/// Pick a locale from the runtime's reported language tag
///
/// Only Turkish is recognised; everything else, including no tag, is English.
pub fn detect_browser_locale(tag: Option<&str>) -> Locale {
    match tag {
        Some(tag) if tag.trim().to_lowercase().starts_with(Locale::Tr.code()) => Locale::Tr,
        _ => Locale::En,
    }
}

/// Application-wide current language
pub struct LocaleContext {
    locale: Locale,
    preference: Preference<Locale>,
    sink: Rc<dyn PresentationSink>,
}

impl LocaleContext {
    /// Load the stored locale, apply it to the document, and return a ready context
    pub fn mount(
        storage: Rc<dyn Storage>,
        sink: Rc<dyn PresentationSink>,
        browser_language: Option<&str>,
    ) -> Self {
        let preference = Preference::new(LOCALE_KEY, storage);
        let locale = preference.load(is_supported_locale, || {
            detect_browser_locale(browser_language)
        });
        sink.set_lang(locale.code());
        log::debug!("Locale context ready: {}", locale);

        Self {
            locale,
            preference,
            sink,
        }
    }

    /// Current locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch language, persist it, and update the document
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.preference.save(&locale);
        self.sink.set_lang(locale.code());
        log::debug!("Locale set to {}", locale);
    }

    /// Switch language from a raw code, rejecting unsupported codes
    pub fn set_locale_code(&mut self, code: &str) -> Result<(), ValueError> {
        let locale = code.parse()?;
        self.set_locale(locale);
        Ok(())
    }

    /// Forget the stored choice and fall back to the detected locale
    pub fn reset(&mut self, browser_language: Option<&str>) {
        self.preference.reset();
        let locale = self
            .preference
            .load(is_supported_locale, || detect_browser_locale(browser_language));
        self.locale = locale;
        self.sink.set_lang(locale.code());
    }
}

impl std::fmt::Debug for LocaleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleContext")
            .field("locale", &self.locale)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::DocumentRoot;
    use crate::storage::{MemoryStorage, UnavailableStorage};

    #[test]
    fn test_detect_browser_locale() {
        assert_eq!(detect_browser_locale(Some("tr-TR")), Locale::Tr);
        assert_eq!(detect_browser_locale(Some("TR")), Locale::Tr);
        assert_eq!(detect_browser_locale(Some("en-US")), Locale::En);
        assert_eq!(detect_browser_locale(Some("de-DE")), Locale::En);
        assert_eq!(detect_browser_locale(None), Locale::En);
    }

    #[test]
    fn test_parse_rejects_unsupported() {
        assert_eq!("tr".parse::<Locale>(), Ok(Locale::Tr));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(ValueError::UnsupportedLocale("fr".to_string()))
        );
    }

    #[test]
    fn test_corrupt_value_recovers_detected_locale() {
        let storage = Rc::new(MemoryStorage::with_entries([(LOCALE_KEY, "klingon")]));
        let root = Rc::new(DocumentRoot::new());

        let ctx = LocaleContext::mount(storage.clone(), root.clone(), Some("tr-TR"));
        assert_eq!(ctx.locale(), Locale::Tr);
        assert_eq!(storage.raw(LOCALE_KEY), Some("tr".to_string()));
        assert_eq!(root.lang(), Some("tr".to_string()));
    }

    #[test]
    fn test_absent_value_without_detection_is_english() {
        let storage = Rc::new(MemoryStorage::new());
        let ctx = LocaleContext::mount(storage.clone(), Rc::new(DocumentRoot::new()), None);
        assert_eq!(ctx.locale(), Locale::En);
        assert_eq!(storage.raw(LOCALE_KEY), Some("en".to_string()));
    }

    #[test]
    fn test_set_locale_survives_remount() {
        let storage = Rc::new(MemoryStorage::new());
        let root = Rc::new(DocumentRoot::new());

        let mut ctx = LocaleContext::mount(storage.clone(), root.clone(), Some("en-GB"));
        ctx.set_locale(Locale::Tr);
        assert_eq!(root.lang(), Some("tr".to_string()));

        // Detection would pick English; the stored choice must win.
        let remounted = LocaleContext::mount(storage, root, Some("en-GB"));
        assert_eq!(remounted.locale(), Locale::Tr);
    }

    #[test]
    fn test_set_locale_code_rejects_unknown() {
        let mut ctx = LocaleContext::mount(
            Rc::new(MemoryStorage::new()),
            Rc::new(DocumentRoot::new()),
            None,
        );
        assert!(ctx.set_locale_code("de").is_err());
        assert_eq!(ctx.locale(), Locale::En);
        ctx.set_locale_code("tr").unwrap();
        assert_eq!(ctx.locale(), Locale::Tr);
    }

    #[test]
    fn test_unavailable_storage_keeps_session_value() {
        let mut ctx =
            LocaleContext::mount(Rc::new(UnavailableStorage), Rc::new(DocumentRoot::new()), Some("tr"));
        assert_eq!(ctx.locale(), Locale::Tr);
        ctx.set_locale(Locale::En);
        assert_eq!(ctx.locale(), Locale::En);
    }

    #[test]
    fn test_reset_redetects() {
        let storage = Rc::new(MemoryStorage::with_entries([(LOCALE_KEY, "en")]));
        let mut ctx = LocaleContext::mount(storage.clone(), Rc::new(DocumentRoot::new()), Some("tr"));
        assert_eq!(ctx.locale(), Locale::En);

        ctx.reset(Some("tr-TR"));
        assert_eq!(ctx.locale(), Locale::Tr);
        assert_eq!(storage.raw(LOCALE_KEY), Some("tr".to_string()));
    }
}
