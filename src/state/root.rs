//! Root-composed site state
//!
//! The root owns one slot per provider. A slot that was never composed
//! answers its hook with [`ContextError::MissingProvider`]; a composed slot
//! stays [`Provider::Uninitialized`] until [`SiteState::mount`] has run, so
//! no reader can observe state before initialization completes.

use super::{ConsentGate, LocaleContext, ThemeContext};
use crate::config::SiteConfig;
use crate::error::{ContextError, ContextResult};
use crate::platform::{AppearanceSource, DocumentRoot, PresentationSink, SystemAppearance};
use crate::state::ResolvedTheme;
use crate::storage::{MemoryStorage, Storage};
use std::rc::Rc;

const LOCALE_PROVIDER: &str = "LocaleProvider";
const THEME_PROVIDER: &str = "ThemeProvider";
const CONSENT_PROVIDER: &str = "CookieConsentProvider";

/// Everything the contexts need from the host environment
#[derive(Clone)]
pub struct Host {
    /// Durable key/value storage
    pub storage: Rc<dyn Storage>,
    /// Root element side effects
    pub document: Rc<dyn PresentationSink>,
    /// OS light/dark preference
    pub appearance: Rc<dyn AppearanceSource>,
    /// Language tag reported by the runtime, e.g. `tr-TR`
    pub browser_language: Option<String>,
}

impl Host {
    /// In-memory host with light OS appearance and no language tag
    pub fn headless() -> Self {
        Self {
            storage: Rc::new(MemoryStorage::new()),
            document: Rc::new(DocumentRoot::new()),
            appearance: Rc::new(SystemAppearance::new(ResolvedTheme::Light)),
            browser_language: None,
        }
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("storage_available", &self.storage.is_available())
            .field("browser_language", &self.browser_language)
            .finish()
    }
}

/// Initialization state of a composed provider
#[derive(Debug)]
pub enum Provider<T> {
    /// Composed but not mounted yet
    Uninitialized,
    /// Initialized; readers may use it
    Ready(T),
}

impl<T> Provider<T> {
    /// Whether the provider finished initialization
    pub fn is_ready(&self) -> bool {
        matches!(self, Provider::Ready(_))
    }
}

/// Builder choosing which providers the root composes
#[derive(Debug)]
pub struct SiteStateBuilder {
    host: Host,
    config: SiteConfig,
    locale: bool,
    theme: bool,
    consent: bool,
}

impl SiteStateBuilder {
    /// Use a specific configuration
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = config;
        self
    }

    /// Compose the locale provider
    pub fn with_locale(mut self) -> Self {
        self.locale = true;
        self
    }

    /// Compose the theme provider
    pub fn with_theme(mut self) -> Self {
        self.theme = true;
        self
    }

    /// Compose the cookie consent provider
    pub fn with_consent(mut self) -> Self {
        self.consent = true;
        self
    }

    /// Compose every provider
    pub fn with_all(self) -> Self {
        self.with_locale().with_theme().with_consent()
    }

    /// Create the root; providers stay uninitialized until mounted
    pub fn build(self) -> SiteState {
        SiteState {
            locale: self.locale.then_some(Provider::Uninitialized),
            theme: self.theme.then_some(Provider::Uninitialized),
            consent: self.consent.then_some(Provider::Uninitialized),
            host: self.host,
            config: self.config,
        }
    }
}

/// Single root object handed down to every view
pub struct SiteState {
    host: Host,
    config: SiteConfig,
    locale: Option<Provider<LocaleContext>>,
    theme: Option<Provider<ThemeContext>>,
    consent: Option<Provider<ConsentGate>>,
}

impl SiteState {
    /// Start composing a root over `host`
    pub fn builder(host: Host) -> SiteStateBuilder {
        SiteStateBuilder {
            host,
            config: SiteConfig::default(),
            locale: false,
            theme: false,
            consent: false,
        }
    }

    /// Compose every provider and mount immediately
    pub fn mounted(host: Host, config: SiteConfig) -> Self {
        let mut state = Self::builder(host).config(config).with_all().build();
        state.mount();
        state
    }

    /// Initialize composed providers: locale, then theme, then consent
    ///
    /// Providers that are already ready are left alone.
    pub fn mount(&mut self) {
        if let Some(slot @ Provider::Uninitialized) = &mut self.locale {
            *slot = Provider::Ready(LocaleContext::mount(
                Rc::clone(&self.host.storage),
                Rc::clone(&self.host.document),
                self.host.browser_language.as_deref(),
            ));
        }

        if let Some(slot @ Provider::Uninitialized) = &mut self.theme {
            *slot = Provider::Ready(ThemeContext::mount(
                Rc::clone(&self.host.storage),
                Rc::clone(&self.host.document),
                self.host.appearance.as_ref(),
            ));
        }

        if let Some(slot @ Provider::Uninitialized) = &mut self.consent {
            *slot = Provider::Ready(ConsentGate::mount(Rc::clone(&self.host.storage)));
        }

        log::debug!("Site state mounted");
    }

    /// Whether every composed provider is ready
    pub fn is_ready(&self) -> bool {
        self.locale.as_ref().map_or(true, Provider::is_ready)
            && self.theme.as_ref().map_or(true, Provider::is_ready)
            && self.consent.as_ref().map_or(true, Provider::is_ready)
    }

    /// Site configuration
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Host the contexts were mounted against
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Locale state for views
    pub fn use_locale(&self) -> ContextResult<&LocaleContext> {
        ready(self.locale.as_ref(), "use_locale", LOCALE_PROVIDER)
    }

    /// Locale state with its setter
    pub fn use_locale_mut(&mut self) -> ContextResult<&mut LocaleContext> {
        ready_mut(self.locale.as_mut(), "use_locale", LOCALE_PROVIDER)
    }

    /// Theme state for views
    pub fn use_theme(&self) -> ContextResult<&ThemeContext> {
        ready(self.theme.as_ref(), "use_theme", THEME_PROVIDER)
    }

    /// Theme state with its setters
    pub fn use_theme_mut(&mut self) -> ContextResult<&mut ThemeContext> {
        ready_mut(self.theme.as_mut(), "use_theme", THEME_PROVIDER)
    }

    /// Consent state for views
    pub fn use_consent(&self) -> ContextResult<&ConsentGate> {
        ready(self.consent.as_ref(), "use_consent", CONSENT_PROVIDER)
    }

    /// Consent state with its answers
    pub fn use_consent_mut(&mut self) -> ContextResult<&mut ConsentGate> {
        ready_mut(self.consent.as_mut(), "use_consent", CONSENT_PROVIDER)
    }

    /// Cookie banner visibility: feature flag and a pending answer
    pub fn banner_visible(&self) -> ContextResult<bool> {
        let gate = self.use_consent()?;
        Ok(gate.banner_visible(self.config.cookie_banner_enabled))
    }

    /// Whether analytics may be dispatched
    pub fn analytics_allowed(&self) -> ContextResult<bool> {
        let gate = self.use_consent()?;
        Ok(self.config.analytics_enabled && gate.has_consent())
    }
}

impl std::fmt::Debug for SiteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteState")
            .field("config", &self.config)
            .field("locale", &self.locale)
            .field("theme", &self.theme)
            .field("consent", &self.consent)
            .finish()
    }
}

fn ready<'a, T>(
    slot: Option<&'a Provider<T>>,
    hook: &'static str,
    provider: &'static str,
) -> ContextResult<&'a T> {
    match slot {
        None => Err(ContextError::MissingProvider { hook, provider }),
        Some(Provider::Uninitialized) => Err(ContextError::NotReady { provider }),
        Some(Provider::Ready(ctx)) => Ok(ctx),
    }
}

fn ready_mut<'a, T>(
    slot: Option<&'a mut Provider<T>>,
    hook: &'static str,
    provider: &'static str,
) -> ContextResult<&'a mut T> {
    match slot {
        None => Err(ContextError::MissingProvider { hook, provider }),
        Some(Provider::Uninitialized) => Err(ContextError::NotReady { provider }),
        Some(Provider::Ready(ctx)) => Ok(ctx),
    }
}
