//! Document-level presentation side effects
//!
//! Styling and SEO collaborators read two things off the root element: the
//! `lang` attribute and a `light`/`dark` class marker.

use crate::state::ResolvedTheme;
use std::cell::RefCell;

/// Receives the global presentation side effects of the contexts
pub trait PresentationSink {
    /// Set the language attribute of the root element
    fn set_lang(&self, lang: &str);

    /// Replace the theme marker on the root element
    fn set_theme_marker(&self, theme: ResolvedTheme);
}

/// In-memory model of the document root element
#[derive(Debug, Default)]
pub struct DocumentRoot {
    lang: RefCell<Option<String>>,
    classes: RefCell<Vec<String>>,
}

impl DocumentRoot {
    /// Create a root element with no attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `lang` attribute
    pub fn lang(&self) -> Option<String> {
        self.lang.borrow().clone()
    }

    /// Current class list, in insertion order
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    /// Check for a class on the root element
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    /// The theme marker currently applied, if any
    pub fn theme_marker(&self) -> Option<ResolvedTheme> {
        self.classes
            .borrow()
            .iter()
            .find_map(|c| c.parse::<ResolvedTheme>().ok())
    }

    /// Add an unrelated class (other collaborators share the element)
    pub fn add_class(&self, class: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }
}

impl PresentationSink for DocumentRoot {
    fn set_lang(&self, lang: &str) {
        *self.lang.borrow_mut() = Some(lang.to_string());
    }

    fn set_theme_marker(&self, theme: ResolvedTheme) {
        let mut classes = self.classes.borrow_mut();
        classes.retain(|c| c.parse::<ResolvedTheme>().is_err());
        classes.push(theme.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_lang() {
        let root = DocumentRoot::new();
        assert_eq!(root.lang(), None);
        root.set_lang("tr");
        assert_eq!(root.lang(), Some("tr".to_string()));
    }

    #[test]
    fn test_theme_marker_replaced() {
        let root = DocumentRoot::new();
        root.add_class("antialiased");
        root.set_theme_marker(ResolvedTheme::Light);
        root.set_theme_marker(ResolvedTheme::Dark);

        assert!(root.has_class("dark"));
        assert!(!root.has_class("light"));
        assert!(root.has_class("antialiased"));
        assert_eq!(root.theme_marker(), Some(ResolvedTheme::Dark));
    }
}
