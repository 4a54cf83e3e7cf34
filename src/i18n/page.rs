//! Retained page model refreshed by [`I18n::update_page_language`](super::I18n::update_page_language).
//!
//! The terminal UI never looks strings up itself for the static chrome (header,
//! form, footer, hints). It renders whatever the page elements currently hold,
//! and a language switch rewrites those elements in one sweep.

use super::Language;

/// Stable element identifiers used by the renderer.
pub mod ids {
    /// Brand line in the header.
    pub const BRAND: &str = "brand";
    /// Page title.
    pub const TITLE: &str = "title";
    /// Subtitle under the title.
    pub const SUBTITLE: &str = "subtitle";
    /// Name input box (label text + placeholder).
    pub const NAME_INPUT: &str = "name_input";
    /// Submit button.
    pub const GENERATE_BUTTON: &str = "generate_button";
    /// Language switch control.
    pub const LANG_TOGGLE: &str = "lang_toggle";
    /// Loading banner.
    pub const LOADING: &str = "loading";
    /// Footer "about" heading.
    pub const FOOTER_ABOUT: &str = "footer_about";
    /// Footer description.
    pub const FOOTER_DESCRIPTION: &str = "footer_description";
    /// Footer contact link.
    pub const FOOTER_CONTACT: &str = "footer_contact";
    /// Footer support link.
    pub const FOOTER_SUPPORT: &str = "footer_support";
    /// Footer privacy link.
    pub const FOOTER_PRIVACY: &str = "footer_privacy";
    /// Footer terms link.
    pub const FOOTER_TERMS: &str = "footer_terms";
    /// Footer FAQ link.
    pub const FOOTER_FAQ: &str = "footer_faq";
    /// Copyright line.
    pub const FOOTER_COPYRIGHT: &str = "footer_copyright";
    /// "Powered by" line.
    pub const FOOTER_POWERED: &str = "footer_powered";
    /// Key hint: submit.
    pub const HINT_SUBMIT: &str = "hint_submit";
    /// Key hint: toggle language.
    pub const HINT_TOGGLE: &str = "hint_toggle";
    /// Key hint: scroll cards.
    pub const HINT_SCROLL: &str = "hint_scroll";
    /// Key hint: quit.
    pub const HINT_QUIT: &str = "hint_quit";
}

/// One element of the page model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageElement {
    /// Identifier the renderer looks the element up by.
    pub id: &'static str,
    /// Translation key whose value becomes `text` on refresh.
    pub text_key: Option<&'static str>,
    /// Translation key whose value becomes `placeholder` on refresh.
    pub placeholder_key: Option<&'static str>,
    /// Current visible text.
    pub text: String,
    /// Current placeholder text (input elements only).
    pub placeholder: String,
}

impl PageElement {
    /// Element whose text follows `key`.
    #[must_use]
    pub const fn text(id: &'static str, key: &'static str) -> Self {
        Self {
            id,
            text_key: Some(key),
            placeholder_key: None,
            text: String::new(),
            placeholder: String::new(),
        }
    }

    /// Element whose text and placeholder follow separate keys.
    #[must_use]
    pub const fn input(id: &'static str, label_key: &'static str, placeholder_key: &'static str) -> Self {
        Self {
            id,
            text_key: Some(label_key),
            placeholder_key: Some(placeholder_key),
            text: String::new(),
            placeholder: String::new(),
        }
    }

    /// Element without translation keys; its text is set by code.
    #[must_use]
    pub const fn untagged(id: &'static str) -> Self {
        Self {
            id,
            text_key: None,
            placeholder_key: None,
            text: String::new(),
            placeholder: String::new(),
        }
    }
}

/// The document the UI renders: a language attribute plus tagged elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Language the page content is currently in.
    pub document_lang: Language,
    /// All elements, in no particular order.
    pub elements: Vec<PageElement>,
}

impl Page {
    /// What: Build an empty page from a list of elements.
    ///
    /// Inputs:
    /// - `elements`: Elements with their translation tags
    ///
    /// Output:
    /// - Page in the default language with blank texts; call
    ///   `I18n::update_page_language` to fill it
    #[must_use]
    pub fn new(elements: Vec<PageElement>) -> Self {
        Self {
            document_lang: Language::default(),
            elements,
        }
    }

    /// The element set of the name generator screen.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            PageElement::text(ids::BRAND, "app.brand_name"),
            PageElement::text(ids::TITLE, "app.title"),
            PageElement::text(ids::SUBTITLE, "app.subtitle"),
            PageElement::input(ids::NAME_INPUT, "app.form.name_label", "app.form.name_placeholder"),
            PageElement::text(ids::GENERATE_BUTTON, "app.form.generate_button"),
            PageElement::untagged(ids::LANG_TOGGLE),
            PageElement::text(ids::LOADING, "app.status.loading"),
            PageElement::text(ids::FOOTER_ABOUT, "app.footer.about"),
            PageElement::text(ids::FOOTER_DESCRIPTION, "app.footer.description"),
            PageElement::text(ids::FOOTER_CONTACT, "app.footer.contact"),
            PageElement::text(ids::FOOTER_SUPPORT, "app.footer.support"),
            PageElement::text(ids::FOOTER_PRIVACY, "app.footer.privacy"),
            PageElement::text(ids::FOOTER_TERMS, "app.footer.terms"),
            PageElement::text(ids::FOOTER_FAQ, "app.footer.faq"),
            PageElement::text(ids::FOOTER_COPYRIGHT, "app.footer.copyright"),
            PageElement::text(ids::FOOTER_POWERED, "app.footer.powered"),
            PageElement::text(ids::HINT_SUBMIT, "app.hints.submit"),
            PageElement::text(ids::HINT_TOGGLE, "app.hints.toggle_language"),
            PageElement::text(ids::HINT_SCROLL, "app.hints.scroll"),
            PageElement::text(ids::HINT_QUIT, "app.hints.quit"),
        ])
    }

    /// Find an element by id.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Find an element by id for mutation.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut PageElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Current text of an element, or `""` when the page has no such element.
    #[must_use]
    pub fn text(&self, id: &str) -> &str {
        self.element(id).map_or("", |e| e.text.as_str())
    }

    /// Current placeholder of an element, or `""` when absent.
    #[must_use]
    pub fn placeholder(&self, id: &str) -> &str {
        self.element(id).map_or("", |e| e.placeholder.as_str())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::standard()
    }
}
