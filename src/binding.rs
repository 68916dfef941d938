//! Text bindings: keep displayed text in sync with the active language.
//!
//! A [`TextBinding`] holds a translation key and a writable text target. It
//! renders the key's resolved value into the target, and re-renders on every
//! language change while attached to a [`LanguageRegistry`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::registry::{
    LanguageObserver,
    LanguageRegistry,
    SubscriptionId,
};

/// An opaque writable text target (a UI widget, a buffer, ...).
///
/// The binding only ever writes; it never reads the target back.
pub trait TextSink {
    /// Replaces the displayed text.
    fn set_text(&mut self, text: &str);
}

/// Shared string buffer sink, useful for tests and headless hosts.
impl TextSink for Rc<RefCell<String>> {
    fn set_text(&mut self, text: &str) {
        *self.borrow_mut() = text.to_string();
    }
}

/// Binds a translation key to a [`TextSink`].
///
/// Lifecycle: a binding is created attached (subscribed to the registry and
/// rendered once), lives through any number of key and language changes, and
/// is detached on teardown. Detaching removes the subscription so the
/// registry can never invoke a dead target; a binding that is simply dropped
/// is skipped automatically thanks to the registry's weak references.
pub struct TextBinding {
    /// The bound translation key (may be empty when nothing is bound yet).
    key: String,
    /// Where resolved text is written.
    target: Box<dyn TextSink>,
    /// Handle of the registry subscription while attached.
    subscription: Option<SubscriptionId>,
}

impl TextBinding {
    /// Creates a binding, subscribes it to `registry`, and renders once.
    ///
    /// An empty `key` is allowed at this point (the key may be assigned
    /// later via [`TextBinding::set_key`]); it is logged and the target is
    /// left untouched until a key is set.
    pub fn attach(
        registry: &mut LanguageRegistry,
        key: impl Into<String>,
        target: Box<dyn TextSink>,
    ) -> Rc<RefCell<Self>> {
        let key = key.into();
        if key.is_empty() {
            tracing::warn!("Text binding attached with an empty translation key");
        }
        let binding = Rc::new(RefCell::new(Self { key, target, subscription: None }));
        let as_observer: Rc<RefCell<dyn LanguageObserver>> = binding.clone();
        let id = registry.subscribe(Rc::downgrade(&as_observer));
        binding.borrow_mut().subscription = Some(id);
        binding.borrow_mut().refresh(registry);
        binding
    }

    /// Unsubscribes the binding from `registry`.
    ///
    /// Idempotent; after this the binding no longer re-renders on language
    /// changes.
    pub fn detach(&mut self, registry: &mut LanguageRegistry) {
        if let Some(id) = self.subscription.take() {
            registry.unsubscribe(id);
        }
    }

    /// Whether the binding currently holds a registry subscription.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// The bound translation key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Updates the bound key and immediately re-renders.
    ///
    /// An empty key is rejected with a warning and the previous key is kept.
    pub fn set_key(&mut self, key: impl Into<String>, registry: &LanguageRegistry) {
        let key = key.into();
        if key.is_empty() {
            tracing::warn!("Attempted to set an empty translation key");
            return;
        }
        self.key = key;
        self.refresh(registry);
    }

    /// Resolves the bound key and writes the result to the target.
    ///
    /// With no key set, the target is left unchanged and a warning is
    /// logged. A missing translation renders its placeholder, so authors can
    /// spot gaps instead of blank widgets.
    pub fn refresh(&mut self, registry: &LanguageRegistry) {
        if self.key.is_empty() {
            tracing::warn!("No translation key set; text will not be updated");
            return;
        }
        let resolution = registry.lookup(&self.key);
        self.target.set_text(&resolution.display_text());
    }
}

impl LanguageObserver for TextBinding {
    fn language_changed(&mut self, registry: &LanguageRegistry) {
        self.refresh(registry);
    }
}

impl std::fmt::Debug for TextBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBinding")
            .field("key", &self.key)
            .field("target", &"<dyn TextSink>")
            .field("subscription", &self.subscription)
            .finish()
    }
}
