//! Message translation for write-failure field errors.

use strictform_core::types::MessageKey;

/// Renders a message key as a display string.
pub trait Translator {
    fn translate(&self, key: &MessageKey) -> String;
}

/// Returns the key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &MessageKey) -> String {
        key.0.clone()
    }
}
