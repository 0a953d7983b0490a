use std::collections::BTreeMap;

/// Turns a display string into the operator's language.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

/// Leaves every string as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Fixed lookup table; strings without an entry pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl Translator for Catalog {
    fn translate(&self, text: &str) -> String {
        self.entries
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
