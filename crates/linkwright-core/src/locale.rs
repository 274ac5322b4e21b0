use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::Value;

/// Locale-aware text lookup supplied by the host editor.
pub trait Translate {
    fn translate(&self, source: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, source: &str) -> String {
        self(source)
    }
}

/// A fixed source-to-localized string table. Unknown strings translate to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    entries: IndexMap<String, String>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl Into<String>, localized: impl Into<String>) -> Self {
        self.insert(source, localized);
        self
    }

    pub fn insert(&mut self, source: impl Into<String>, localized: impl Into<String>) {
        self.entries.insert(source.into(), localized.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a catalog from a JSON object of string values, e.g. one locale of a translations
    /// bundle.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(obj) = value else {
            return Err(Error::InvalidTranslations {
                message: format!("expected an object, got {value}"),
            });
        };

        let mut catalog = Self::new();
        for (source, localized) in obj {
            let Value::String(localized) = localized else {
                return Err(Error::InvalidTranslations {
                    message: format!("translation of {source:?} is not a string"),
                });
            };
            catalog.insert(source.clone(), localized.clone());
        }
        Ok(catalog)
    }
}

impl Translate for TranslationCatalog {
    fn translate(&self, source: &str) -> String {
        self.entries
            .get(source)
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }
}
