//! Link decorators: optional extra attributes attached to links (`target="_blank"`,
//! `download`, ...).
//!
//! Hosts configure decorators under `link.decorators` as an object keyed by a short name.
//! [`get_normalized_decorators`] turns that object into an ordered list with stable ids, and
//! [`get_localized_decorators`] translates the labels of the built-in decorators.

use crate::config::LinkConfig;
use crate::error::{Error, Result};
use crate::locale::Translate;
use crate::view::is_truthy;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Prefix of synthesized decorator ids.
pub const DECORATOR_ID_PREFIX: &str = "linkDecorator";

/// Labels of the built-in decorators that are translated automatically. Other labels are
/// expected to be localized in the host config.
pub const LOCALIZABLE_LABELS: [&str; 2] = ["Open in a new tab", "Downloadable"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoratorMode {
    /// Toggled by the user in the link UI.
    Manual,
    /// Applied when a rule matches the link URL.
    Automatic,
}

/// One decorator as written in the host config.
///
/// Deserializing never fails on the shape of a single definition: fields that do not fit the
/// typed slots (a numeric `label`, a boolean attribute value, an unknown `mode`) are kept
/// verbatim in `extra`, and a definition that is not an object becomes an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkDecoratorDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<DecoratorMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,
    #[serde(rename = "defaultValue")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<bool>,
    /// Kind-specific fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LinkDecoratorDefinition {
    pub fn manual(label: impl Into<String>) -> Self {
        Self {
            mode: Some(DecoratorMode::Manual),
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn automatic() -> Self {
        Self {
            mode: Some(DecoratorMode::Automatic),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_default_value(mut self, value: bool) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Lifts the well-typed known fields out of a raw definition; everything else goes to
    /// `extra`.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::default();
        };

        let mut definition = Self::default();
        for (field, value) in fields {
            match (field.as_str(), value) {
                ("mode", Value::String(mode)) if mode == "manual" => {
                    definition.mode = Some(DecoratorMode::Manual);
                }
                ("mode", Value::String(mode)) if mode == "automatic" => {
                    definition.mode = Some(DecoratorMode::Automatic);
                }
                ("label", Value::String(label)) => definition.label = Some(label),
                ("defaultValue", Value::Bool(default_value)) => {
                    definition.default_value = Some(default_value);
                }
                ("attributes", Value::Object(attributes))
                    if attributes.values().all(Value::is_string) =>
                {
                    definition.attributes = attributes
                        .into_iter()
                        .filter_map(|(name, value)| match value {
                            Value::String(value) => Some((name, value)),
                            _ => None,
                        })
                        .collect();
                }
                (_, value) => {
                    definition.extra.insert(field.clone(), value);
                }
            }
        }
        definition
    }
}

impl<'de> Deserialize<'de> for LinkDecoratorDefinition {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Decorator definitions keyed by their config name, in config order.
pub type DecoratorsMapping = IndexMap<String, LinkDecoratorDefinition>;

/// A decorator definition plus its synthesized `linkDecorator<Key>` id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDecorator {
    pub id: String,
    #[serde(flatten)]
    pub definition: LinkDecoratorDefinition,
}

impl NormalizedDecorator {
    pub fn label(&self) -> Option<&str> {
        self.definition.label.as_deref()
    }

    pub fn mode(&self) -> Option<DecoratorMode> {
        self.definition.mode
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.definition.attributes
    }
}

/// Decorator records whose label can be localized.
pub trait DecoratorLabel {
    fn label_mut(&mut self) -> Option<&mut String>;
}

impl DecoratorLabel for LinkDecoratorDefinition {
    fn label_mut(&mut self) -> Option<&mut String> {
        self.label.as_mut()
    }
}

impl DecoratorLabel for NormalizedDecorator {
    fn label_mut(&mut self) -> Option<&mut String> {
        self.definition.label.as_mut()
    }
}

pub fn decorator_id(key: &str) -> String {
    format!("{DECORATOR_ID_PREFIX}{key}")
}

/// Converts the decorators mapping into a list with ids, keeping mapping order. An absent
/// mapping yields an empty list.
pub fn get_normalized_decorators(mapping: Option<&DecoratorsMapping>) -> Vec<NormalizedDecorator> {
    let Some(mapping) = mapping else {
        return Vec::new();
    };

    let out: Vec<NormalizedDecorator> = mapping
        .iter()
        .map(|(key, definition)| {
            let mut definition = definition.clone();
            // The synthesized id wins over a stray `id` field in the definition.
            definition.extra.retain(|field, _| field != "id");
            NormalizedDecorator {
                id: decorator_id(key),
                definition,
            }
        })
        .collect();

    tracing::trace!(count = out.len(), "normalized link decorators");
    out
}

/// Parses a raw `link.decorators` value. Falsy values (`null`, `false`, ...) mean "no
/// decorators"; only a truthy non-object is rejected. Individual definitions are not validated.
pub fn parse_decorators_mapping(value: &Value) -> Result<DecoratorsMapping> {
    if !is_truthy(value) {
        return Ok(DecoratorsMapping::new());
    }
    let Value::Object(entries) = value else {
        return Err(Error::InvalidDecorators {
            message: format!("expected an object of decorator definitions, got {value}"),
        });
    };
    Ok(entries
        .iter()
        .map(|(key, definition)| {
            (
                key.clone(),
                LinkDecoratorDefinition::from_value(definition.clone()),
            )
        })
        .collect())
}

/// Reads `link.decorators` from the editor config and normalizes it.
pub fn get_normalized_decorators_from_config(
    config: &LinkConfig,
) -> Result<Vec<NormalizedDecorator>> {
    let Some(raw) = config.decorators() else {
        return Ok(Vec::new());
    };
    let mapping = parse_decorators_mapping(raw)?;
    Ok(get_normalized_decorators(Some(&mapping)))
}

/// Returns `decorators` with the built-in labels ([`LOCALIZABLE_LABELS`]) translated through
/// `t`. Other labels, and decorators without a label, are left as they are.
///
/// Both built-in labels are translated on every call, whether or not a decorator uses them.
pub fn get_localized_decorators<T, D>(t: &T, decorators: Vec<D>) -> Vec<D>
where
    T: Translate + ?Sized,
    D: DecoratorLabel,
{
    let localized: IndexMap<&str, String> = LOCALIZABLE_LABELS
        .iter()
        .map(|&source| (source, t.translate(source)))
        .collect();

    decorators
        .into_iter()
        .map(|mut decorator| {
            if let Some(label) = decorator.label_mut() {
                // An empty translation keeps the original label.
                if let Some(translated) = localized.get(label.as_str()).filter(|s| !s.is_empty()) {
                    *label = translated.clone();
                }
            }
            decorator
        })
        .collect()
}
