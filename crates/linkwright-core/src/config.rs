use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Editor configuration as seen by the link helpers.
///
/// Hosts keep the whole editor config as one JSON object; the link feature reads its options
/// with dotted paths such as `link.decorators`. Key order is preserved, so decorator
/// definitions come back in the order they were written.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkConfig(Value);

impl Default for LinkConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl LinkConfig {
    pub const DECORATORS_PATH: &'static str = "link.decorators";

    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| Error::InvalidConfigJson {
            message: e.to_string(),
        })?;
        Ok(Self(value))
    }

    pub fn from_json5_str(text: &str) -> Result<Self> {
        let value: Value = json5::from_str(text).map_err(|e| Error::InvalidConfigJson5 {
            message: e.to_string(),
        })?;
        Ok(Self(value))
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| Error::InvalidConfigYaml {
                message: e.to_string(),
            })?;
        let value = serde_json::to_value(raw).map_err(|e| Error::InvalidConfigYaml {
            message: e.to_string(),
        })?;
        Ok(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Looks up a dotted path (`link.decorators`). Returns `None` if any segment is missing or
    /// an intermediate value is not an object.
    pub fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.get(dotted_path)?.as_bool()
    }

    /// The raw `link.decorators` value, if configured.
    pub fn decorators(&self) -> Option<&Value> {
        self.get(Self::DECORATORS_PATH)
    }
}
