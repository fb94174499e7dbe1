use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::integration::error::{invalid_settings, IntegrationError, IntegrationResult};

/// String-keyed settings map as delivered by the analytics backend.
///
/// Values are kept as raw JSON and coerced on read, so a setting that arrives as
/// `"true"` is still readable through [`ValueMap::get_bool`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
    entries: Map<String, Value>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Parses a JSON document that must be an object at the top level.
    pub fn from_json_str(input: &str) -> IntegrationResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|err| invalid_settings(format!("settings are not valid JSON: {err}")))?;
        Self::try_from(value)
    }

    /// Builder-style insert, mostly useful when assembling settings by hand.
    pub fn put_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a boolean, accepting `"true"`/`"false"` strings in any ASCII case.
    /// Anything else falls back to `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.entries.get(key) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) if text.eq_ignore_ascii_case("true") => true,
            Some(Value::String(text)) if text.eq_ignore_ascii_case("false") => false,
            _ => default,
        }
    }

    /// Reads a string. Numbers and booleans are stringified; null, objects and arrays
    /// read as absent.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.entries.get(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn get_value_map(&self, key: &str) -> Option<ValueMap> {
        match self.entries.get(key)? {
            Value::Object(map) => Some(ValueMap::from_map(map.clone())),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }
}

impl TryFrom<Value> for ValueMap {
    type Error = IntegrationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(ValueMap::from_map(map)),
            other => Err(invalid_settings(format!(
                "settings must be a JSON object, found `{other}`"
            ))),
        }
    }
}

impl From<Map<String, Value>> for ValueMap {
    fn from(entries: Map<String, Value>) -> Self {
        ValueMap::from_map(entries)
    }
}
