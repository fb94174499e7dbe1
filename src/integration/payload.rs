//! Lifecycle payloads dispatched by the analytics pipeline to its integrations.
//!
//! Each payload carries the common envelope (`messageId`, `anonymousId`, `timestamp`) plus the
//! fields specific to its call. The JSON form uses the camelCase names of the analytics wire
//! format so payloads can be replayed from captured batches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const USER_ID_TRAIT: &str = "userId";
const ANONYMOUS_ID_TRAIT: &str = "anonymousId";

/// Open mapping of user attributes supplied at identify time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Traits {
    entries: Map<String, Value>,
}

impl Traits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn put_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn with_user_id(self, user_id: impl Into<String>) -> Self {
        self.put_value(USER_ID_TRAIT, user_id.into())
    }

    pub fn with_anonymous_id(self, anonymous_id: impl Into<String>) -> Self {
        self.put_value(ANONYMOUS_ID_TRAIT, anonymous_id.into())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.entries.get(USER_ID_TRAIT).and_then(Value::as_str)
    }

    pub fn anonymous_id(&self) -> Option<&str> {
        self.entries.get(ANONYMOUS_ID_TRAIT).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }
}

/// Envelope fields shared by every payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePayload {
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl BasePayload {
    fn generate() -> Self {
        Self {
            message_id: generate_message_id(),
            anonymous_id: None,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyPayload {
    #[serde(flatten)]
    pub base: BasePayload,
    pub user_id: String,
    #[serde(default)]
    pub traits: Traits,
}

impl IdentifyPayload {
    pub fn new(user_id: impl Into<String>, traits: Traits) -> Self {
        Self {
            base: BasePayload::generate(),
            user_id: user_id.into(),
            traits,
        }
    }

    /// Identify call driven by traits alone; the user id is taken from the `userId` trait
    /// and is empty when the traits carry none.
    pub fn from_traits(traits: Traits) -> Self {
        let user_id = traits.user_id().unwrap_or_default().to_string();
        let mut payload = Self::new(user_id, traits);
        payload.base.anonymous_id = payload.traits.anonymous_id().map(str::to_string);
        payload
    }

    pub fn with_anonymous_id(mut self, anonymous_id: impl Into<String>) -> Self {
        self.base.anonymous_id = Some(anonymous_id.into());
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn traits(&self) -> &Traits {
        &self.traits
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenPayload {
    #[serde(flatten)]
    pub base: BasePayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl ScreenPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BasePayload::generate(),
            name: Some(name.into()),
            category: None,
            properties: Map::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// Screen name, or the category when the name is missing or empty.
    pub fn event(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.category.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPayload {
    #[serde(flatten)]
    pub base: BasePayload,
    pub event: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl TrackPayload {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            base: BasePayload::generate(),
            event: event.into(),
            properties: Map::new(),
        }
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    pub fn event(&self) -> &str {
        &self.event
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPayload {
    #[serde(flatten)]
    pub base: BasePayload,
    pub group_id: String,
    #[serde(default)]
    pub traits: Traits,
}

impl GroupPayload {
    pub fn new(group_id: impl Into<String>, traits: Traits) -> Self {
        Self {
            base: BasePayload::generate(),
            group_id: group_id.into(),
            traits,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasPayload {
    #[serde(flatten)]
    pub base: BasePayload,
    pub user_id: String,
    pub previous_id: String,
}

impl AliasPayload {
    pub fn new(user_id: impl Into<String>, previous_id: impl Into<String>) -> Self {
        Self {
            base: BasePayload::generate(),
            user_id: user_id.into(),
            previous_id: previous_id.into(),
        }
    }
}

fn generate_message_id() -> String {
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .map(char::from)
        .take(32)
        .collect()
}
