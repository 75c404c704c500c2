//! Normalized session records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::widget::{AuthenticationResult, Profile};

/// Key under which the identity token is stored in every record.
pub const ID_TOKEN_KEY: &str = "idToken";

/// Application-facing combination of profile data and identity token.
///
/// Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionRecord(Map<String, Value>);

impl SessionRecord {
    /// Merge a profile and an authentication result into a record.
    ///
    /// Non-null profile fields are copied as-is. The identity token is then
    /// written under [`ID_TOKEN_KEY`], overwriting any profile field of the
    /// same name. A missing token is stored as `null` so the key is always
    /// present.
    pub fn build(profile: Option<&Profile>, auth: &AuthenticationResult) -> Self {
        let mut fields: Map<String, Value> = profile
            .into_iter()
            .flatten()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let token = auth
            .id_token
            .as_ref()
            .map_or(Value::Null, |t| Value::String(t.clone()));
        fields.insert(ID_TOKEN_KEY.to_string(), token);

        Self(fields)
    }

    /// The identity token carried by this record.
    pub fn id_token(&self) -> Option<&str> {
        self.0.get(ID_TOKEN_KEY).and_then(Value::as_str)
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the record, returning the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}
