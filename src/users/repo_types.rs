use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// User record held by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,                      // surrogate ID, assigned by the store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,     // plain text, placeholder login only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Fields supplied on creation; everything but the ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default, alias = "firstname", deserialize_with = "free_text")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastname", deserialize_with = "free_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "free_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "free_text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "free_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "free_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "free_text")]
    pub gender: Option<String>,
}

impl User {
    pub fn from_new(id: i64, new: NewUser) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            username: new.username,
            password: new.password,
            email: new.email,
            country: new.country,
            gender: new.gender,
        }
    }
}

/// Accepts any JSON value for an unvalidated text field.
/// `null` is absent, strings are kept, anything else keeps its JSON text.
pub(crate) fn free_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
