use serde::{Deserialize, Serialize};

/// Normalized search result, decoupled from the provider's raw volume schema.
///
/// `title` stays absent when the provider omits it; display defaulting is the
/// consumer's job. `authors` and `categories` are always present so consumers
/// can iterate unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
