//! Post model

use serde::{Deserialize, Deserializer, Serialize};

/// A published article as returned by the content API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier (not selected by every query)
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,

    /// Post title, inserted verbatim
    pub title: String,

    /// URL segment and output directory name
    pub slug: String,

    /// Pre-rendered HTML body
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_html: String,

    /// ISO-8601 publication timestamp
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
}

impl Post {
    /// Create a post with the fields the renderer uses
    pub fn new(title: &str, slug: &str, content_html: &str, published_at: &str) -> Self {
        Self {
            id: String::new(),
            title: title.to_string(),
            slug: slug.to_string(),
            content_html: content_html.to_string(),
            published_at: published_at.to_string(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Supabase ids may be uuids or bigints
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
