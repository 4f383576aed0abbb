//! Post models as returned by the content store

use serde::{Deserialize, Deserializer, Serialize};

/// Post author, projected from the author reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
}

/// URL slug object (`{ "current": "my-post" }`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: String,
}

/// A post as listed on the index page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Identifier assigned by the content store
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Never rendered; shapes other than a slug object read as absent
    #[serde(default, deserialize_with = "lenient_slug")]
    pub slug: Option<Slug>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Featured image URL
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub author: Option<Author>,

    /// Publication timestamp, RFC 3339
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub status: Option<String>,
}

impl PostSummary {
    /// Author display name, if the post has a named author
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Category, if set and non-empty
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// A post with its body, as shown on the detail page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: PostSummary,

    /// Post body; shapes other than a string or a block list read as absent
    #[serde(default, deserialize_with = "lenient_body")]
    pub content: Option<Body>,
}

/// Post body: a markdown document or a list of rich-text blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Markdown(String),
    Blocks(Vec<Block>),
}

/// A rich-text block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "_type", default)]
    pub kind: String,

    /// Paragraph style such as `normal` or `h2`
    #[serde(default)]
    pub style: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Span>,
}

/// A text-bearing child of a block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_slug<'de, D>(deserializer: D) -> Result<Option<Slug>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_body<'de, D>(deserializer: D) -> Result<Option<Body>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match serde_json::from_value(v) {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::debug!("Ignoring post content of unexpected shape: {}", e);
            None
        }
    }))
}
