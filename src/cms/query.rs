//! GROQ query expressions

use serde_json::Value;

/// Fields projected for every post
const POST_FIELDS: &str = r#"_id,
    title,
    slug,
    excerpt,
    "image": featuredImage.asset->url,
    author->{name},
    publishedAt,
    category,
    tags,
    status"#;

/// A query expression with its bound parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    text: String,
    params: Vec<(String, Value)>,
}

impl Query {
    /// Create a query without parameters
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
        }
    }

    /// Bind `$name` to a JSON value
    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.push((name.to_string(), value.into()));
        self
    }

    /// The expression text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value bound to `$name`, if any
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// URL query pairs: `query` plus one `$name` per parameter, JSON-encoded
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 1);
        pairs.push(("query".to_string(), self.text.clone()));
        for (name, value) in &self.params {
            pairs.push((format!("${}", name), value.to_string()));
        }
        pairs
    }
}

/// Published posts, newest first
pub fn list_posts() -> Query {
    Query::new(format!(
        r#"*[_type == "blogPost" && status == "published"] | order(publishedAt desc) {{
    {}
}}"#,
        POST_FIELDS
    ))
}

/// A single published post with its body
pub fn post_by_id(id: &str) -> Query {
    Query::new(format!(
        r#"*[_id == $id && status == "published"] {{
    {},
    content
}}"#,
        POST_FIELDS
    ))
    .param("id", id)
}
