//! Render targets

/// A page region whose content is replaced wholesale
pub trait Container {
    /// Replace the content of the container
    fn replace(&mut self, html: String);
}

/// In-memory container holding the HTML of one page region
#[derive(Debug, Clone)]
pub struct HtmlContainer {
    id: String,
    html: String,
}

impl HtmlContainer {
    /// Create a container showing `loading_html` until it is replaced
    pub fn new(id: impl Into<String>, loading_html: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            html: loading_html.into(),
        }
    }

    /// Element id of the container
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current content
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Take the content, consuming the container
    pub fn into_html(self) -> String {
        self.html
    }
}

impl Container for HtmlContainer {
    fn replace(&mut self, html: String) {
        self.html = html;
    }
}
