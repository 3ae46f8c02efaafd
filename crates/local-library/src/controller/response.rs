//! What a controller action produces. Turning it into bytes is the HTTP layer's job.

use serde::Serialize;
use serde_json::Value;

/// A named template plus the data it is rendered with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub name: String,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Render a view with status 200.
    Render(View),
    /// Redirect the client (302) to a path.
    Redirect(String),
    /// A plain-text body.
    Text(String),
}

impl Response {
    pub fn render(name: impl Into<String>, data: Value) -> Self {
        Self::Render(View {
            name: name.into(),
            data,
        })
    }

    pub fn redirect(to: impl Into<String>) -> Self {
        Self::Redirect(to.into())
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self::Text(body.into())
    }

    /// The rendered view, if this is a render.
    pub fn view(&self) -> Option<&View> {
        match self {
            Self::Render(view) => Some(view),
            _ => None,
        }
    }
}
