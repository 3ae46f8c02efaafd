//! # View Rendering
//!
//! The controller decides *which* view to show and with what data; a [`ViewRenderer`]
//! decides what that looks like on the wire.

use crate::controller::View;
use serde_json::json;

pub trait ViewRenderer: Send + Sync {
    /// The response body for `view`.
    fn render(&self, view: &View) -> String;

    /// `Content-Type` of what [`render`](Self::render) produces.
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

/// Emits the view as `{"view": name, "data": ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ViewRenderer for JsonRenderer {
    fn render(&self, view: &View) -> String {
        json!({ "view": view.name, "data": view.data }).to_string()
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
