//! View models handed to the presentation layer.
//!
//! A view names its template and carries the attributes the template reads.
//! Rendering proper happens outside this crate, so the response is the view
//! model itself as JSON.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
pub struct View {
    pub template: &'static str,
    pub model: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl View {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            model: Map::new(),
            notice: None,
        }
    }

    /// Register a model attribute. Values that cannot be serialized become `null`.
    pub fn with(mut self, name: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.model.insert(name.to_string(), value);
        self
    }

    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
