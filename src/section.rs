//! Wedge content model

use serde::{Deserialize, Serialize};

/// Content of one wheel wedge.
///
/// `id` must be unique within a wheel and stable across renders; it is the
/// key hosts use to correlate layout output and spin results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Opaque unique key
    pub id: String,
    /// Required label text
    pub title: String,
    /// Optional secondary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Wedge fill color (any renderer-accepted format)
    pub background_color: String,
    /// Text color; hosts fall back to white when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Optional renderable image reference (URL, asset key, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        background_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            background_color: background_color.into(),
            text_color: None,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
