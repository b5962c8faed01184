//! Static visual template rendered on screen-capable devices.
//!
//! The APL document ships inside the binary and is parsed once during
//! bootstrap. Invocations share the parsed document read-only; the dynamic
//! part of the screen travels in the directive's data sources.

use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

const PLAYLIST_DETAIL_DOCUMENT: &str = include_str!("../assets/playlist_detail.json");

/// Errors raised while loading the visual template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The document is not valid JSON.
    #[error("invalid visual template: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but is not a JSON object.
    #[error("visual template must be a JSON object")]
    NotAnObject,
}

/// Parsed APL document shared by every invocation.
#[derive(Debug, Clone)]
pub struct VisualTemplate {
    document: Arc<Value>,
}

impl VisualTemplate {
    /// Parses the document bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the bundled document is malformed.
    pub fn bundled() -> Result<Self, TemplateError> {
        Self::from_json(PLAYLIST_DETAIL_DOCUMENT)
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the text is not a JSON object.
    pub fn from_json(text: &str) -> Result<Self, TemplateError> {
        let document: Value = serde_json::from_str(text)?;
        if !document.is_object() {
            return Err(TemplateError::NotAnObject);
        }
        Ok(Self {
            document: Arc::new(document),
        })
    }

    /// The parsed document.
    #[must_use]
    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl PartialEq for VisualTemplate {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.document, &other.document) || self.document == other.document
    }
}

impl Serialize for VisualTemplate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.document.as_ref().serialize(serializer)
    }
}
