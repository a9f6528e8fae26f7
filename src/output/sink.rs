//! Publish sinks

use crate::error::Result;
use crate::types::{JsonObject, JsonValue};

/// Key the pagination state is published under
pub const PAGINATOR_KEY: &str = "paginator";

/// Destination for published template variables
pub trait PublishSink {
    /// Publish `value` under `key`, replacing any previous value for that key
    fn publish(&mut self, key: &str, value: JsonValue) -> Result<()>;
}

/// Template-variable registry handed to the rendering layer
///
/// Variables published by other plugins are kept; only the published key is
/// replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateVars {
    vars: JsonObject,
}

impl TemplateVars {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing variables
    pub fn from_object(vars: JsonObject) -> Self {
        Self { vars }
    }

    /// Get a variable
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.vars.get(key)
    }

    /// Check if a variable is set
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Set a variable
    pub fn insert(&mut self, key: impl Into<String>, value: JsonValue) -> Option<JsonValue> {
        self.vars.insert(key.into(), value)
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if no variables are set
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Borrow all variables
    pub fn as_object(&self) -> &JsonObject {
        &self.vars
    }

    /// Convert into a JSON object value
    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.vars)
    }
}

impl PublishSink for TemplateVars {
    fn publish(&mut self, key: &str, value: JsonValue) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

impl PublishSink for JsonObject {
    fn publish(&mut self, key: &str, value: JsonValue) -> Result<()> {
        self.insert(key.to_string(), value);
        Ok(())
    }
}
