//! Declarative filter definitions
//!
//! Describes route predicates in YAML so a site can be configured without
//! writing Rust. Definitions are compiled into predicates once at load time.

use super::predicates::{
    AllOf, AnyOf, FieldEquals, FieldExists, FieldMatches, MatchAll, Not, SharedPredicate,
};
use crate::error::{Error, Result};
use crate::types::{ContentItem, JsonValue};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Filter definition for a route
///
/// ```yaml
/// type: field_equals
/// field: category
/// value: news
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterDefinition {
    /// Include every item
    MatchAll,
    /// Field equals a value
    FieldEquals {
        /// Dotted path to the field
        field: String,
        /// Expected value
        value: JsonValue,
    },
    /// String field matches a regular expression
    FieldMatches {
        /// Dotted path to the field
        field: String,
        /// Regular expression
        pattern: String,
    },
    /// Field is present and not null
    FieldExists {
        /// Dotted path to the field
        field: String,
    },
    /// Every inner filter matches
    AllOf {
        /// Inner filters
        filters: Vec<FilterDefinition>,
    },
    /// At least one inner filter matches
    AnyOf {
        /// Inner filters
        filters: Vec<FilterDefinition>,
    },
    /// Inner filter does not match
    Not {
        /// Inner filter
        filter: Box<FilterDefinition>,
    },
}

impl FilterDefinition {
    /// Compile the definition into a predicate over content items
    pub fn compile(&self) -> Result<SharedPredicate<ContentItem>> {
        let predicate: SharedPredicate<ContentItem> = match self {
            Self::MatchAll => Arc::new(MatchAll),
            Self::FieldEquals { field, value } => {
                validate_field(field)?;
                Arc::new(FieldEquals::new(field, value.clone()))
            }
            Self::FieldMatches { field, pattern } => {
                validate_field(field)?;
                let regex = Regex::new(pattern).map_err(|e| {
                    Error::invalid_value(format!("pattern for field '{field}'"), e.to_string())
                })?;
                Arc::new(FieldMatches::new(field, regex))
            }
            Self::FieldExists { field } => {
                validate_field(field)?;
                Arc::new(FieldExists::new(field))
            }
            Self::AllOf { filters } => Arc::new(AllOf::new(compile_all(filters)?)),
            Self::AnyOf { filters } => Arc::new(AnyOf::new(compile_all(filters)?)),
            Self::Not { filter } => Arc::new(Not::new(filter.compile()?)),
        };
        Ok(predicate)
    }
}

fn compile_all(filters: &[FilterDefinition]) -> Result<Vec<SharedPredicate<ContentItem>>> {
    filters.iter().map(FilterDefinition::compile).collect()
}

fn validate_field(field: &str) -> Result<()> {
    if field.trim().is_empty() {
        return Err(Error::invalid_value("field", "must not be empty"));
    }
    Ok(())
}
