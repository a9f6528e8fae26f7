//! Output module
//!
//! Hands the computed pagination state to the rendering layer.
//!
//! # Overview
//!
//! The output module provides:
//! - `PublishSink` - Destination the request coordinator publishes into
//! - `TemplateVars` - Template-variable registry keeping other variables intact
//! - `PAGINATOR_KEY` - Well-known key the pagination state is published under

mod sink;

pub use sink::{PublishSink, TemplateVars, PAGINATOR_KEY};
