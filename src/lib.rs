// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Content Paginator
//!
//! Request-scoped pagination for content hosts: given the full item list,
//! a per-route filter, a page size and the current request, compute the
//! pages and the first/previous/next/last links a template needs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use content_paginator::config::PaginationConfig;
//! use content_paginator::engine::{RequestContext, RequestCoordinator};
//! use content_paginator::output::TemplateVars;
//! use content_paginator::repository::InMemoryRepository;
//! use content_paginator::route::FieldEquals;
//!
//! let config = PaginationConfig::new("page", 1, 10)?
//!     .with_route("/news", FieldEquals::new("category", "news"));
//!
//! let repository = InMemoryRepository::new(load_posts());
//! let mut vars = TemplateVars::new();
//! let ctx = RequestContext::new("news", "/news?page=2");
//!
//! let state = RequestCoordinator::new(&config).handle(&ctx, &repository, &mut vars)?;
//! assert_eq!(state.offset, 1);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     Request Coordinator                       │
//! │   RequestContext → resolve() → ResolvedRequest → publish()    │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┼───────────────┬───────────────┐
//! │    Offset    │     Route     │     Pager     │  Navigation   │
//! ├──────────────┼───────────────┼───────────────┼───────────────┤
//! │ ?page=N      │ /path →       │ select_items  │ first / prev  │
//! │ − first_page │   predicate   │ paginate      │ next / last   │
//! └──────────────┴───────────────┴───────────────┴───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration loading and the immutable runtime config
pub mod config;

/// Page offset extraction from request URIs
pub mod offset;

/// Route predicates and the route registry
pub mod route;

/// Item selection and page partitioning
pub mod pagination;

/// Navigation links
pub mod navigation;

/// Publish sinks for template variables
pub mod output;

/// Item repositories
pub mod repository;

/// Per-request coordination
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, PaginationConfig, PaginatorSettings};
pub use engine::{PaginationState, RequestContext, RequestCoordinator};
pub use error::{Error, Result};
pub use navigation::NavigationLinks;
pub use output::{PublishSink, TemplateVars, PAGINATOR_KEY};
pub use route::RoutePredicate;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
