//! Execution engine module
//!
//! Per-request orchestration of offset parsing, route filtering, pagination
//! and navigation.
//!
//! # Overview
//!
//! The engine module provides:
//! - `RequestCoordinator` - Runs one request from notification to published state
//! - `ResolvedRequest` - A computed state that has not been published yet
//! - `RequestContext` / `PaginationState` - Request input and output
//!
//! A request moves Idle → Resolved → Published synchronously inside one
//! call. The coordinator only borrows the immutable configuration, so nothing
//! computed for one request is visible to the next.

mod types;

pub use types::{PaginationState, RequestContext, RequestPhase};

use crate::config::PaginationConfig;
use crate::error::Result;
use crate::navigation::build_navigation;
use crate::output::{PublishSink, PAGINATOR_KEY};
use crate::pagination::Pager;
use crate::repository::ItemRepository;
use serde::Serialize;
use tracing::{debug, warn};

/// Coordinates pagination for incoming requests
#[derive(Debug)]
pub struct RequestCoordinator<'c, T> {
    /// Shared, read-only configuration
    config: &'c PaginationConfig<T>,
}

impl<'c, T> Clone for RequestCoordinator<'c, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'c, T> Copy for RequestCoordinator<'c, T> {}

impl<'c, T: Clone> RequestCoordinator<'c, T> {
    /// Create a coordinator over a configuration
    pub fn new(config: &'c PaginationConfig<T>) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &'c PaginationConfig<T> {
        self.config
    }

    /// Resolve a request against the repository's full item set
    pub fn resolve(
        &self,
        ctx: &RequestContext,
        repository: &dyn ItemRepository<T>,
    ) -> Result<ResolvedRequest<T>> {
        let items = repository.find_all()?;
        self.resolve_items(ctx, &items)
    }

    /// Resolve a request against an already loaded item set
    pub fn resolve_items(&self, ctx: &RequestContext, items: &[T]) -> Result<ResolvedRequest<T>> {
        debug!(phase = %RequestPhase::Idle, "Handling request '{}'", ctx.raw_request_uri);
        let config = self.config;
        let offset = config.offset_parser().parse(&ctx.raw_request_uri);

        let filter = config.routes().resolve(&ctx.raw_path);
        if filter.is_none() {
            debug!("No filter registered for route '{}'", ctx.raw_path);
        }

        let pages = Pager::new(config.items_per_page()).pages(items, filter.as_ref())?;

        let template = config.uri_template_for(&ctx.decoded_path());
        let navigation = build_navigation(offset, config.first_page(), pages.len(), &template);

        let state = PaginationState {
            offset,
            navigation,
            pages,
            first_page: config.first_page(),
        };

        if state.offset != 0 && !state.is_in_range() {
            warn!(
                "Requested page {} of route '{}' does not exist ({} pages)",
                state.current_page(),
                ctx.raw_path,
                state.page_count()
            );
        }

        debug!(
            phase = %RequestPhase::Resolved,
            "Route '{}': offset {}, {} items in {} pages",
            ctx.raw_path,
            state.offset,
            state.item_count(),
            state.page_count()
        );

        Ok(ResolvedRequest {
            route: ctx.raw_path.clone(),
            state,
        })
    }
}

impl<'c, T: Clone + Serialize> RequestCoordinator<'c, T> {
    /// Handle a request end to end: resolve, publish, and return the state.
    ///
    /// A fresh state is published on every request, filtered or not.
    pub fn handle(
        &self,
        ctx: &RequestContext,
        repository: &dyn ItemRepository<T>,
        sink: &mut dyn PublishSink,
    ) -> Result<PaginationState<T>> {
        self.resolve(ctx, repository)?.publish(sink)
    }
}

/// Pagination state computed for a request but not yet published
#[derive(Debug, Clone)]
pub struct ResolvedRequest<T> {
    route: String,
    state: PaginationState<T>,
}

impl<T> ResolvedRequest<T> {
    /// Current lifecycle phase
    pub fn phase(&self) -> RequestPhase {
        RequestPhase::Resolved
    }

    /// Route the state was computed for
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Computed state
    pub fn state(&self) -> &PaginationState<T> {
        &self.state
    }

    /// Take the state without publishing it
    pub fn into_state(self) -> PaginationState<T> {
        self.state
    }
}

impl<T: Serialize> ResolvedRequest<T> {
    /// Publish the state under the paginator key and hand it back
    pub fn publish(self, sink: &mut dyn PublishSink) -> Result<PaginationState<T>> {
        sink.publish(PAGINATOR_KEY, self.state.to_value()?)?;
        debug!(
            phase = %RequestPhase::Published,
            "Published pagination state for route '{}'",
            self.route
        );
        Ok(self.state)
    }
}
