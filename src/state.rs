use std::sync::Arc;

use crate::recommender::CatalogIndex;
use crate::store::ProfileStore;

/// Bounds on the `count` query parameter.
#[derive(Debug, Clone, Copy)]
pub struct ResultLimits {
    /// Used when the request omits `count`.
    pub default_count: usize,
    /// Largest `count` a request may ask for.
    pub max_count: usize,
}

/// Shared application state.
///
/// The catalog index is immutable after startup, so it is shared as a
/// plain `Arc` with no lock; concurrent request handlers only ever read
/// it. The store is the one external collaborator with its own state.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<CatalogIndex>,
    pub store: Arc<dyn ProfileStore>,
    pub limits: ResultLimits,
}
