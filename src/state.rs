use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::metrics::HitCounter;
use crate::store::Store;

/// The shared application state.
///
/// Handed to every handler and to the visit-counting middleware through
/// axum's `State` extractor. Cloning is cheap; clones share the store pool,
/// the configuration and the hit counter.
#[derive(Clone)]
pub struct AppState {
    /// Persistence for users and chirps.
    pub store: Store,
    /// The configuration the process started with.
    pub config: Arc<AppConfig>,
    /// Visits to `/app/*`.
    pub hits: HitCounter,
}

impl AppState {
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let store = Store::new(db, config.database.query_timeout());
        Self { store, config: Arc::new(config), hits: HitCounter::new() }
    }
}
