pub mod categories;
pub mod common;
pub mod health;
pub mod items;

use crate::db::DbPool;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub items: Arc<crate::services::items::ItemService>,
    pub categories: Arc<crate::services::categories::CategoryService>,
}

impl AppServices {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            items: Arc::new(crate::services::items::ItemService::new(db.clone())),
            categories: Arc::new(crate::services::categories::CategoryService::new(db)),
        }
    }
}
