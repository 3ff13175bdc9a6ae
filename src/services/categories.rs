use crate::{db::DbPool, entities::category, errors::ServiceError, models::Category};
use sea_orm::{EntityTrait, QueryOrder};
use std::sync::Arc;
use tracing::instrument;

/// Service exposing the category lookup relation
#[derive(Clone)]
pub struct CategoryService {
    db: Arc<DbPool>,
}

impl CategoryService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Lists all categories in alphabetical order.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Category)
            .all(self.db.as_ref())
            .await?;
        Ok(models
            .into_iter()
            .map(|model| Category {
                category: model.category,
            })
            .collect())
    }
}
