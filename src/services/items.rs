use crate::{
    db::DbPool,
    entities::item,
    errors::ServiceError,
    models::{Item, ItemDraft},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{info, instrument};

/// Service for managing tracked items
#[derive(Clone)]
pub struct ItemService {
    db: Arc<DbPool>,
}

impl ItemService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Lists all items in id order, with derived submit-by dates.
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<Item>, ServiceError> {
        let models = item::Entity::find()
            .order_by_asc(item::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Item::from_model).collect())
    }

    /// Gets an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> Result<Option<Item>, ServiceError> {
        let model = item::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Item::from_model))
    }

    /// Creates a new item
    #[instrument(skip(self, draft))]
    pub async fn create_item(&self, draft: ItemDraft) -> Result<Item, ServiceError> {
        validate_draft(&draft)?;

        let model = item::ActiveModel {
            manufacturer: Set(draft.manufacturer),
            item_type: Set(draft.item_type),
            description: Set(draft.description),
            lead_time_weeks: Set(draft.lead_time_weeks),
            due_date: Set(draft.due_date),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        info!(item_id = model.id, "item created");
        Ok(Item::from_model(model))
    }

    /// Updates an item in place. Full-row replace: every editable field takes
    /// the value from the draft, including absent ones.
    #[instrument(skip(self, draft))]
    pub async fn update_item(&self, id: i64, draft: ItemDraft) -> Result<Item, ServiceError> {
        validate_draft(&draft)?;

        let existing = item::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Item with ID {} not found", id)))?;

        let mut active: item::ActiveModel = existing.into();
        active.manufacturer = Set(draft.manufacturer);
        active.item_type = Set(draft.item_type);
        active.description = Set(draft.description);
        active.lead_time_weeks = Set(draft.lead_time_weeks);
        active.due_date = Set(draft.due_date);

        let model = active.update(self.db.as_ref()).await?;

        info!(item_id = id, "item updated");
        Ok(Item::from_model(model))
    }
}

fn validate_draft(draft: &ItemDraft) -> Result<(), ServiceError> {
    if let Some(weeks) = draft.lead_time_weeks {
        if weeks < 0 {
            return Err(ServiceError::InvalidInput(
                "lead_time_weeks must be non-negative".to_string(),
            ));
        }
    }
    Ok(())
}
