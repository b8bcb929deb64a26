use chrono::Utc;
use model::entities::activity;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info, trace, warn};
use validator::Validate;

use crate::error::{Result, StoreError};
use crate::validation::NewActivity;
use crate::Store;

impl Store {
    /// Logs an activity for `user_id`, stamped with the current time.
    /// `duration` is in minutes; neither it nor `calories` may be negative.
    pub async fn create_activity(
        &self,
        user_id: i32,
        activity_type: &str,
        duration: i32,
        calories: i32,
    ) -> Result<activity::Model> {
        trace!("Entering create_activity");
        debug!(
            "Creating activity '{}' ({} min, {} kcal) for user {}",
            activity_type, duration, calories, user_id
        );

        let input = NewActivity {
            user_id,
            activity_type: activity_type.to_string(),
            duration,
            calories,
        };
        input.validate()?;

        if self.find_user(user_id).await?.is_none() {
            warn!("User with ID {} does not exist", user_id);
            return Err(StoreError::Reference(format!("user {} does not exist", user_id)));
        }

        let activity = activity::ActiveModel {
            user_id: Set(input.user_id),
            activity_type: Set(input.activity_type),
            duration: Set(input.duration),
            calories: Set(input.calories),
            timestamp: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("Activity created with ID: {}", activity.id);
        Ok(activity)
    }

    pub async fn find_activity(&self, id: i32) -> Result<Option<activity::Model>> {
        Ok(activity::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// All activities in creation order.
    pub async fn activities(&self) -> Result<Vec<activity::Model>> {
        Ok(activity::Entity::find()
            .order_by_asc(activity::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn activities_for_user(&self, user_id: i32) -> Result<Vec<activity::Model>> {
        Ok(activity::Entity::find()
            .filter(activity::Column::UserId.eq(user_id))
            .order_by_asc(activity::Column::Id)
            .all(&self.db)
            .await?)
    }
}
