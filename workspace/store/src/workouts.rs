use model::entities::workout;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::{info, trace};
use validator::Validate;

use crate::error::Result;
use crate::validation::NewWorkout;
use crate::Store;

impl Store {
    /// Creates a workout. Workouts reference nothing and nothing references them.
    pub async fn create_workout(
        &self,
        name: &str,
        description: &str,
        difficulty: &str,
    ) -> Result<workout::Model> {
        trace!("Entering create_workout");
        let input = NewWorkout {
            name: name.to_string(),
            description: description.to_string(),
            difficulty: difficulty.to_string(),
        };
        input.validate()?;

        let workout = workout::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            difficulty: Set(input.difficulty),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("Workout created with ID: {}, name: {}", workout.id, workout.name);
        Ok(workout)
    }

    pub async fn find_workout(&self, id: i32) -> Result<Option<workout::Model>> {
        Ok(workout::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// All workouts in creation order.
    pub async fn workouts(&self) -> Result<Vec<workout::Model>> {
        Ok(workout::Entity::find()
            .order_by_asc(workout::Column::Id)
            .all(&self.db)
            .await?)
    }
}
