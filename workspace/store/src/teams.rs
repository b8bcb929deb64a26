use model::entities::{team, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info, trace, warn};
use validator::Validate;

use crate::cascade::{self, Scope};
use crate::error::{Result, StoreError};
use crate::kind::EntityKind;
use crate::validation::NewTeam;
use crate::Store;

impl Store {
    /// Creates a team. Team names are unique.
    pub async fn create_team(&self, name: &str) -> Result<team::Model> {
        trace!("Entering create_team");
        let input = NewTeam {
            name: name.to_string(),
        };
        input.validate()?;

        if self.find_team_by_name(name).await?.is_some() {
            warn!("Team '{}' already exists", name);
            return Err(StoreError::ConstraintViolation(format!(
                "team name '{}' already exists",
                name
            )));
        }

        let team = team::ActiveModel {
            name: Set(input.name),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("Team created with ID: {}, name: {}", team.id, team.name);
        Ok(team)
    }

    pub async fn find_team(&self, id: i32) -> Result<Option<team::Model>> {
        Ok(team::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_team_by_name(&self, name: &str) -> Result<Option<team::Model>> {
        Ok(team::Entity::find()
            .filter(team::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    /// All teams in creation order.
    pub async fn teams(&self) -> Result<Vec<team::Model>> {
        Ok(team::Entity::find()
            .order_by_asc(team::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Users whose team reference points at `team_id`, in creation order.
    pub async fn team_members(&self, team_id: i32) -> Result<Vec<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::TeamId.eq(team_id))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Deletes one team. Its members stay, with their team reference cleared.
    pub async fn delete_team(&self, id: i32) -> Result<()> {
        trace!("Entering delete_team");
        let txn = self.db.begin().await?;

        if team::Entity::find_by_id(id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            warn!("Team with ID {} not found", id);
            return Err(StoreError::NotFound(format!("team {}", id)));
        }

        cascade::delete(&txn, EntityKind::Team, Scope::One(id)).await?;
        txn.commit().await?;

        debug!("Team {} deleted", id);
        Ok(())
    }
}
