use model::entities::{leaderboard, user};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::{debug, info, trace, warn};
use validator::Validate;

use crate::error::{Result, StoreError};
use crate::validation::NewLeaderboardEntry;
use crate::Store;

/// A leaderboard entry with its position and owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    /// 1-based position, highest points first.
    pub rank: usize,
    pub entry: leaderboard::Model,
    pub user: user::Model,
}

impl Store {
    pub async fn create_leaderboard_entry(
        &self,
        user_id: i32,
        points: i32,
    ) -> Result<leaderboard::Model> {
        trace!("Entering create_leaderboard_entry");
        debug!("Creating leaderboard entry of {} points for user {}", points, user_id);

        let input = NewLeaderboardEntry { user_id, points };
        input.validate()?;

        if self.find_user(user_id).await?.is_none() {
            warn!("User with ID {} does not exist", user_id);
            return Err(StoreError::Reference(format!("user {} does not exist", user_id)));
        }

        let entry = leaderboard::ActiveModel {
            user_id: Set(input.user_id),
            points: Set(input.points),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("Leaderboard entry created with ID: {}", entry.id);
        Ok(entry)
    }

    pub async fn find_leaderboard_entry(&self, id: i32) -> Result<Option<leaderboard::Model>> {
        Ok(leaderboard::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// All entries in creation order.
    pub async fn leaderboard_entries(&self) -> Result<Vec<leaderboard::Model>> {
        Ok(leaderboard::Entity::find()
            .order_by_asc(leaderboard::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Entries ranked by points, highest first. Ties keep creation order.
    pub async fn leaderboard(&self) -> Result<Vec<Standing>> {
        let rows = leaderboard::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(leaderboard::Column::Points)
            .order_by_asc(leaderboard::Column::Id)
            .all(&self.db)
            .await?;

        let mut standings = Vec::with_capacity(rows.len());
        for (entry, user) in rows {
            let user = user.ok_or_else(|| {
                StoreError::Reference(format!(
                    "leaderboard entry {} points at missing user {}",
                    entry.id, entry.user_id
                ))
            })?;
            standings.push(Standing {
                rank: standings.len() + 1,
                entry,
                user,
            });
        }
        Ok(standings)
    }
}
