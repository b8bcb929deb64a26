use chrono::Utc;
use model::entities::user;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info, trace, warn};
use validator::Validate;

use crate::cascade::{self, Scope};
use crate::error::{Result, StoreError};
use crate::kind::EntityKind;
use crate::validation::NewUser;
use crate::Store;

impl Store {
    /// Creates a user, optionally as a member of `team_id`.
    ///
    /// Usernames and emails are unique. The email's domain is stored
    /// lower-cased, so uniqueness is checked against the normalized form.
    /// The email is not otherwise checked for shape.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        team_id: Option<i32>,
    ) -> Result<user::Model> {
        trace!("Entering create_user");
        debug!("Creating user with username: {}", username);

        let input = NewUser::new(username, email, team_id);
        input.validate()?;
        let email = &input.email;

        if self.find_user_by_username(username).await?.is_some() {
            warn!("Username '{}' already exists", username);
            return Err(StoreError::ConstraintViolation(format!(
                "username '{}' already exists",
                username
            )));
        }
        if self.find_user_by_email(email).await?.is_some() {
            warn!("Email '{}' already exists", email);
            return Err(StoreError::ConstraintViolation(format!(
                "email '{}' already exists",
                email
            )));
        }
        if let Some(team_id) = team_id {
            if self.find_team(team_id).await?.is_none() {
                warn!("Team with ID {} does not exist", team_id);
                return Err(StoreError::Reference(format!(
                    "team {} does not exist",
                    team_id
                )));
            }
        }

        let user = user::ActiveModel {
            username: Set(input.username),
            email: Set(input.email),
            team_id: Set(input.team_id),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("User created with ID: {}, username: {}", user.id, user.username);
        Ok(user)
    }

    pub async fn find_user(&self, id: i32) -> Result<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// All users in creation order.
    pub async fn users(&self) -> Result<Vec<user::Model>> {
        Ok(user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Deletes one user together with their activities and leaderboard entries.
    pub async fn delete_user(&self, id: i32) -> Result<()> {
        trace!("Entering delete_user");
        let txn = self.db.begin().await?;

        if user::Entity::find_by_id(id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            warn!("User with ID {} not found", id);
            return Err(StoreError::NotFound(format!("user {}", id)));
        }

        cascade::delete(&txn, EntityKind::User, Scope::One(id)).await?;
        txn.commit().await?;

        debug!("User {} deleted", id);
        Ok(())
    }
}
