//! SeaORM entity modules for the fitness tracker.
//! Five tables: teams, users, activities, workouts and the leaderboard.
//! Delete behavior between them is not declared here; the store applies it.

pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::activity::Entity as Activity;
    pub use super::leaderboard::Entity as Leaderboard;
    pub use super::team::Entity as Team;
    pub use super::user::Entity as User;
    pub use super::workout::Entity as Workout;
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let marvel = team::ActiveModel {
            name: Set("Marvel".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let ironman = user::ActiveModel {
            username: Set("ironman".to_string()),
            email: Set("ironman@marvel.com".to_string()),
            team_id: Set(Some(marvel.id)),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let loner = user::ActiveModel {
            username: Set("loner".to_string()),
            email: Set("loner@example.com".to_string()),
            team_id: Set(None),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let run = activity::ActiveModel {
            user_id: Set(ironman.id),
            activity_type: Set("Run".to_string()),
            duration: Set(30),
            calories: Set(300),
            timestamp: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        workout::ActiveModel {
            name: Set("Hero HIIT".to_string()),
            description: Set("High intensity workout for heroes".to_string()),
            difficulty: Set(workout::difficulty::HARD.to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        leaderboard::ActiveModel {
            user_id: Set(ironman.id),
            points: Set(1000),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back and verify data
        assert_eq!(marvel.to_string(), "Marvel");

        let members = marvel.find_related(User).all(&db).await?;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, ironman.id);

        let team_of_loner = loner.find_related(Team).one(&db).await?;
        assert!(team_of_loner.is_none());

        let activities = ironman.find_related(Activity).all(&db).await?;
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0], run);
        assert_eq!(activities[0].activity_type, "Run");

        let workouts = Workout::find().all(&db).await?;
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].difficulty, workout::difficulty::HARD);

        let entries = Leaderboard::find()
            .find_also_related(User)
            .filter(leaderboard::Column::Points.gte(500))
            .all(&db)
            .await?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0.points, 1000);
        assert_eq!(entries[0].1.as_ref().map(|u| u.username.as_str()), Some("ironman"));

        Ok(())
    }

    #[tokio::test]
    async fn test_schema_rejects_duplicate_email() -> Result<(), DbErr> {
        let db = setup_db().await?;

        user::ActiveModel {
            username: Set("batman".to_string()),
            email: Set("batman@dc.com".to_string()),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let duplicate = user::ActiveModel {
            username: Set("bruce".to_string()),
            email: Set("batman@dc.com".to_string()),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await;

        assert!(duplicate.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_schema_rejects_dangling_user_reference() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let orphan = leaderboard::ActiveModel {
            user_id: Set(999),
            points: Set(10),
            ..Default::default()
        }
        .insert(&db)
        .await;

        assert!(orphan.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_schema_rejects_negative_points() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let user = user::ActiveModel {
            username: Set("superman".to_string()),
            email: Set("superman@dc.com".to_string()),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let negative = leaderboard::ActiveModel {
            user_id: Set(user.id),
            points: Set(-1),
            ..Default::default()
        }
        .insert(&db)
        .await;

        assert!(negative.is_err());
        Ok(())
    }
}
