//! The entity store: a handle over a SeaORM connection that enforces the
//! fitness tracker's integrity rules on every write.

pub mod cascade;
pub mod error;
pub mod kind;
pub mod seed;

mod activities;
mod leaderboard;
mod teams;
mod users;
mod validation;
mod workouts;

#[cfg(test)]
mod test_utils;

pub use error::{Result, StoreError};
pub use kind::EntityKind;
pub use leaderboard::Standing;

use migration::{Migrator, MigratorTrait};
use model::entities::prelude::*;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, EntityTrait, PaginatorTrait,
    TransactionTrait,
};
use tracing::{debug, error, info, trace};

use cascade::Scope;

/// Handle to the entity store.
///
/// Opened before use and closed afterwards; every operation goes through an
/// explicitly held `Store`.
#[derive(Debug, Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    /// Connects to `database_url` and brings the schema up to date.
    pub async fn open(database_url: &str) -> Result<Self> {
        trace!("Entering Store::open");
        debug!("Database URL: {}", database_url);

        let db = match Database::connect(database_url).await {
            Ok(connection) => {
                info!("Successfully connected to database");
                connection
            }
            Err(e) => {
                error!("Failed to connect to database '{}': {}", database_url, e);
                return Err(e.into());
            }
        };

        Self::from_connection(db).await
    }

    /// Wraps an existing connection, enabling foreign keys on SQLite and
    /// applying pending migrations.
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        if db.get_database_backend() == DbBackend::Sqlite {
            trace!("Enabling SQLite foreign key enforcement");
            db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
        }

        info!("Running database migrations");
        if let Err(e) = Migrator::up(&db, None).await {
            error!("Failed to run database migrations: {}", e);
            return Err(e.into());
        }
        debug!("All pending migrations have been applied");

        Ok(Self { db })
    }

    /// Closes the underlying connection pool.
    pub async fn close(self) -> Result<()> {
        trace!("Closing store");
        self.db.close().await?;
        Ok(())
    }

    /// Number of stored records of `kind`.
    pub async fn count(&self, kind: EntityKind) -> Result<u64> {
        let count = match kind {
            EntityKind::Team => Team::find().count(&self.db).await?,
            EntityKind::User => User::find().count(&self.db).await?,
            EntityKind::Activity => Activity::find().count(&self.db).await?,
            EntityKind::Workout => Workout::find().count(&self.db).await?,
            EntityKind::LeaderboardEntry => Leaderboard::find().count(&self.db).await?,
        };
        Ok(count)
    }

    /// Removes every record of `kind`, applying its delete rules first.
    /// Returns the number of `kind` records removed.
    pub async fn delete_all(&self, kind: EntityKind) -> Result<u64> {
        trace!(%kind, "Entering delete_all");
        let txn = self.db.begin().await?;
        let removed = cascade::delete(&txn, kind, Scope::All).await?;
        txn.commit().await?;
        info!(%kind, removed, "Deleted all records");
        Ok(removed)
    }
}
