use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Foreign keys restrict deletes. Cascades and set-null are carried out by the
// store before the owning row is removed.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create teams table
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(pk_auto(Teams::Id))
                    .col(string_len(Teams::Name, 100).unique_key())
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::Username, 150).unique_key())
                    .col(string_len(Users::Email, 254).unique_key())
                    .col(integer_null(Users::TeamId))
                    .col(timestamp_with_time_zone(Users::DateJoined))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_team")
                            .from(Users::Table, Users::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create activities table
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(pk_auto(Activities::Id))
                    .col(integer(Activities::UserId))
                    .col(string_len(Activities::Type, 50))
                    .col(integer(Activities::Duration).check(Expr::col(Activities::Duration).gte(0)))
                    .col(integer(Activities::Calories).check(Expr::col(Activities::Calories).gte(0)))
                    .col(timestamp_with_time_zone(Activities::Timestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_user")
                            .from(Activities::Table, Activities::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create workouts table
        manager
            .create_table(
                Table::create()
                    .table(Workouts::Table)
                    .if_not_exists()
                    .col(pk_auto(Workouts::Id))
                    .col(string_len(Workouts::Name, 100))
                    .col(text(Workouts::Description))
                    .col(string_len(Workouts::Difficulty, 20))
                    .to_owned(),
            )
            .await?;

        // Create leaderboard table
        manager
            .create_table(
                Table::create()
                    .table(Leaderboard::Table)
                    .if_not_exists()
                    .col(pk_auto(Leaderboard::Id))
                    .col(integer(Leaderboard::UserId))
                    .col(integer(Leaderboard::Points).check(Expr::col(Leaderboard::Points).gte(0)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaderboard_user")
                            .from(Leaderboard::Table, Leaderboard::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order of creation to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(Leaderboard::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Workouts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    TeamId,
    DateJoined,
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
    UserId,
    Type,
    Duration,
    Calories,
    Timestamp,
}

#[derive(DeriveIden)]
enum Workouts {
    Table,
    Id,
    Name,
    Description,
    Difficulty,
}

#[derive(DeriveIden)]
enum Leaderboard {
    Table,
    Id,
    UserId,
    Points,
}
