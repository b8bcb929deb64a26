//! Delete rules between entity kinds.
//!
//! The schema only restricts deletes of referenced rows. Each rule here says:
//! deleting an owner of kind X triggers an action over dependent table Y via
//! foreign key K. Rules run inside the same transaction as the owner delete,
//! before the owner rows are removed.

use model::entities::{activity, leaderboard, team, user, workout};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, Value};
use tracing::{debug, trace};

use crate::error::Result;
use crate::kind::EntityKind;

/// What happens to dependent rows when their owner goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAction {
    /// Delete the dependent rows.
    Cascade,
    /// Keep the dependent rows and clear the reference.
    SetNull,
}

/// A foreign key column between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKey {
    /// `activities.user_id -> users.id`
    ActivityUser,
    /// `leaderboard.user_id -> users.id`
    LeaderboardUser,
    /// `users.team_id -> teams.id`
    UserTeam,
}

impl ForeignKey {
    /// The referenced kind.
    pub fn owner(self) -> EntityKind {
        match self {
            ForeignKey::ActivityUser | ForeignKey::LeaderboardUser => EntityKind::User,
            ForeignKey::UserTeam => EntityKind::Team,
        }
    }

    /// The kind holding the column.
    pub fn dependent(self) -> EntityKind {
        match self {
            ForeignKey::ActivityUser => EntityKind::Activity,
            ForeignKey::LeaderboardUser => EntityKind::LeaderboardEntry,
            ForeignKey::UserTeam => EntityKind::User,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeRule {
    pub foreign_key: ForeignKey,
    pub action: DeleteAction,
}

pub static RULES: [CascadeRule; 3] = [
    CascadeRule {
        foreign_key: ForeignKey::ActivityUser,
        action: DeleteAction::Cascade,
    },
    CascadeRule {
        foreign_key: ForeignKey::LeaderboardUser,
        action: DeleteAction::Cascade,
    },
    CascadeRule {
        foreign_key: ForeignKey::UserTeam,
        action: DeleteAction::SetNull,
    },
];

/// Rules triggered by deleting rows of `owner`.
pub fn rules_for(owner: EntityKind) -> impl Iterator<Item = &'static CascadeRule> {
    RULES.iter().filter(move |rule| rule.foreign_key.owner() == owner)
}

/// Which owner rows a delete covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    All,
    One(i32),
}

impl Scope {
    fn condition<C: ColumnTrait>(self, column: C) -> Condition {
        match self {
            Scope::All => Condition::all().add(column.is_not_null()),
            Scope::One(id) => Condition::all().add(column.eq(id)),
        }
    }
}

/// Applies every rule owned by `kind`, then deletes the `kind` rows in `scope`.
/// Returns the number of `kind` rows removed.
pub(crate) async fn delete<C>(conn: &C, kind: EntityKind, scope: Scope) -> Result<u64>
where
    C: ConnectionTrait,
{
    trace!(%kind, ?scope, "Applying delete rules");
    for rule in rules_for(kind) {
        let affected = apply(conn, rule, scope).await?;
        debug!(
            dependent = %rule.foreign_key.dependent(),
            action = ?rule.action,
            affected,
            "Delete rule applied"
        );
    }

    let removed = match kind {
        EntityKind::Team => delete_rows::<team::Entity, _>(conn, team::Column::Id, scope).await?,
        EntityKind::User => delete_rows::<user::Entity, _>(conn, user::Column::Id, scope).await?,
        EntityKind::Activity => {
            delete_rows::<activity::Entity, _>(conn, activity::Column::Id, scope).await?
        }
        EntityKind::Workout => {
            delete_rows::<workout::Entity, _>(conn, workout::Column::Id, scope).await?
        }
        EntityKind::LeaderboardEntry => {
            delete_rows::<leaderboard::Entity, _>(conn, leaderboard::Column::Id, scope).await?
        }
    };
    debug!(%kind, removed, "Rows deleted");
    Ok(removed)
}

async fn apply<C>(conn: &C, rule: &CascadeRule, scope: Scope) -> Result<u64>
where
    C: ConnectionTrait,
{
    match rule.foreign_key {
        ForeignKey::ActivityUser => {
            execute::<activity::Entity, _>(conn, rule.action, activity::Column::UserId, scope).await
        }
        ForeignKey::LeaderboardUser => {
            execute::<leaderboard::Entity, _>(conn, rule.action, leaderboard::Column::UserId, scope)
                .await
        }
        ForeignKey::UserTeam => {
            execute::<user::Entity, _>(conn, rule.action, user::Column::TeamId, scope).await
        }
    }
}

async fn execute<E, C>(
    conn: &C,
    action: DeleteAction,
    column: E::Column,
    scope: Scope,
) -> Result<u64>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    match action {
        DeleteAction::Cascade => delete_rows::<E, C>(conn, column, scope).await,
        DeleteAction::SetNull => {
            let result = E::update_many()
                .col_expr(column, Expr::value(Value::Int(None)))
                .filter(scope.condition(column))
                .exec(conn)
                .await?;
            Ok(result.rows_affected)
        }
    }
}

async fn delete_rows<E, C>(conn: &C, column: E::Column, scope: Scope) -> Result<u64>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let result = E::delete_many()
        .filter(scope.condition(column))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_delete_cascades_to_activities_and_leaderboard() {
        let rules: Vec<_> = rules_for(EntityKind::User).collect();
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|rule| rule.action == DeleteAction::Cascade));
        let dependents: Vec<_> = rules.iter().map(|rule| rule.foreign_key.dependent()).collect();
        assert!(dependents.contains(&EntityKind::Activity));
        assert!(dependents.contains(&EntityKind::LeaderboardEntry));
    }

    #[test]
    fn test_team_delete_only_clears_user_reference() {
        let rules: Vec<_> = rules_for(EntityKind::Team).collect();
        assert_eq!(
            rules,
            vec![&CascadeRule {
                foreign_key: ForeignKey::UserTeam,
                action: DeleteAction::SetNull,
            }]
        );
    }

    #[test]
    fn test_leaf_kinds_have_no_rules() {
        for kind in [EntityKind::Activity, EntityKind::Workout, EntityKind::LeaderboardEntry] {
            assert_eq!(rules_for(kind).count(), 0, "{} should own no rules", kind);
        }
    }
}
