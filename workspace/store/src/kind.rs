use std::fmt;

/// The five record kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Team,
    User,
    Activity,
    Workout,
    LeaderboardEntry,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Team,
        EntityKind::User,
        EntityKind::Activity,
        EntityKind::Workout,
        EntityKind::LeaderboardEntry,
    ];
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Team => "team",
            EntityKind::User => "user",
            EntityKind::Activity => "activity",
            EntityKind::Workout => "workout",
            EntityKind::LeaderboardEntry => "leaderboard entry",
        };
        f.write_str(name)
    }
}
