//! Resets the store to the fixed demo dataset.
//!
//! Destructive: every table is cleared before the dataset is written. There is
//! no recovery from a failure halfway through; run it again, the clearing step
//! makes a rerun produce the same dataset.

use model::entities::workout::difficulty;
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::kind::EntityKind;
use crate::Store;

/// Printed by the command line once seeding succeeds.
pub const CONFIRMATION: &str = "octofit_db populated with test data.";

/// Clearing order. Users go first so their cascades run before the tables
/// they feed are cleared; the later deletes tolerate empty tables.
pub const CLEAR_ORDER: [EntityKind; 5] = [
    EntityKind::User,
    EntityKind::Team,
    EntityKind::Activity,
    EntityKind::LeaderboardEntry,
    EntityKind::Workout,
];

pub const TEAMS: [&str; 2] = ["Marvel", "DC"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUser {
    pub username: &'static str,
    pub email: &'static str,
    /// Index into [`TEAMS`].
    pub team: usize,
}

pub const USERS: [SeedUser; 4] = [
    SeedUser {
        username: "ironman",
        email: "ironman@marvel.com",
        team: 0,
    },
    SeedUser {
        username: "captainamerica",
        email: "cap@marvel.com",
        team: 0,
    },
    SeedUser {
        username: "batman",
        email: "batman@dc.com",
        team: 1,
    },
    SeedUser {
        username: "superman",
        email: "superman@dc.com",
        team: 1,
    },
];

/// (type, duration, calories), one per user in [`USERS`] order.
pub const ACTIVITIES: [(&str, i32, i32); 4] = [
    ("Run", 30, 300),
    ("Swim", 45, 400),
    ("Bike", 60, 500),
    ("Yoga", 50, 200),
];

pub const WORKOUTS: [(&str, &str, &str); 2] = [
    ("Hero HIIT", "High intensity workout for heroes", difficulty::HARD),
    ("Power Yoga", "Yoga for strength and flexibility", difficulty::MEDIUM),
];

/// Points, one per user in [`USERS`] order.
pub const POINTS: [i32; 4] = [1000, 900, 1100, 950];

/// Record counts written by [`populate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub teams: usize,
    pub users: usize,
    pub activities: usize,
    pub workouts: usize,
    pub leaderboard_entries: usize,
}

/// Clears every table and writes the demo dataset.
pub async fn populate(store: &Store) -> Result<SeedSummary> {
    trace!("Entering populate");
    info!("Clearing existing data");
    for kind in CLEAR_ORDER {
        let removed = store.delete_all(kind).await?;
        debug!(%kind, removed, "Cleared");
    }

    let mut summary = SeedSummary::default();

    info!("Creating teams");
    let mut teams = Vec::with_capacity(TEAMS.len());
    for name in TEAMS {
        teams.push(store.create_team(name).await?);
    }
    summary.teams = teams.len();

    info!("Creating users");
    let mut users = Vec::with_capacity(USERS.len());
    for seed in USERS {
        let team_id = teams[seed.team].id;
        users.push(store.create_user(seed.username, seed.email, Some(team_id)).await?);
    }
    summary.users = users.len();

    info!("Creating activities");
    for (user, (activity_type, duration, calories)) in users.iter().zip(ACTIVITIES) {
        store
            .create_activity(user.id, activity_type, duration, calories)
            .await?;
        summary.activities += 1;
    }

    info!("Creating workouts");
    for (name, description, level) in WORKOUTS {
        store.create_workout(name, description, level).await?;
        summary.workouts += 1;
    }

    info!("Creating leaderboard");
    for (user, points) in users.iter().zip(POINTS) {
        store.create_leaderboard_entry(user.id, points).await?;
        summary.leaderboard_entries += 1;
    }

    info!(?summary, "Seeding completed");
    Ok(summary)
}
