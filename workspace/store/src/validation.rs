//! Input records checked before any write reaches the database.
//!
//! Length limits match the column sizes. Only the counters carry a range.

use validator::Validate;

#[derive(Debug, Validate)]
pub(crate) struct NewTeam {
    #[validate(length(max = 100))]
    pub name: String,
}

#[derive(Debug, Validate)]
pub(crate) struct NewUser {
    /// A user needs some username; its content is otherwise free.
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(length(max = 254))]
    pub email: String,
    pub team_id: Option<i32>,
}

impl NewUser {
    pub fn new(username: &str, email: &str, team_id: Option<i32>) -> Self {
        Self {
            username: username.to_string(),
            email: normalize_email(email),
            team_id,
        }
    }
}

#[derive(Debug, Validate)]
pub(crate) struct NewActivity {
    pub user_id: i32,
    #[validate(length(max = 50))]
    pub activity_type: String,
    /// Minutes.
    #[validate(range(min = 0))]
    pub duration: i32,
    #[validate(range(min = 0))]
    pub calories: i32,
}

#[derive(Debug, Validate)]
pub(crate) struct NewWorkout {
    #[validate(length(max = 100))]
    pub name: String,
    pub description: String,
    #[validate(length(max = 20))]
    pub difficulty: String,
}

#[derive(Debug, Validate)]
pub(crate) struct NewLeaderboardEntry {
    pub user_id: i32,
    #[validate(range(min = 0))]
    pub points: i32,
}

/// Lower-cases the part after the last `@`. Anything without an `@` is kept
/// as given, apart from surrounding whitespace.
pub(crate) fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}
