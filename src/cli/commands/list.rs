use anyhow::Result;
use std::collections::HashMap;
use store::Store;
use tracing::{debug, trace};

use crate::cli::ListTarget;

pub async fn list(database_url: &str, target: ListTarget) -> Result<()> {
    trace!("Entering list function");
    debug!("Listing {:?} from {}", target, database_url);

    let store = Store::open(database_url).await?;
    let lines = render(&store, target).await?;
    store.close().await?;

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// One line per record. An empty store yields a single "no ..." line.
pub async fn render(store: &Store, target: ListTarget) -> Result<Vec<String>> {
    let lines: Vec<String> = match target {
        ListTarget::Teams => {
            let mut lines = Vec::new();
            for team in store.teams().await? {
                let members = store.team_members(team.id).await?.len();
                lines.push(format!("{:>4}  {}  ({} members)", team.id, team, members));
            }
            lines
        }
        ListTarget::Users => {
            let teams: HashMap<i32, String> = store
                .teams()
                .await?
                .into_iter()
                .map(|team| (team.id, team.name))
                .collect();
            store
                .users()
                .await?
                .into_iter()
                .map(|user| {
                    let team = user
                        .team_id
                        .and_then(|id| teams.get(&id).cloned())
                        .unwrap_or_else(|| "-".to_string());
                    format!("{:>4}  {}  <{}>  team: {}", user.id, user.username, user.email, team)
                })
                .collect()
        }
        ListTarget::Activities => {
            let usernames: HashMap<i32, String> = store
                .users()
                .await?
                .into_iter()
                .map(|user| (user.id, user.username))
                .collect();
            store
                .activities()
                .await?
                .into_iter()
                .map(|activity| {
                    format!(
                        "{:>4}  {}  {}  {} min  {} kcal  {}",
                        activity.id,
                        usernames.get(&activity.user_id).map(String::as_str).unwrap_or("?"),
                        activity.activity_type,
                        activity.duration,
                        activity.calories,
                        activity.timestamp.format("%Y-%m-%d %H:%M:%S")
                    )
                })
                .collect()
        }
        ListTarget::Workouts => store
            .workouts()
            .await?
            .into_iter()
            .map(|workout| {
                format!(
                    "{:>4}  {}  [{}]  {}",
                    workout.id, workout.name, workout.difficulty, workout.description
                )
            })
            .collect(),
        ListTarget::Leaderboard => store
            .leaderboard()
            .await?
            .into_iter()
            .map(|standing| {
                format!(
                    "{:>4}. {}  {} points",
                    standing.rank, standing.user.username, standing.entry.points
                )
            })
            .collect(),
    };

    if lines.is_empty() {
        return Ok(vec![format!("no {:?} recorded", target).to_lowercase()]);
    }
    Ok(lines)
}
