use anyhow::Result;
use store::seed::{self, SeedSummary};
use store::Store;
use tracing::{debug, error, info, trace};

/// Resets the database to the demo dataset and prints the confirmation line.
pub async fn populate_db(database_url: &str) -> Result<SeedSummary> {
    trace!("Entering populate_db function");
    info!("Populating database with test data");
    debug!("Database URL: {}", database_url);

    let store = match Store::open(database_url).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open database '{}': {}", database_url, e);
            return Err(e.into());
        }
    };

    let summary = match seed::populate(&store).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Seeding stopped part way, rerun populate-db: {}", e);
            return Err(e.into());
        }
    };

    store.close().await?;
    println!("{}", seed::CONFIRMATION);
    trace!("populate_db function completed");

    Ok(summary)
}
