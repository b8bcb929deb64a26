use anyhow::Result;
use store::Store;
use tracing::{debug, error, info, trace};

pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");
    debug!("Database URL: {}", database_url);

    // Opening the store applies any pending migrations
    let store = match Store::open(database_url).await {
        Ok(store) => {
            debug!("Database schema is up to date");
            store
        }
        Err(e) => {
            error!("Failed to initialize database '{}': {}", database_url, e);
            return Err(e.into());
        }
    };

    store.close().await?;
    info!("Database initialization completed successfully!");
    trace!("init_database function completed");

    Ok(())
}
