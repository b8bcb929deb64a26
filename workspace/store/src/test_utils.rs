use sea_orm::Database;
use tracing::Level;

use crate::Store;

/// Open a store over a fresh in-memory SQLite database.
pub(crate) async fn setup_store() -> Store {
    init_test_tracing();

    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Store::from_connection(db)
        .await
        .expect("Failed to prepare store")
}

/// Log to the test writer at WARN unless RUST_LOG asks for more.
fn init_test_tracing() {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_test_writer()
        .try_init();
}
