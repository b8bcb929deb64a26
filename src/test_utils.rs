#[cfg(test)]
pub mod test_utils {
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// A SQLite database file inside a fresh temporary directory.
    ///
    /// The directory is removed when the returned guard is dropped, so keep
    /// it alive for the duration of the test.
    pub fn temp_database() -> (TempDir, String) {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("octofit.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());
        (dir, url)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. Logging stops when the guard is dropped.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}
