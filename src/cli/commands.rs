pub mod initdb;
pub mod list;
pub mod populate_db;

pub use initdb::init_database;
pub use list::list;
pub use populate_db::populate_db;
