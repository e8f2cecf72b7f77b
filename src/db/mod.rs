pub mod connection;
pub mod state;

pub use connection::Database;
pub use state::SqliteStateStore;
