mod sqlite_state;

pub use sqlite_state::SqliteStateStore;
