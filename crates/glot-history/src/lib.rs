pub use self::entry::HistoryEntry;
pub use self::store::HistoryStore;

pub mod entry;
pub mod store;
