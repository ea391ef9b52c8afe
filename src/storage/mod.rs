//! In-memory storage. Nothing here survives a process restart.

pub mod history;

pub use history::HistoryWindow;
