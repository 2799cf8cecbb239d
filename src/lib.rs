#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod collation;
pub mod commands;
pub mod filter;
pub mod logging;
pub mod record;
pub mod render;
pub mod storage;

pub use catalog::{CatalogStore, CatalogView, Change, SortOrder, SubscriptionId};
pub use filter::Filter;
pub use record::BookRecord;
pub use storage::{KeyValueStore, LocalFsStore, MemoryStore};
