//! Request/response models for the canlog REST API.

mod file_entry;

pub use file_entry::FileEntry;
