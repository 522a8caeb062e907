pub mod date_range;
pub mod entry;
pub mod entry_field;
pub mod summary;
