//! Input documents: records (data.json) and their loaders.

pub mod load;
pub mod record;

pub use load::{load_operations, load_records};
pub use record::{DataDoc, Record};
