//! Domain models shared across the library

mod record;

pub use record::{fields, RawRecord, Record, ScreenedRecord};
