//! Flatten a custom entries JSON document (systems → entry groups → entries)
//! into an ordered list of entry groups whose entries carry their system name.
//!
//! ```no_run
//! let groups = custom_entries_reader::read_file("entries.json")?;
//! for group in &groups {
//!     println!("{:?}: {} entries", group.id, group.entries.len());
//! }
//! # Ok::<(), custom_entries_reader::ReadError>(())
//! ```

pub mod error;
pub mod model;
pub mod options;
pub mod reader;
pub mod schema;

pub use error::{ErrorKind, ReadError};
pub use model::{CustomEntry, EntryGroup};
pub use options::{ReaderOptions, SchemaPolicy};
pub use reader::{
    from_value, from_value_with, read_file, read_file_with, read_from_reader,
    read_from_reader_with, read_str, read_str_with,
};
