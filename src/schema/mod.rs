//! Schema layer: JSON key names, raw (wire) shapes of the entries document,
//! and decoding of one level of the document at a time.
//!
//! Every field of the raw shapes is an optional JSON value. Whether an absent
//! or oddly typed field is an error is decided later by the
//! [`SchemaPolicy`](crate::SchemaPolicy) in use.

pub mod decode;
pub mod fields;
pub mod raw;

pub use decode::{decode_object, elements, type_name};
pub use raw::{RawDocument, RawEntry, RawEntryGroup, RawSystem};
