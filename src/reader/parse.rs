use crate::error::ReadError;
use crate::model::{EntryGroup, build_entry_groups};
use crate::options::ReaderOptions;
use crate::schema::{RawDocument, decode_object};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

const READER_SOURCE: &str = "<reader>";
const STR_SOURCE: &str = "<str>";

/// Read a custom entries JSON file into entry groups, using the default
/// (permissive) schema policy.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<EntryGroup>, ReadError> {
    read_file_with(path, &ReaderOptions::default())
}

pub fn read_file_with(
    path: impl AsRef<Path>,
    opts: &ReaderOptions,
) -> Result<Vec<EntryGroup>, ReadError> {
    let path = path.as_ref();
    let source = path.display().to_string();
    info!(source = %source, "reading custom entries JSON");

    let file = File::open(path).map_err(|e| ReadError::NotFound {
        location: source.clone(),
        source: e,
    })?;

    // The handle is dropped when this returns, whatever the outcome.
    let value = parse_value(BufReader::new(file), &source)?;
    build(value, opts)
}

/// Read entry groups from any byte source holding the JSON document.
pub fn read_from_reader<R: Read>(reader: R) -> Result<Vec<EntryGroup>, ReadError> {
    read_from_reader_with(reader, &ReaderOptions::default())
}

pub fn read_from_reader_with<R: Read>(
    reader: R,
    opts: &ReaderOptions,
) -> Result<Vec<EntryGroup>, ReadError> {
    info!(source = %READER_SOURCE, "reading custom entries JSON");
    let value = parse_value(reader, READER_SOURCE)?;
    build(value, opts)
}

pub fn read_str(text: &str) -> Result<Vec<EntryGroup>, ReadError> {
    read_str_with(text, &ReaderOptions::default())
}

pub fn read_str_with(text: &str, opts: &ReaderOptions) -> Result<Vec<EntryGroup>, ReadError> {
    info!(source = %STR_SOURCE, "reading custom entries JSON");
    let value: Value =
        serde_json::from_str(text).map_err(|source| ReadError::Malformed { source })?;
    build(value, opts)
}

/// Map an already parsed JSON tree into entry groups.
pub fn from_value(value: &Value) -> Result<Vec<EntryGroup>, ReadError> {
    from_value_with(value, &ReaderOptions::default())
}

pub fn from_value_with(value: &Value, opts: &ReaderOptions) -> Result<Vec<EntryGroup>, ReadError> {
    build(value.clone(), opts)
}

fn build(value: Value, opts: &ReaderOptions) -> Result<Vec<EntryGroup>, ReadError> {
    let raw: RawDocument = decode_object(value, "$")?;
    build_entry_groups(raw, opts)
}

/// Parse a byte source into a generic JSON tree.
///
/// I/O failures while reading are reported as [`ReadError::NotFound`];
/// everything else serde_json rejects is [`ReadError::Malformed`].
fn parse_value<R: Read>(reader: R, location: &str) -> Result<Value, ReadError> {
    serde_json::from_reader(reader).map_err(|source| {
        if source.is_io() {
            ReadError::NotFound {
                location: location.to_string(),
                source: source.into(),
            }
        } else {
            ReadError::Malformed { source }
        }
    })
}
