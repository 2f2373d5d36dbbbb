//! Output model: entry groups flattened out of their systems.

use crate::error::ReadError;
use crate::options::ReaderOptions;
use crate::schema::{
    RawDocument, RawEntry, RawEntryGroup, RawSystem, decode_object, elements, fields, type_name,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Scalars are carried over as the JSON values found in the document, so ids
/// and names that are not strings survive unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryGroup {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub entries: Vec<CustomEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomEntry {
    pub linked_resource: Option<Value>,
    pub display_name: Option<Value>,
    /// `""` when the document has no description key for the entry.
    pub description: Value,
    pub user_specified_type: Option<Value>,
    /// Name of the system the entry's group was declared under.
    pub user_specified_system: Option<Value>,
    pub created_at: Option<Value>,
    pub updated_at: Option<Value>,
}

/// Flatten a raw document into entry groups, in document order.
///
/// Systems are not kept as a level of their own: their name is copied onto
/// every entry of every group they contain.
pub fn build_entry_groups(
    doc: RawDocument,
    opts: &ReaderOptions,
) -> Result<Vec<EntryGroup>, ReadError> {
    let systems = array(doc.systems, opts, fields::SYSTEMS)?;
    let system_count = systems.len();

    let mut groups = Vec::new();
    for (si, value) in systems.into_iter().enumerate() {
        let path = format!("{}[{}]", fields::SYSTEMS, si);
        let system: RawSystem = decode_object(value, &path)?;
        groups.extend(groups_from_system(system, &path, opts)?);
    }

    debug!(
        systems = system_count,
        groups = groups.len(),
        entries = groups.iter().map(|g| g.entries.len()).sum::<usize>(),
        "flattened custom entries"
    );
    Ok(groups)
}

fn groups_from_system(
    system: RawSystem,
    prefix: &str,
    opts: &ReaderOptions,
) -> Result<Vec<EntryGroup>, ReadError> {
    let at = |key: &str| format!("{}.{}", prefix, key);

    let name = text(system.system, opts, &at(fields::SYSTEM), true)?;
    let groups_path = at(fields::ENTRY_GROUPS);
    let raw_groups = array(system.entry_groups, opts, &groups_path)?;

    raw_groups
        .into_iter()
        .enumerate()
        .map(|(gi, value)| {
            let path = format!("{}[{}]", groups_path, gi);
            let group: RawEntryGroup = decode_object(value, &path)?;
            entry_group(group, name.as_ref(), &path, opts)
        })
        .collect()
}

fn entry_group(
    group: RawEntryGroup,
    system_name: Option<&Value>,
    prefix: &str,
    opts: &ReaderOptions,
) -> Result<EntryGroup, ReadError> {
    let at = |key: &str| format!("{}.{}", prefix, key);

    let id = text(group.entry_group_id, opts, &at(fields::ENTRY_GROUP_ID), true)?;
    let name = text(group.entry_group_name, opts, &at(fields::ENTRY_GROUP_NAME), true)?;
    let entries_path = at(fields::ENTRIES);
    let raw_entries = array(group.entries, opts, &entries_path)?;

    let entries = raw_entries
        .into_iter()
        .enumerate()
        .map(|(ei, value)| {
            let path = format!("{}[{}]", entries_path, ei);
            let entry: RawEntry = decode_object(value, &path)?;
            custom_entry(entry, system_name, &path, opts)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EntryGroup { id, name, entries })
}

fn custom_entry(
    entry: RawEntry,
    system_name: Option<&Value>,
    prefix: &str,
    opts: &ReaderOptions,
) -> Result<CustomEntry, ReadError> {
    let at = |key: &str| format!("{}.{}", prefix, key);

    let linked_resource = text(entry.linked_resource, opts, &at(fields::LINKED_RESOURCE), true)?;
    let display_name = text(entry.display_name, opts, &at(fields::DISPLAY_NAME), false)?;
    let description = text(entry.description, opts, &at(fields::DESCRIPTION), false)?
        .unwrap_or_else(|| Value::String(String::new()));
    let user_specified_type =
        text(entry.user_specified_type, opts, &at(fields::USER_SPECIFIED_TYPE), false)?;

    Ok(CustomEntry {
        linked_resource,
        display_name,
        description,
        user_specified_type,
        user_specified_system: system_name.cloned(),
        created_at: entry.created_at,
        updated_at: entry.updated_at,
    })
}

/// Elements of an array key. Strict mode requires the key to be present.
fn array(value: Option<Value>, opts: &ReaderOptions, path: &str) -> Result<Vec<Value>, ReadError> {
    if opts.is_strict() && value.as_ref().is_none_or(Value::is_null) {
        return Err(ReadError::missing(path));
    }
    elements(value, path)
}

/// A scalar key passed through as-is. Strict mode requires it to be a string,
/// and to be present when `required`.
fn text(
    value: Option<Value>,
    opts: &ReaderOptions,
    path: &str,
    required: bool,
) -> Result<Option<Value>, ReadError> {
    if !opts.is_strict() {
        return Ok(value);
    }
    match value {
        None if required => Err(ReadError::missing(path)),
        Some(v) if !v.is_string() => Err(ReadError::Schema {
            path: path.to_string(),
            reason: format!("expected a string, found {}", type_name(&v)),
        }),
        v => Ok(v),
    }
}
