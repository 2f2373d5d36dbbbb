//! Raw shapes as they appear in the entries JSON file.
//!
//! JSON shape:
//! {
//!   "systems": [
//!     {
//!       "system": "Acme",
//!       "entry_groups": [
//!         {
//!           "entry_group_id": "g1",
//!           "entry_group_name": "Group One",
//!           "entries": [
//!             {
//!               "linked_resource": "//res/1",
//!               "display_name": "Res 1",
//!               "description": "optional",
//!               "user_specified_type": "table",
//!               "created_at": "2020-01-01T00:00:00Z",
//!               "updated_at": "2020-01-02T00:00:00Z"
//!             }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//!
//! Field names are the JSON keys and must stay equal to the constants in
//! [`super::fields`]. Nested arrays are kept as plain values so that each
//! level is decoded with its own location (see [`super::decode`]).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub systems: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSystem {
    #[serde(default)]
    pub system: Option<Value>,

    #[serde(default)]
    pub entry_groups: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntryGroup {
    #[serde(default)]
    pub entry_group_id: Option<Value>,

    #[serde(default)]
    pub entry_group_name: Option<Value>,

    #[serde(default)]
    pub entries: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub linked_resource: Option<Value>,

    #[serde(default)]
    pub display_name: Option<Value>,

    /// `None` only when the key is absent; an explicit `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,

    #[serde(default)]
    pub user_specified_type: Option<Value>,

    #[serde(default)]
    pub created_at: Option<Value>,

    #[serde(default)]
    pub updated_at: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
