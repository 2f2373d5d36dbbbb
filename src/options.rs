//! Reader configuration.

use serde::Deserialize;

/// How absent keys in the entries document are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaPolicy {
    /// Absent scalars become `None`, absent arrays are empty.
    #[default]
    Permissive,
    /// Absent required keys fail the read with [`ErrorKind::Schema`](crate::ErrorKind::Schema).
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    pub schema_policy: SchemaPolicy,
}

impl ReaderOptions {
    pub fn strict() -> Self {
        Self {
            schema_policy: SchemaPolicy::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.schema_policy == SchemaPolicy::Strict
    }
}
