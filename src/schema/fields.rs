//! JSON key names used by the custom entries document.

pub const SYSTEMS: &str = "systems";
pub const SYSTEM: &str = "system";
pub const ENTRY_GROUPS: &str = "entry_groups";
pub const ENTRY_GROUP_ID: &str = "entry_group_id";
pub const ENTRY_GROUP_NAME: &str = "entry_group_name";
pub const ENTRIES: &str = "entries";

pub const LINKED_RESOURCE: &str = "linked_resource";
pub const DISPLAY_NAME: &str = "display_name";
pub const DESCRIPTION: &str = "description";
pub const USER_SPECIFIED_TYPE: &str = "user_specified_type";
pub const CREATED_AT: &str = "created_at";
pub const UPDATED_AT: &str = "updated_at";
