use serde::{Deserialize, Serialize};

/// Whether an asset is owned by an individual user or a group.
///
/// Serialized names match the `CreatorType` values the details endpoint
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatorKind {
    User,
    Group,
}

/// Owner of an asset, built only from a successful details lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: u64,
    pub name: String,
    pub kind: CreatorKind,
}
