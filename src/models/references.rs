use serde::{Deserialize, Serialize};

/// `{id, name}` pair as found in `summary_fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// "" for regular inventories, "smart" or "constructed" otherwise
    #[serde(default)]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceGroupRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A job or skip tag chosen in the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }
}

/// A label chosen in the wizard. Labels without an id do not exist yet
/// and are created before the launch request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Labels inherited from the template defaults
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
}
