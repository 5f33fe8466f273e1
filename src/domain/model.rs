use serde::{Deserialize, Serialize};

/// Customer record handed to a [`SendData`](crate::domain::ports::SendData) implementation.
///
/// Serialized keys keep the declared field names and order: `{"Name":...,"Id":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    pub name: String,
    pub id: u32,
}

impl Customer {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}
