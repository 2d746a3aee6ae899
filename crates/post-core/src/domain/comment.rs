use serde::{Deserialize, Serialize};

use super::Principal;

/// Comment entity - immutable once appended to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: Principal,
    pub content: String,
    pub created_at: u64,
}

impl Comment {
    pub fn new(author: Principal, content: impl Into<String>, created_at: u64) -> Self {
        Self {
            author,
            content: content.into(),
            created_at,
        }
    }
}
