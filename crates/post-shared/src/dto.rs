//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use post_core::domain::PostContent;

/// Body of create and update requests.
///
/// Missing fields deserialize as empty strings so that they are rejected by
/// the store's validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub image: String,
}

impl From<PostPayload> for PostContent {
    fn from(payload: PostPayload) -> Self {
        PostContent::new(payload.title, payload.content, payload.image)
    }
}

/// Request to append a comment to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddCommentRequest {
    pub content: String,
}

/// Like count after a like or unlike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikesResponse {
    pub likes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let payload: PostPayload = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        let content = PostContent::from(payload);

        assert_eq!(content.title, "t");
        assert!(!content.is_complete());
    }
}
