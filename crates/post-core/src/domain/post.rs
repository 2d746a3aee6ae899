use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Comment, Principal};

/// The author-editable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent {
    pub title: String,
    pub content: String,
    pub image: String,
}

impl PostContent {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            image: image.into(),
        }
    }

    /// True when title, content and image are all non-empty.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty() && !self.image.is_empty()
    }
}

/// Post entity - an authored content item with comments and like tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: Principal,
    pub title: String,
    pub content: String,
    pub image: String,
    pub created_at: u64,
    pub updated_at: Option<u64>,
    pub comments: Vec<Comment>,
    pub likes: u64,
    pub liked: Vec<Principal>,
}

impl Post {
    /// Create a new post owned by `author` with a freshly generated id.
    pub fn new(author: Principal, fields: PostContent, created_at: u64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            title: fields.title,
            content: fields.content,
            image: fields.image,
            created_at,
            updated_at: None,
            comments: Vec::new(),
            likes: 0,
            liked: Vec::new(),
        }
    }

    /// Build the updated record: identity, authorship, creation time, comments
    /// and like state are carried over; only the editable fields change.
    pub fn with_changes(&self, fields: PostContent, updated_at: u64) -> Self {
        Self {
            id: self.id.clone(),
            author: self.author.clone(),
            title: fields.title,
            content: fields.content,
            image: fields.image,
            created_at: self.created_at,
            updated_at: Some(updated_at),
            comments: self.comments.clone(),
            likes: self.likes,
            liked: self.liked.clone(),
        }
    }

    pub fn is_authored_by(&self, principal: &Principal) -> bool {
        &self.author == principal
    }

    pub fn is_liked_by(&self, principal: &Principal) -> bool {
        self.liked.contains(principal)
    }

    /// Record a like from `principal`. Returns false if it was already present.
    pub fn add_like(&mut self, principal: Principal) -> bool {
        if self.is_liked_by(&principal) {
            return false;
        }
        self.liked.push(principal);
        self.likes += 1;
        true
    }

    /// Withdraw the like from `principal`. Returns false if there was none.
    pub fn remove_like(&mut self, principal: &Principal) -> bool {
        match self.liked.iter().position(|p| p == principal) {
            Some(index) => {
                self.liked.remove(index);
                self.likes = self.likes.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            Principal::new("alice"),
            PostContent::new("A", "B", "C"),
            10,
        )
    }

    #[test]
    fn test_new_post_starts_empty() {
        let post = sample();
        assert_eq!(post.likes, 0);
        assert!(post.liked.is_empty());
        assert!(post.comments.is_empty());
        assert_eq!(post.updated_at, None);
        assert!(Uuid::parse_str(&post.id).is_ok());
    }

    #[test]
    fn test_like_toggle_keeps_count_in_sync() {
        let mut post = sample();
        let bob = Principal::new("bob");

        assert!(post.add_like(bob.clone()));
        assert!(!post.add_like(bob.clone()));
        assert_eq!(post.likes, 1);
        assert_eq!(post.liked, vec![bob.clone()]);

        assert!(post.remove_like(&bob));
        assert!(!post.remove_like(&bob));
        assert_eq!(post.likes, 0);
        assert!(post.liked.is_empty());
    }

    #[test]
    fn test_with_changes_preserves_immutable_fields() {
        let mut post = sample();
        post.add_like(Principal::new("bob"));
        post.add_comment(Comment::new(Principal::new("bob"), "nice", 11));

        let updated = post.with_changes(PostContent::new("A2", "B2", "C2"), 20);

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.author, post.author);
        assert_eq!(updated.created_at, 10);
        assert_eq!(updated.updated_at, Some(20));
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.comments, post.comments);
        assert_eq!(updated.liked, post.liked);
        assert_eq!(updated.likes, 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").unwrap().is_null());
        assert_eq!(json["author"], "alice");
    }
}
