//! The post store: every query and update operation on the `posts` collection.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Comment, Post, PostContent};
use crate::error::DomainError;
use crate::ports::{Clock, IdentitySource, PostRepository};

/// Post store service.
///
/// Mutations run their read-check-write sequence while holding `write_guard`,
/// so at most one update operation touches the repository at a time.
/// Queries go straight to the repository.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
    write_guard: Mutex<()>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            write_guard: Mutex::new(()),
        }
    }

    /// All stored posts.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    pub async fn get_comments(&self, id: &str) -> Result<Vec<Comment>, DomainError> {
        Ok(self.get_post(id).await?.comments)
    }

    /// Posts liked by the caller. No likes is an empty list, not an error.
    pub async fn get_liked_posts(
        &self,
        identity: &dyn IdentitySource,
    ) -> Result<Vec<Post>, DomainError> {
        let caller = identity.current_caller();
        Ok(self.repo.find_liked_by(&caller).await?)
    }

    pub async fn create_post(
        &self,
        identity: &dyn IdentitySource,
        fields: PostContent,
    ) -> Result<Post, DomainError> {
        if !fields.is_complete() {
            return Err(DomainError::Validation(
                "Title, content, and image are required for creating a post".to_string(),
            ));
        }

        let _guard = self.write_guard.lock().await;
        let post = Post::new(identity.current_caller(), fields, self.clock.now());
        let saved = self.repo.save(post).await?;

        tracing::info!(post_id = %saved.id, author = %saved.author, "Post created");
        Ok(saved)
    }

    /// Replace the editable fields. Checks run in the order
    /// existence, authorship, field validity.
    pub async fn update_post(
        &self,
        identity: &dyn IdentitySource,
        id: &str,
        fields: PostContent,
    ) -> Result<Post, DomainError> {
        let _guard = self.write_guard.lock().await;
        let post = self.get_post(id).await?;

        let caller = identity.current_caller();
        if !post.is_authored_by(&caller) {
            tracing::warn!(post_id = %id, caller = %caller, "Rejected update by non-author");
            return Err(DomainError::Forbidden(
                "Only the author can update the post".to_string(),
            ));
        }

        if !fields.is_complete() {
            return Err(DomainError::Validation(
                "Title, content, and image are required for updating a post".to_string(),
            ));
        }

        let updated = post.with_changes(fields, self.clock.now());
        let saved = self.repo.save(updated).await?;

        tracing::info!(post_id = %saved.id, "Post updated");
        Ok(saved)
    }

    /// Remove a post permanently and hand back the removed record.
    pub async fn delete_post(
        &self,
        identity: &dyn IdentitySource,
        id: &str,
    ) -> Result<Post, DomainError> {
        let _guard = self.write_guard.lock().await;
        let post = self.get_post(id).await?;

        let caller = identity.current_caller();
        if !post.is_authored_by(&caller) {
            tracing::warn!(post_id = %id, caller = %caller, "Rejected delete by non-author");
            return Err(DomainError::Forbidden(
                "Only the author can delete the post".to_string(),
            ));
        }

        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(removed)
    }

    /// Any caller may comment on an existing post.
    pub async fn add_comment(
        &self,
        identity: &dyn IdentitySource,
        id: &str,
        content: impl Into<String>,
    ) -> Result<Comment, DomainError> {
        let _guard = self.write_guard.lock().await;
        let mut post = self.get_post(id).await?;

        let comment = Comment::new(identity.current_caller(), content, self.clock.now());
        post.add_comment(comment.clone());
        self.repo.save(post).await?;

        tracing::debug!(post_id = %id, author = %comment.author, "Comment added");
        Ok(comment)
    }

    /// Returns the new like count.
    pub async fn like_post(
        &self,
        identity: &dyn IdentitySource,
        id: &str,
    ) -> Result<u64, DomainError> {
        let _guard = self.write_guard.lock().await;
        let mut post = self.get_post(id).await?;

        if !post.add_like(identity.current_caller()) {
            return Err(DomainError::AlreadyLiked { id: id.to_string() });
        }
        let saved = self.repo.save(post).await?;

        tracing::debug!(post_id = %id, likes = saved.likes, "Post liked");
        Ok(saved.likes)
    }

    /// Returns the new like count.
    pub async fn unlike_post(
        &self,
        identity: &dyn IdentitySource,
        id: &str,
    ) -> Result<u64, DomainError> {
        let _guard = self.write_guard.lock().await;
        let mut post = self.get_post(id).await?;

        if !post.remove_like(&identity.current_caller()) {
            return Err(DomainError::NotLiked { id: id.to_string() });
        }
        let saved = self.repo.save(post).await?;

        tracing::debug!(post_id = %id, likes = saved.likes, "Post unliked");
        Ok(saved.likes)
    }
}
