use async_trait::async_trait;

use crate::domain::{Post, Principal};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID: ?Sized + Sync>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning the removed record.
    async fn delete(&self, id: &ID) -> Result<Option<T>, RepoError>;
}

/// Post repository - the single keyed `posts` collection.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, str> {
    /// Every stored post, in storage order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts whose like set contains `principal`. Full scan.
    async fn find_liked_by(&self, principal: &Principal) -> Result<Vec<Post>, RepoError> {
        let posts = self.find_all().await?;
        Ok(posts
            .into_iter()
            .filter(|post| post.is_liked_by(principal))
            .collect())
    }
}
