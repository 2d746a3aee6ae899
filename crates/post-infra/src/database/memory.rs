//! In-memory post repository - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use post_core::domain::{Post, Principal};
use post_core::error::RepoError;
use post_core::ports::{BaseRepository, PostRepository};

/// Keyed `posts` collection held in a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn in_creation_order(mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        posts
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, str> for InMemoryPostRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(id).cloned())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(entity.id.clone(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.remove(id))
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(Self::in_creation_order(store.values().cloned().collect()))
    }

    async fn find_liked_by(&self, principal: &Principal) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let liked = store
            .values()
            .filter(|post| post.is_liked_by(principal))
            .cloned()
            .collect();
        Ok(Self::in_creation_order(liked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use post_core::domain::PostContent;

    fn post(author: &str, created_at: u64) -> Post {
        Post::new(
            Principal::new(author),
            PostContent::new("title", "content", "image.png"),
            created_at,
        )
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.save(post("alice", 1)).await.unwrap();

        let found = repo.find_by_id(&saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let repo = InMemoryPostRepository::new();
        let mut saved = repo.save(post("alice", 1)).await.unwrap();
        saved.title = "changed".to_string();
        repo.save(saved.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "changed");
    }

    #[tokio::test]
    async fn test_delete_returns_removed_post() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.save(post("alice", 1)).await.unwrap();

        assert_eq!(repo.delete(&saved.id).await.unwrap(), Some(saved.clone()));
        assert_eq!(repo.delete(&saved.id).await.unwrap(), None);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_in_creation_order() {
        let repo = InMemoryPostRepository::new();
        let second = repo.save(post("bob", 20)).await.unwrap();
        let first = repo.save(post("alice", 10)).await.unwrap();

        let ids: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_find_liked_by() {
        let repo = InMemoryPostRepository::new();
        let carol = Principal::new("carol");
        let mut liked = post("alice", 1);
        liked.add_like(carol.clone());
        let liked = repo.save(liked).await.unwrap();
        repo.save(post("bob", 2)).await.unwrap();

        let found = repo.find_liked_by(&carol).await.unwrap();
        assert_eq!(found, vec![liked]);
        assert!(
            repo.find_liked_by(&Principal::new("dave"))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
