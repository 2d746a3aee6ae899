//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DbConn, DbErr, EntityTrait, QueryOrder};

use post_core::domain::Post;
use post_core::error::RepoError;
use post_core::ports::{BaseRepository, PostRepository};

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL-backed `posts` collection.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_error(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(err) => RepoError::Connection(err.to_string()),
        DbErr::Json(msg) => RepoError::Serialization(msg),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl BaseRepository<Post, str> for PostgresPostRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = entity.clone().into();

        PostEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(post::Column::Id)
                    .update_columns([
                        post::Column::Title,
                        post::Column::Content,
                        post::Column::Image,
                        post::Column::UpdatedAt,
                        post::Column::Comments,
                        post::Column::Likes,
                        post::Column::Liked,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(post_id = %entity.id, "Post row upserted");
        Ok(entity)
    }

    async fn delete(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let result = PostEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(existing))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
