//! Post entity for SeaORM.

use sea_orm::{FromJsonQueryResult, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use post_core::domain::{Comment, Principal};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub author: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub image: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    #[sea_orm(column_type = "JsonBinary")]
    pub comments: CommentList,
    pub likes: i64,
    #[sea_orm(column_type = "JsonBinary")]
    pub liked: LikedBy,
}

/// Comments stored inline as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CommentList(pub Vec<Comment>);

/// Principals that liked the post, stored inline as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LikedBy(pub Vec<Principal>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn to_column(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_column(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for post_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author: Principal::new(model.author),
            title: model.title,
            content: model.content,
            image: model.image,
            created_at: from_column(model.created_at),
            updated_at: model.updated_at.map(from_column),
            comments: model.comments.0,
            likes: from_column(model.likes),
            liked: model.liked.0,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<post_core::domain::Post> for ActiveModel {
    fn from(post: post_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            author: Set(post.author.as_str().to_string()),
            title: Set(post.title),
            content: Set(post.content),
            image: Set(post.image),
            created_at: Set(to_column(post.created_at)),
            updated_at: Set(post.updated_at.map(to_column)),
            comments: Set(CommentList(post.comments)),
            likes: Set(to_column(post.likes)),
            liked: Set(LikedBy(post.liked)),
        }
    }
}
