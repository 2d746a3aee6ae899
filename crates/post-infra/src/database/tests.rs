use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, TryIntoModel};

use post_core::domain::{Comment, Post, PostContent, Principal};
use post_core::error::RepoError;
use post_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::post::{self, CommentList, LikedBy};
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: &str, liked: Vec<&str>) -> post::Model {
    post::Model {
        id: id.to_owned(),
        author: "alice".to_owned(),
        title: "Test Post".to_owned(),
        content: "Content".to_owned(),
        image: "cat.png".to_owned(),
        created_at: 1_000,
        updated_at: None,
        comments: CommentList(vec![Comment::new(Principal::new("bob"), "hi", 1_500)]),
        likes: liked.len() as i64,
        liked: LikedBy(liked.into_iter().map(Principal::new).collect()),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("p1", vec!["bob"])]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id("p1").await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, "p1");
    assert_eq!(post.author, Principal::new("alice"));
    assert_eq!(post.likes, 1);
    assert_eq!(post.liked, vec![Principal::new("bob")]);
    assert_eq!(post.comments.len(), 1);
}

#[tokio::test]
async fn test_find_liked_by_scans_all_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("p1", vec!["bob"]), model("p2", vec![])]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let liked = repo.find_liked_by(&Principal::new("bob")).await.unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].id, "p1");
}

#[tokio::test]
async fn test_delete_missing_row_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.delete("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_returns_removed_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("p1", vec![])]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let removed = repo.delete("p1").await.unwrap().unwrap();
    assert_eq!(removed.id, "p1");
}

fn stored_post() -> Post {
    let mut post = Post::new(
        Principal::new("alice"),
        PostContent::new("Title", "Body", "img.png"),
        1_700_000_000_000_000_000,
    );
    post.updated_at = Some(1_700_000_000_500_000_000);
    post.add_comment(Comment::new(Principal::new("bob"), "first", 1_700_000_000_100_000_000));
    post.add_like(Principal::new("bob"));
    post.add_like(Principal::new("carol"));
    post
}

#[test]
fn test_post_survives_row_conversion() {
    let post = stored_post();

    let active: post::ActiveModel = post.clone().into();
    let model = active.try_into_model().unwrap();
    assert_eq!(model.created_at, 1_700_000_000_000_000_000);
    assert_eq!(model.likes, 2);

    let restored = Post::from(model);
    assert_eq!(restored, post);
    assert_eq!(restored.updated_at, Some(1_700_000_000_500_000_000));
    assert_eq!(restored.comments.len(), 1);
    assert_eq!(
        restored.liked,
        vec![Principal::new("bob"), Principal::new("carol")]
    );
}

#[tokio::test]
async fn test_save_returns_entity() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = stored_post();

    let saved = repo.save(post.clone()).await.unwrap();
    assert_eq!(saved, post);

    let log = repo.db.into_transaction_log();
    let sql = &log[0].statements()[0].sql;
    assert!(sql.starts_with(r#"INSERT INTO "posts""#));
    assert!(sql.contains(r#"ON CONFLICT ("id") DO UPDATE"#));
}

#[tokio::test]
async fn test_find_all_maps_rows_in_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("p1", vec!["bob"]), model("p2", vec![])]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_all().await.unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
    assert_eq!(posts[0].likes, 1);
    assert_eq!(posts[1].likes, 0);

    let log = repo.db.into_transaction_log();
    let sql = &log[0].statements()[0].sql;
    assert!(sql.contains(r#"ORDER BY "posts"."created_at" ASC, "posts"."id" ASC"#));
}

#[tokio::test]
async fn test_query_failure_is_a_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("boom".to_owned())])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = repo.find_all().await.unwrap_err();
    assert!(matches!(err, RepoError::Query(msg) if msg.contains("boom")));
}
