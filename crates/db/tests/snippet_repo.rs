//! Repository-level tests for the `snippets` table constraints.

use sqlx::PgPool;
use snipbin_db::repositories::SnippetRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_does_not_overwrite_existing_slug(pool: PgPool) {
    let first = SnippetRepo::insert(&pool, "dup001", "original")
        .await
        .unwrap()
        .expect("first insert should succeed");
    assert_eq!(first.slug, "dup001");

    let second = SnippetRepo::insert(&pool, "dup001", "usurper").await.unwrap();
    assert!(second.is_none(), "second insert must report the conflict");

    let stored = SnippetRepo::find_by_slug(&pool, "dup001").await.unwrap().unwrap();
    assert_eq!(stored.content, "original");
    assert_eq!(stored.id, first.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slug_exists_tracks_inserts_and_deletes(pool: PgPool) {
    assert!(!SnippetRepo::slug_exists(&pool, "abc123").await.unwrap());

    SnippetRepo::insert(&pool, "abc123", "body").await.unwrap();
    assert!(SnippetRepo::slug_exists(&pool, "abc123").await.unwrap());

    assert!(SnippetRepo::delete_by_slug(&pool, "abc123").await.unwrap());
    assert!(!SnippetRepo::slug_exists(&pool, "abc123").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_at_assigned_and_updated_at_null(pool: PgPool) {
    let before = chrono::Utc::now() - chrono::Duration::seconds(60);
    let snippet = SnippetRepo::insert(&pool, "time01", "clock")
        .await
        .unwrap()
        .unwrap();

    assert!(snippet.created_at > before);
    assert!(snippet.updated_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_sets_updated_at(pool: PgPool) {
    SnippetRepo::insert(&pool, "upd001", "before").await.unwrap();

    sqlx::query("UPDATE snippets SET content = 'after' WHERE slug = 'upd001'")
        .execute(&pool)
        .await
        .unwrap();

    let snippet = SnippetRepo::find_by_slug(&pool, "upd001").await.unwrap().unwrap();
    assert!(snippet.updated_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slug_column_rejects_oversized_values(pool: PgPool) {
    let result = SnippetRepo::insert(&pool, "elevenchars", "too long").await;
    assert!(result.is_err());
}
