use sqlx::PgPool;
use snipbin_db::bootstrap::{self, SchemaStatus};
use snipbin_db::repositories::SnippetRepo;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    snipbin_db::health_check(&pool).await.unwrap();

    let status = bootstrap::check_schema(&pool).await.unwrap();
    assert_eq!(status, SchemaStatus::Ready);
}

#[sqlx::test(migrations = false)]
async fn test_check_reports_missing_table(pool: PgPool) {
    let status = bootstrap::check_schema(&pool).await.unwrap();
    assert_eq!(status, SchemaStatus::MissingTable);
}

#[sqlx::test(migrations = false)]
async fn test_check_reports_missing_columns(pool: PgPool) {
    sqlx::query("CREATE TABLE snippets (id BIGSERIAL PRIMARY KEY, content TEXT)")
        .execute(&pool)
        .await
        .unwrap();

    let status = bootstrap::check_schema(&pool).await.unwrap();
    assert_eq!(
        status,
        SchemaStatus::MissingColumns(vec!["slug".to_string(), "created_at".to_string()])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_init_recreates_empty_schema(pool: PgPool) {
    SnippetRepo::insert(&pool, "keep01", "doomed").await.unwrap();

    bootstrap::init_schema(&pool).await.unwrap();

    assert!(bootstrap::check_schema(&pool).await.unwrap().is_ready());
    assert!(SnippetRepo::find_by_slug(&pool, "keep01").await.unwrap().is_none());

    // Running it twice is fine.
    bootstrap::init_schema(&pool).await.unwrap();
    assert!(bootstrap::check_schema(&pool).await.unwrap().is_ready());
}

#[sqlx::test(migrations = false)]
async fn test_run_migrations_on_empty_database(pool: PgPool) {
    snipbin_db::run_migrations(&pool).await.unwrap();
    assert!(bootstrap::check_schema(&pool).await.unwrap().is_ready());
}
