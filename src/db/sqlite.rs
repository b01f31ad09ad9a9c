use crate::db::models::{Article, Entity, Member};
use crate::db::repository::CrudRepository;
use crate::db::schema::SQLITE_INIT;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the database at `database_url` and apply the schema.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    // sqlx::query runs one statement at a time
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: SqlitePool,
}

impl SqliteArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Article> for SqliteArticleRepository {
    async fn save(&self, article: Article) -> Result<Article, AppError> {
        match article.id {
            None => {
                let id = sqlx::query("INSERT INTO articles (title, content) VALUES (?, ?)")
                    .bind(&article.title)
                    .bind(&article.content)
                    .execute(&self.pool)
                    .await?
                    .last_insert_rowid();
                debug!(id, "inserted article");
                Ok(article.with_id(id))
            }
            Some(id) => {
                let result = sqlx::query("UPDATE articles SET title = ?, content = ? WHERE id = ?")
                    .bind(&article.title)
                    .bind(&article.content)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                if result.rows_affected() == 0 {
                    return Err(AppError::not_found(Article::NAME, id));
                }
                Ok(article)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        let row = sqlx::query_as::<_, Article>(
            "SELECT id, title, content FROM articles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Article>, AppError> {
        let rows =
            sqlx::query_as::<_, Article>("SELECT id, title, content FROM articles ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn delete(&self, article: &Article) -> Result<(), AppError> {
        let Some(id) = article.id else {
            return Ok(());
        };
        sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Member> for SqliteMemberRepository {
    async fn save(&self, member: Member) -> Result<Member, AppError> {
        match member.id {
            None => {
                let id = sqlx::query("INSERT INTO members (username, display_name) VALUES (?, ?)")
                    .bind(&member.username)
                    .bind(&member.display_name)
                    .execute(&self.pool)
                    .await?
                    .last_insert_rowid();
                debug!(id, "inserted member");
                Ok(member.with_id(id))
            }
            Some(id) => {
                let result =
                    sqlx::query("UPDATE members SET username = ?, display_name = ? WHERE id = ?")
                        .bind(&member.username)
                        .bind(&member.display_name)
                        .bind(id)
                        .execute(&self.pool)
                        .await?;
                if result.rows_affected() == 0 {
                    return Err(AppError::not_found(Member::NAME, id));
                }
                Ok(member)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AppError> {
        let row = sqlx::query_as::<_, Member>(
            "SELECT id, username, display_name FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query_as::<_, Member>(
            "SELECT id, username, display_name FROM members ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn delete(&self, member: &Member) -> Result<(), AppError> {
        let Some(id) = member.id else {
            return Ok(());
        };
        sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
