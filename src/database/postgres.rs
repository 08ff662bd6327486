use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::database::models::{
    Author, AuthorChanges, BlogPost, BlogPostChanges, BlogPostRow, Comment, NewAuthor, NewBlogPost,
};
use crate::database::store::{BlogStore, StoreError};

const AUTHOR_COLUMNS: &str = "id, first_name, last_name, user_name, created_at";
const POST_COLUMNS: &str = "id, title, content, author_id, comments, created_at";

/// PostgreSQL-backed store. Comments are embedded as a JSONB array on the
/// post row so a post and its comments are always read and written together.
#[derive(Debug, Clone)]
pub struct PgBlogStore {
    pool: PgPool,
}

impl PgBlogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map unique violations on `authors.user_name` to `StoreError::Duplicate`
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return StoreError::Duplicate("user_name");
        }
    }
    StoreError::Sqlx(err)
}

#[async_trait]
impl BlogStore for PgBlogStore {
    async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        let sql = format!("SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY created_at, id");
        let authors = sqlx::query_as::<_, Author>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    async fn find_author(&self, id: Uuid) -> Result<Option<Author>, StoreError> {
        let sql = format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = $1");
        let author = sqlx::query_as::<_, Author>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    async fn find_author_by_user_name(&self, user_name: &str) -> Result<Option<Author>, StoreError> {
        let sql = format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE user_name = $1");
        let author = sqlx::query_as::<_, Author>(&sql)
            .bind(user_name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    async fn insert_author(&self, author: NewAuthor) -> Result<Author, StoreError> {
        let sql = format!(
            "INSERT INTO authors (id, first_name, last_name, user_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {AUTHOR_COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&sql)
            .bind(Uuid::new_v4())
            .bind(&author.first_name)
            .bind(&author.last_name)
            .bind(&author.user_name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn update_author(
        &self,
        id: Uuid,
        changes: &AuthorChanges,
    ) -> Result<Option<Author>, StoreError> {
        // COALESCE keeps the stored value for every field left out of the update
        let sql = format!(
            "UPDATE authors SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                user_name = COALESCE($4, user_name)
             WHERE id = $1
             RETURNING {AUTHOR_COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&sql)
            .bind(id)
            .bind(changes.first_name.as_deref())
            .bind(changes.last_name.as_deref())
            .bind(changes.user_name.as_deref())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn delete_author(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM blog_posts ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, BlogPostRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<BlogPost>, StoreError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE id = $1");
        let row = sqlx::query_as::<_, BlogPostRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BlogPost::from))
    }

    async fn insert_post(&self, post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let sql = format!(
            "INSERT INTO blog_posts (id, title, content, author_id, comments)
             VALUES ($1, $2, $3, $4, '[]'::jsonb)
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, BlogPostRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.author_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_post(
        &self,
        id: Uuid,
        changes: &BlogPostChanges,
    ) -> Result<Option<BlogPost>, StoreError> {
        let sql = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content)
             WHERE id = $1
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, BlogPostRow>(&sql)
            .bind(id)
            .bind(changes.title.as_deref())
            .bind(changes.content.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BlogPost::from))
    }

    async fn replace_comments(
        &self,
        id: Uuid,
        comments: &[Comment],
    ) -> Result<Option<BlogPost>, StoreError> {
        let sql = format!(
            "UPDATE blog_posts SET comments = $2 WHERE id = $1 RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, BlogPostRow>(&sql)
            .bind(id)
            .bind(Json(comments))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BlogPost::from))
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_posts_by_author(&self, author_id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE author_id = $1")
            .bind(author_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
