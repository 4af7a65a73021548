use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::files::models::{
    File, FileContent, FileMetadata, FileMetadataUpdate, NewFile,
};

/// Persistent store for file records.
///
/// Every mutating call is one all-or-nothing unit of work. Implementations must keep
/// `size` equal to the content length and bump `updated_at` on every mutation.
#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn insert(&self, file: NewFile) -> Result<FileMetadata>;

    async fn find_metadata(&self, id: Uuid) -> Result<Option<FileMetadata>>;

    /// Load a record together with its content
    async fn find_by_id(&self, id: Uuid) -> Result<Option<File>>;

    /// Records ordered by `updated_at` descending
    async fn list(
        &self,
        offset: i64,
        limit: i64,
        session_id: Option<Uuid>,
    ) -> Result<Vec<FileMetadata>>;

    async fn count(&self, session_id: Option<Uuid>) -> Result<i64>;

    async fn update_metadata(
        &self,
        id: Uuid,
        update: FileMetadataUpdate,
    ) -> Result<Option<FileMetadata>>;

    async fn replace_content(&self, id: Uuid, content: FileContent)
        -> Result<Option<FileMetadata>>;

    /// Returns false when no record had this id
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

const METADATA_COLUMNS: &str =
    "id, filename, content_type, size, session_id, description, created_at, updated_at";

/// Postgres-backed file store
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn insert(&self, file: NewFile) -> Result<FileMetadata> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            r#"
            INSERT INTO files (id, filename, content_type, size, content, session_id, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            METADATA_COLUMNS
        );

        let saved: FileMetadata = sqlx::query_as(&query)
            .bind(Uuid::new_v4())
            .bind(&file.filename)
            .bind(&file.content_type)
            .bind(File::content_size(&file.content))
            .bind(&file.content)
            .bind(file.session_id)
            .bind(&file.description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn find_metadata(&self, id: Uuid) -> Result<Option<FileMetadata>> {
        let query = format!("SELECT {} FROM files WHERE id = $1", METADATA_COLUMNS);

        let file = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(file)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<File>> {
        let file = sqlx::query_as(
            r#"
            SELECT id, filename, content_type, size, content, session_id, description,
                   created_at, updated_at
            FROM files
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(file)
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        session_id: Option<Uuid>,
    ) -> Result<Vec<FileMetadata>> {
        let query = format!(
            r#"
            SELECT {}
            FROM files
            WHERE ($1::uuid IS NULL OR session_id = $1)
            ORDER BY updated_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
            METADATA_COLUMNS
        );

        let files = sqlx::query_as(&query)
            .bind(session_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(files)
    }

    async fn count(&self, session_id: Option<Uuid>) -> Result<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM files WHERE ($1::uuid IS NULL OR session_id = $1)",
        )
        .bind(session_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn update_metadata(
        &self,
        id: Uuid,
        update: FileMetadataUpdate,
    ) -> Result<Option<FileMetadata>> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            r#"
            UPDATE files
            SET filename = COALESCE($2, filename),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            METADATA_COLUMNS
        );

        let updated: Option<FileMetadata> = sqlx::query_as(&query)
            .bind(id)
            .bind(update.filename)
            .bind(update.description)
            .fetch_optional(&mut *tx)
            .await?;

        // Nothing matched, dropping the transaction rolls it back
        if updated.is_none() {
            debug!("Metadata update matched no file: id={}", id);
            return Ok(None);
        }

        tx.commit().await?;

        Ok(updated)
    }

    async fn replace_content(
        &self,
        id: Uuid,
        content: FileContent,
    ) -> Result<Option<FileMetadata>> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            r#"
            UPDATE files
            SET filename = $2,
                content_type = $3,
                size = $4,
                content = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            METADATA_COLUMNS
        );

        let updated: Option<FileMetadata> = sqlx::query_as(&query)
            .bind(id)
            .bind(&content.filename)
            .bind(&content.content_type)
            .bind(File::content_size(&content.content))
            .bind(&content.content)
            .fetch_optional(&mut *tx)
            .await?;

        if updated.is_none() {
            debug!("Content replace matched no file: id={}", id);
            return Ok(None);
        }

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
