use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Database model for a stored file, including its content
#[derive(Debug, Clone, FromRow)]
pub struct File {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub size: i64,
    pub content: Vec<u8>,
    pub session_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection of `files` without the content column
#[derive(Debug, Clone, FromRow)]
pub struct FileMetadata {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub size: i64,
    pub session_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<File> for FileMetadata {
    fn from(file: File) -> Self {
        Self {
            id: file.id,
            filename: file.filename,
            content_type: file.content_type,
            size: file.size,
            session_id: file.session_id,
            description: file.description,
            created_at: file.created_at,
            updated_at: file.updated_at,
        }
    }
}

/// Input for creating a file. `size` is always derived from `content`.
#[derive(Debug, Clone, Validate)]
pub struct NewFile {
    #[validate(length(min = 1, message = "filename must not be empty"))]
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
    pub session_id: Option<Uuid>,
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Full replacement of a file's content and content-describing fields
#[derive(Debug, Clone, Validate)]
pub struct FileContent {
    #[validate(length(min = 1, message = "filename must not be empty"))]
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Partial metadata change; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMetadataUpdate {
    pub filename: Option<String>,
    pub description: Option<String>,
}

impl File {
    /// Content size as stored in the `size` column
    pub fn content_size(content: &[u8]) -> i64 {
        content.len() as i64
    }
}
