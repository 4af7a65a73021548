use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::files::models::{FileMetadata, FileMetadataUpdate};
use crate::shared::types::Pagination;

/// Upload file request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// The file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Optional free-text description (max 1000 characters)
    #[schema(example = "Quarterly report draft")]
    pub description: Option<String>,
    /// Optional session the file belongs to
    pub session_id: Option<Uuid>,
}

/// Replace file content request DTO for OpenAPI documentation
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ReplaceFileDto {
    /// The new file content
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Filenames end up in a `Content-Disposition` header on download
fn validate_filename_chars(filename: &str) -> Result<(), ValidationError> {
    if filename.chars().any(char::is_control) {
        return Err(ValidationError::new("filename_control_chars")
            .with_message("filename must not contain control characters".into()));
    }
    Ok(())
}

/// Partial metadata update. Omitted or null fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFileDto {
    #[validate(
        length(min = 1, max = 255, message = "filename must be 1-255 characters"),
        custom(function = "validate_filename_chars")
    )]
    #[schema(example = "report-final.pdf")]
    pub filename: Option<String>,

    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
}

impl From<UpdateFileDto> for FileMetadataUpdate {
    fn from(dto: UpdateFileDto) -> Self {
        Self {
            filename: dto.filename,
            description: dto.description,
        }
    }
}

fn default_page() -> i64 {
    1
}

/// Query params for listing files
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListFilesQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Only return files uploaded with this session id
    pub session_id: Option<Uuid>,
}

/// File metadata as returned by the API (content excluded)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileResponseDto {
    pub id: Uuid,
    pub filename: String,
    /// MIME type of the file
    pub content_type: String,
    /// Size of the content in bytes
    pub size: i64,
    pub session_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FileMetadata> for FileResponseDto {
    fn from(file: FileMetadata) -> Self {
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

/// One page of files
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileListResponseDto {
    pub items: Vec<FileResponseDto>,
    #[serde(flatten)]
    pub pagination: Pagination,
}
