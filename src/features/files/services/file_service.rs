use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::UpdateFileDto;
use crate::features::files::models::{File, FileContent, FileMetadata, NewFile};
use crate::features::files::repositories::FileRepository;
use crate::shared::constants::FILES_PER_PAGE;
use crate::shared::types::Pagination;

/// Service for file operations
pub struct FileService {
    repository: Arc<dyn FileRepository>,
}

impl FileService {
    pub fn new(repository: Arc<dyn FileRepository>) -> Self {
        Self { repository }
    }

    /// Store a new file. `size` is taken from the content length.
    pub async fn create(&self, file: NewFile) -> Result<FileMetadata> {
        file.validate()?;

        let saved = self.repository.insert(file).await?;

        info!(
            "File created: id={}, filename={}, size={}, session_id={:?}",
            saved.id, saved.filename, saved.size, saved.session_id
        );

        Ok(saved)
    }

    /// Get file metadata by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<FileMetadata>> {
        debug!("Fetching file metadata: id={}", id);
        self.repository.find_metadata(id).await
    }

    /// Get a file including its content, for download
    pub async fn get_with_content(&self, id: Uuid) -> Result<Option<File>> {
        debug!("Fetching file content: id={}", id);
        self.repository.find_by_id(id).await
    }

    /// List one page of files, most recently updated first
    ///
    /// # Returns
    /// The page items and the total number of matching files
    pub async fn list(
        &self,
        page: i64,
        session_id: Option<Uuid>,
    ) -> Result<(Vec<FileMetadata>, i64)> {
        if page < 1 {
            return Err(AppError::Validation(
                "page must be greater than or equal to 1".to_string(),
            ));
        }

        let offset = Pagination::offset(page, FILES_PER_PAGE);
        let files = self
            .repository
            .list(offset, FILES_PER_PAGE, session_id)
            .await?;
        let total = self.repository.count(session_id).await?;

        debug!(
            "Listed files: page={}, session_id={:?}, returned={}, total={}",
            page,
            session_id,
            files.len(),
            total
        );

        Ok((files, total))
    }

    /// Apply a partial metadata update. Only supplied fields change.
    pub async fn update_metadata(
        &self,
        id: Uuid,
        dto: UpdateFileDto,
    ) -> Result<Option<FileMetadata>> {
        dto.validate()?;

        let updated = self.repository.update_metadata(id, dto.into()).await?;

        if let Some(ref file) = updated {
            info!(
                "File metadata updated: id={}, filename={}",
                file.id, file.filename
            );
        }

        Ok(updated)
    }

    /// Overwrite filename, content type, size and content together
    pub async fn update_content(
        &self,
        id: Uuid,
        content: FileContent,
    ) -> Result<Option<FileMetadata>> {
        content.validate()?;

        let updated = self.repository.replace_content(id, content).await?;

        if let Some(ref file) = updated {
            info!(
                "File content replaced: id={}, filename={}, size={}",
                file.id, file.filename, file.size
            );
        }

        Ok(updated)
    }

    /// Delete a file permanently
    ///
    /// # Returns
    /// `false` if no file had this id
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let deleted = self.repository.delete(id).await?;

        if deleted {
            info!("File deleted: id={}", id);
        }

        Ok(deleted)
    }
}
