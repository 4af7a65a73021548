use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::config::FilesConfig;
use crate::core::error::Result;
use crate::features::files::models::{
    File, FileContent, FileMetadata, FileMetadataUpdate, NewFile,
};
use crate::features::files::repositories::FileRepository;
use crate::features::files::services::FileService;
use crate::features::files::{routes, FileState};

/// File store kept in process memory, used in place of Postgres in tests
#[derive(Default)]
pub struct InMemoryFileRepository {
    files: RwLock<HashMap<Uuid, File>>,
}

impl InMemoryFileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn insert(&self, file: NewFile) -> Result<FileMetadata> {
        let now = Utc::now();
        let record = File {
            id: Uuid::new_v4(),
            filename: file.filename,
            content_type: file.content_type,
            size: File::content_size(&file.content),
            content: file.content,
            session_id: file.session_id,
            description: file.description,
            created_at: now,
            updated_at: now,
        };

        self.files.write().await.insert(record.id, record.clone());
        Ok(record.into())
    }

    async fn find_metadata(&self, id: Uuid) -> Result<Option<FileMetadata>> {
        Ok(self.files.read().await.get(&id).cloned().map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<File>> {
        Ok(self.files.read().await.get(&id).cloned())
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        session_id: Option<Uuid>,
    ) -> Result<Vec<FileMetadata>> {
        let files = self.files.read().await;
        let mut matching: Vec<&File> = files
            .values()
            .filter(|f| session_id.is_none() || f.session_id == session_id)
            .collect();
        matching.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));

        Ok(matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .map(Into::into)
            .collect())
    }

    async fn count(&self, session_id: Option<Uuid>) -> Result<i64> {
        let files = self.files.read().await;
        Ok(files
            .values()
            .filter(|f| session_id.is_none() || f.session_id == session_id)
            .count() as i64)
    }

    async fn update_metadata(
        &self,
        id: Uuid,
        update: FileMetadataUpdate,
    ) -> Result<Option<FileMetadata>> {
        let mut files = self.files.write().await;
        let Some(file) = files.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(filename) = update.filename {
            file.filename = filename;
        }
        if let Some(description) = update.description {
            file.description = Some(description);
        }
        file.updated_at = Utc::now().max(file.created_at);

        Ok(Some(file.clone().into()))
    }

    async fn replace_content(
        &self,
        id: Uuid,
        content: FileContent,
    ) -> Result<Option<FileMetadata>> {
        let mut files = self.files.write().await;
        let Some(file) = files.get_mut(&id) else {
            return Ok(None);
        };

        file.filename = content.filename;
        file.content_type = content.content_type;
        file.size = File::content_size(&content.content);
        file.content = content.content;
        file.updated_at = Utc::now().max(file.created_at);

        Ok(Some(file.clone().into()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.files.write().await.remove(&id).is_some())
    }
}

pub fn create_test_file_service() -> Arc<FileService> {
    Arc::new(FileService::new(Arc::new(InMemoryFileRepository::new())))
}

/// Files router over an in-memory store with the given upload limit
pub fn create_test_router(max_file_size: usize) -> axum::Router {
    routes(FileState {
        file_service: create_test_file_service(),
        files_config: FilesConfig { max_file_size },
    })
}
