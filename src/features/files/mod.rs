pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

use std::sync::Arc;

use crate::core::config::FilesConfig;

pub use repositories::PgFileRepository;
pub use routes::routes;
pub use services::FileService;

/// State shared by the file handlers
#[derive(Clone)]
pub struct FileState {
    pub file_service: Arc<FileService>,
    pub files_config: FilesConfig,
}
