use utoipa::{Modify, OpenApi};

use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::shared::types::{ApiResponse, Meta, Pagination};

#[derive(OpenApi)]
#[openapi(
    paths(
        files_handlers::upload_file,
        files_handlers::list_files,
        files_handlers::get_file,
        files_handlers::download_file,
        files_handlers::update_file_metadata,
        files_handlers::replace_file,
        files_handlers::delete_file,
    ),
    components(
        schemas(
            // Shared
            Meta,
            Pagination,
            // Files
            files_dtos::UploadFileDto,
            files_dtos::ReplaceFileDto,
            files_dtos::UpdateFileDto,
            files_dtos::FileResponseDto,
            files_dtos::FileListResponseDto,
            ApiResponse<files_dtos::FileResponseDto>,
            ApiResponse<files_dtos::FileListResponseDto>,
        )
    ),
    tags(
        (name = "files", description = "File upload, download and metadata management"),
    ),
    info(
        title = "Filestore API",
        version = "0.1.0",
        description = "Binary file storage with metadata",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
