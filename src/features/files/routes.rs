use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::features::files::handlers::{
    delete_file, download_file, get_file, list_files, replace_file, update_file_metadata,
    upload_file,
};
use crate::features::files::FileState;
use crate::shared::constants::MULTIPART_OVERHEAD;

/// Create routes for the files feature
pub fn routes(state: FileState) -> Router {
    // Allow body size up to max_file_size + buffer for multipart overhead, so oversized
    // files reach the handler and get the configured-limit message
    let body_limit = DefaultBodyLimit::max(
        state
            .files_config
            .max_file_size
            .saturating_add(MULTIPART_OVERHEAD),
    );

    Router::new()
        .route(
            "/files",
            get(list_files).post(upload_file).layer(body_limit),
        )
        .route(
            "/files/{id}",
            get(get_file)
                .patch(update_file_metadata)
                .put(replace_file)
                .delete(delete_file)
                .layer(body_limit),
        )
        .route("/files/{id}/download", get(download_file))
        .with_state(state)
}
