use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::files::dtos::{
    FileListResponseDto, FileResponseDto, ListFilesQuery, ReplaceFileDto, UpdateFileDto,
    UploadFileDto,
};
use crate::features::files::models::{FileContent, NewFile};
use crate::features::files::FileState;
use crate::shared::constants::{DEFAULT_CONTENT_TYPE, DEFAULT_FILENAME, FILES_PER_PAGE};
use crate::shared::types::{ApiResponse, Meta, Pagination};

/// File part of a multipart upload
struct UploadedFile {
    filename: String,
    content_type: String,
    data: Vec<u8>,
}

/// All recognised fields of an upload form
#[derive(Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    description: Option<String>,
    session_id: Option<Uuid>,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("File {} not found", id))
}

fn too_large(state: &FileState) -> AppError {
    AppError::PayloadTooLarge(format!(
        "File too large. Maximum size is {}MB",
        state.files_config.max_file_size_mb()
    ))
}

fn multipart_error(state: &FileState, what: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return too_large(state);
    }
    debug!("Failed to read {}: {}", what, e);
    AppError::BadRequest(format!("Failed to read {}: {}", what, e))
}

/// Read the multipart body, enforcing the configured size limit on the file part.
///
/// `description` and `session_id` are only read when `with_metadata` is set;
/// otherwise they are skipped like any unknown field.
async fn read_upload_form(
    state: &FileState,
    mut multipart: Multipart,
    with_metadata: bool,
) -> Result<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(state, "multipart data", e))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();

                let filename = field
                    .file_name()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(DEFAULT_FILENAME)
                    .to_string();

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(state, "file data", e))?;

                if data.len() > state.files_config.max_file_size {
                    debug!(
                        "Rejected upload: size={}, max={}",
                        data.len(),
                        state.files_config.max_file_size
                    );
                    return Err(too_large(state));
                }

                form.file = Some(UploadedFile {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "description" if with_metadata => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(state, "description field", e))?;
                if !text.is_empty() {
                    form.description = Some(text);
                }
            }
            "session_id" if with_metadata => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(state, "session_id field", e))?;
                let text = text.trim();
                if !text.is_empty() {
                    let session_id = Uuid::parse_str(text).map_err(|e| {
                        AppError::Validation(format!("session_id must be a valid UUID: {}", e))
                    })?;
                    form.session_id = Some(session_id);
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    Ok(form)
}

/// Upload a file
///
/// Accepts multipart/form-data with:
/// - `file`: The file to upload (required)
/// - `description`: Optional description, at most 1000 characters
/// - `session_id`: Optional session UUID to group files by
#[utoipa::path(
    post,
    path = "/files",
    tag = "files",
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
        description = "File upload form with optional description and session_id fields",
    ),
    responses(
        (status = 201, description = "File uploaded successfully", body = ApiResponse<FileResponseDto>),
        (status = 400, description = "Malformed multipart body or missing file"),
        (status = 413, description = "File too large"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn upload_file(
    State(state): State<FileState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<FileResponseDto>>)> {
    let form = read_upload_form(&state, multipart, true).await?;
    let file = form
        .file
        .ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    let saved = state
        .file_service
        .create(NewFile {
            filename: file.filename,
            content_type: file.content_type,
            content: file.data,
            session_id: form.session_id,
            description: form.description,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(saved.into()), None, None)),
    ))
}

/// List files, most recently updated first, 10 per page
#[utoipa::path(
    get,
    path = "/files",
    tag = "files",
    params(ListFilesQuery),
    responses(
        (status = 200, description = "Files retrieved successfully", body = ApiResponse<FileListResponseDto>),
        (status = 400, description = "Malformed query parameters"),
        (status = 422, description = "Page is less than 1")
    )
)]
pub async fn list_files(
    State(state): State<FileState>,
    AppQuery(params): AppQuery<ListFilesQuery>,
) -> Result<Json<ApiResponse<FileListResponseDto>>> {
    let (files, total) = state
        .file_service
        .list(params.page, params.session_id)
        .await?;

    let response = FileListResponseDto {
        items: files.into_iter().map(FileResponseDto::from).collect(),
        pagination: Pagination::new(total, params.page, FILES_PER_PAGE),
    };

    Ok(Json(ApiResponse::success(
        Some(response),
        None,
        Some(Meta { total }),
    )))
}

/// Get file metadata
#[utoipa::path(
    get,
    path = "/files/{id}",
    tag = "files",
    params(
        ("id" = Uuid, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File metadata", body = ApiResponse<FileResponseDto>),
        (status = 404, description = "File not found")
    )
)]
pub async fn get_file(
    State(state): State<FileState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FileResponseDto>>> {
    let file = state
        .file_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(ApiResponse::success(Some(file.into()), None, None)))
}

/// Download file content
///
/// Responds with the raw bytes, the stored MIME type and an attachment disposition.
#[utoipa::path(
    get,
    path = "/files/{id}/download",
    tag = "files",
    params(
        ("id" = Uuid, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "Raw file content with its stored MIME type"),
        (status = 404, description = "File not found")
    )
)]
pub async fn download_file(
    State(state): State<FileState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    let file = state
        .file_service
        .get_with_content(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&file.content_type)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CONTENT_TYPE)),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        content_disposition(&file.filename),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(file.size));

    Ok((StatusCode::OK, headers, file.content).into_response())
}

/// `attachment; filename="<name>"` with quotes and backslashes escaped.
///
/// Names that cannot be carried in a quoted header value (control characters)
/// are sent percent-encoded as `filename*=UTF-8''<name>` (RFC 5987).
fn content_disposition(filename: &str) -> HeaderValue {
    let escaped = filename.replace('\\', "\\\\").replace('"', "\\\"");
    HeaderValue::from_bytes(format!("attachment; filename=\"{}\"", escaped).as_bytes())
        .unwrap_or_else(|_| {
            debug!("Falling back to filename* for {:?}", filename);
            let encoded = format!(
                "attachment; filename*=UTF-8''{}",
                urlencoding::encode(filename)
            );
            HeaderValue::from_str(&encoded)
                .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
        })
}

/// Update file metadata
///
/// Only fields present in the body are changed.
#[utoipa::path(
    patch,
    path = "/files/{id}",
    tag = "files",
    params(
        ("id" = Uuid, Path, description = "File ID")
    ),
    request_body = UpdateFileDto,
    responses(
        (status = 200, description = "File metadata updated", body = ApiResponse<FileResponseDto>),
        (status = 400, description = "Malformed JSON body"),
        (status = 404, description = "File not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_file_metadata(
    State(state): State<FileState>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateFileDto>,
) -> Result<Json<ApiResponse<FileResponseDto>>> {
    let file = state
        .file_service
        .update_metadata(id, dto)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(ApiResponse::success(Some(file.into()), None, None)))
}

/// Replace file content
///
/// Filename, content type, size and content are all overwritten.
#[utoipa::path(
    put,
    path = "/files/{id}",
    tag = "files",
    params(
        ("id" = Uuid, Path, description = "File ID")
    ),
    request_body(
        content = ReplaceFileDto,
        content_type = "multipart/form-data",
        description = "New file content",
    ),
    responses(
        (status = 200, description = "File content replaced", body = ApiResponse<FileResponseDto>),
        (status = 400, description = "Malformed multipart body or missing file"),
        (status = 404, description = "File not found"),
        (status = 413, description = "File too large")
    )
)]
pub async fn replace_file(
    State(state): State<FileState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<FileResponseDto>>> {
    let form = read_upload_form(&state, multipart, false).await?;
    let file = form
        .file
        .ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    let updated = state
        .file_service
        .update_content(
            id,
            FileContent {
                filename: file.filename,
                content_type: file.content_type,
                content: file.data,
            },
        )
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(ApiResponse::success(Some(updated.into()), None, None)))
}

/// Delete a file
#[utoipa::path(
    delete,
    path = "/files/{id}",
    tag = "files",
    params(
        ("id" = Uuid, Path, description = "File ID")
    ),
    responses(
        (status = 204, description = "File deleted"),
        (status = 404, description = "File not found")
    )
)]
pub async fn delete_file(
    State(state): State<FileState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if !state.file_service.delete(id).await? {
        return Err(not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::create_test_router;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    const ONE_MB: usize = 1024 * 1024;

    fn server() -> TestServer {
        TestServer::new(create_test_router(ONE_MB)).expect("Failed to create test server")
    }

    fn text_part(name: &str, content: &str, mime: &str) -> Part {
        Part::bytes(content.as_bytes().to_vec())
            .file_name(name)
            .mime_type(mime)
    }

    async fn upload(server: &TestServer, form: MultipartForm) -> Value {
        let response = server.post("/files").multipart(form).await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["data"].clone()
    }

    async fn upload_text(server: &TestServer, name: &str, content: &str) -> Value {
        upload(
            server,
            MultipartForm::new().add_part("file", text_part(name, content, "text/plain")),
        )
        .await
    }

    #[tokio::test]
    async fn test_upload_returns_metadata_without_content() {
        let server = server();
        let session = Uuid::new_v4();

        let form = MultipartForm::new()
            .add_part("file", text_part("notes.txt", "hello", "text/plain"))
            .add_text("description", "my notes")
            .add_text("session_id", session.to_string());
        let data = upload(&server, form).await;

        assert_eq!(data["filename"], "notes.txt");
        assert_eq!(data["content_type"], "text/plain");
        assert_eq!(data["size"], 5);
        assert_eq!(data["description"], "my notes");
        assert_eq!(data["session_id"], session.to_string());
        assert!(data.get("content").is_none());
    }

    #[tokio::test]
    async fn test_upload_defaults_filename_and_content_type() {
        let server = server();

        let form = MultipartForm::new().add_part("file", Part::bytes(vec![1u8, 2, 3]));
        let data = upload(&server, form).await;

        assert_eq!(data["filename"], "unnamed");
        assert_eq!(data["content_type"], "application/octet-stream");
        assert_eq!(data["size"], 3);
    }

    #[tokio::test]
    async fn test_upload_without_file_is_bad_request() {
        let server = server();

        let response = server
            .post("/files")
            .multipart(MultipartForm::new().add_text("description", "no file"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_invalid_session_id_is_unprocessable() {
        let server = server();

        let form = MultipartForm::new()
            .add_part("file", text_part("a.txt", "a", "text/plain"))
            .add_text("session_id", "not-a-uuid");
        let response = server.post("/files").multipart(form).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_upload_exactly_max_size_succeeds() {
        let server = server();

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(vec![7u8; ONE_MB]).file_name("max.bin"),
        );
        let data = upload(&server, form).await;

        assert_eq!(data["size"], ONE_MB as u64);
    }

    #[tokio::test]
    async fn test_upload_one_byte_over_is_payload_too_large() {
        let server = server();

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(vec![7u8; ONE_MB + 1]).file_name("big.bin"),
        );
        let response = server.post("/files").multipart(form).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "File too large. Maximum size is 1MB");
    }

    #[tokio::test]
    async fn test_list_pagination_fields() {
        let server = server();
        let session = Uuid::new_v4();

        for i in 0..15 {
            let form = MultipartForm::new()
                .add_part("file", text_part(&format!("f{}.txt", i), "x", "text/plain"))
                .add_text("session_id", session.to_string());
            upload(&server, form).await;
        }
        // Outside the session, must not be counted
        upload_text(&server, "other.txt", "y").await;

        let response = server
            .get("/files")
            .add_query_param("page", 2)
            .add_query_param("session_id", session)
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        let data = &body["data"];
        assert_eq!(data["items"].as_array().unwrap().len(), 5);
        assert_eq!(data["total"], 15);
        assert_eq!(data["page"], 2);
        assert_eq!(data["limit"], 10);
        assert_eq!(data["total_pages"], 2);
        assert_eq!(data["has_next"], false);
        assert_eq!(data["has_prev"], true);
        assert_eq!(body["meta"]["total"], 15);
        assert!(data["items"][0].get("content").is_none());
    }

    #[tokio::test]
    async fn test_list_defaults_to_first_page() {
        let server = server();
        upload_text(&server, "a.txt", "a").await;

        let body = server.get("/files").await.json::<Value>();

        assert_eq!(body["data"]["page"], 1);
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["has_prev"], false);
        assert_eq!(body["data"]["has_next"], false);
    }

    #[tokio::test]
    async fn test_list_huge_page_is_empty_with_total() {
        let server = server();
        upload_text(&server, "a.txt", "a").await;
        upload_text(&server, "b.txt", "b").await;

        let response = server.get("/files").add_query_param("page", i64::MAX).await;
        response.assert_status_ok();

        let data = &response.json::<Value>()["data"];
        assert!(data["items"].as_array().unwrap().is_empty());
        assert_eq!(data["total"], 2);
        assert_eq!(data["page"], i64::MAX);
        assert_eq!(data["total_pages"], 1);
        assert_eq!(data["has_next"], false);
        assert_eq!(data["has_prev"], true);
    }

    #[tokio::test]
    async fn test_list_page_zero_is_unprocessable() {
        let server = server();

        let response = server.get("/files").add_query_param("page", 0).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_list_malformed_session_is_bad_request() {
        let server = server();

        let response = server
            .get("/files")
            .add_query_param("session_id", "nope")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_missing_echoes_id() {
        let server = server();
        let id = Uuid::new_v4();

        let response = server.get(&format!("/files/{}", id)).await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<Value>()["message"],
            format!("File {} not found", id)
        );
    }

    #[tokio::test]
    async fn test_download_sets_headers() {
        let server = server();
        let data = upload_text(&server, "report.csv", "a,b\n1,2\n").await;
        let id = data["id"].as_str().unwrap();

        let response = server.get(&format!("/files/{}/download", id)).await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "text/plain");
        assert_eq!(
            response.header("content-disposition"),
            "attachment; filename=\"report.csv\""
        );
        assert_eq!(response.header("content-length"), "8");
        assert_eq!(&response.as_bytes()[..], b"a,b\n1,2\n");
    }

    #[test]
    fn test_content_disposition_escapes_quotes() {
        let value = content_disposition(r#"say "hi"\now.txt"#);
        assert_eq!(value, r#"attachment; filename="say \"hi\"\\now.txt""#);
    }

    #[test]
    fn test_content_disposition_keeps_utf8_names() {
        let value = content_disposition("résumé.pdf");
        assert_eq!(
            value.as_bytes(),
            "attachment; filename=\"résumé.pdf\"".as_bytes()
        );
    }

    #[test]
    fn test_content_disposition_encodes_control_characters() {
        let value = content_disposition("a\nb.txt");
        assert_eq!(value, "attachment; filename*=UTF-8''a%0Ab.txt");
    }

    #[tokio::test]
    async fn test_download_missing_is_not_found() {
        let server = server();

        let response = server
            .get(&format!("/files/{}/download", Uuid::new_v4()))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_patch_updates_only_supplied_fields() {
        let server = server();
        let form = MultipartForm::new()
            .add_part("file", text_part("orig.txt", "abc", "text/plain"))
            .add_text("description", "before");
        let data = upload(&server, form).await;
        let id = data["id"].as_str().unwrap();

        let response = server
            .patch(&format!("/files/{}", id))
            .json(&json!({ "filename": "renamed.txt" }))
            .await;
        response.assert_status_ok();

        let updated = &response.json::<Value>()["data"];
        assert_eq!(updated["filename"], "renamed.txt");
        assert_eq!(updated["description"], "before");
    }

    #[tokio::test]
    async fn test_patch_empty_filename_is_unprocessable() {
        let server = server();
        let data = upload_text(&server, "a.txt", "a").await;
        let id = data["id"].as_str().unwrap();

        let response = server
            .patch(&format!("/files/{}", id))
            .json(&json!({ "filename": "" }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let current = server.get(&format!("/files/{}", id)).await.json::<Value>();
        assert_eq!(current["data"]["filename"], "a.txt");
    }

    #[tokio::test]
    async fn test_patch_control_characters_is_unprocessable() {
        let server = server();
        let data = upload_text(&server, "a.txt", "a").await;
        let id = data["id"].as_str().unwrap();

        let response = server
            .patch(&format!("/files/{}", id))
            .json(&json!({ "filename": "a\nb.txt" }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let download = server.get(&format!("/files/{}/download", id)).await;
        download.assert_status_ok();
        assert_eq!(
            download.header("content-disposition"),
            "attachment; filename=\"a.txt\""
        );
    }

    #[tokio::test]
    async fn test_patch_missing_is_not_found() {
        let server = server();

        let response = server
            .patch(&format!("/files/{}", Uuid::new_v4()))
            .json(&json!({ "description": "x" }))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_put_replaces_content_and_download_follows() {
        let server = server();
        let data = upload_text(&server, "old.txt", "old").await;
        let id = data["id"].as_str().unwrap();

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(vec![0x89u8, 0x50, 0x4e, 0x47])
                .file_name("new.png")
                .mime_type("image/png"),
        );
        let response = server.put(&format!("/files/{}", id)).multipart(form).await;
        response.assert_status_ok();

        let updated = &response.json::<Value>()["data"];
        assert_eq!(updated["filename"], "new.png");
        assert_eq!(updated["content_type"], "image/png");
        assert_eq!(updated["size"], 4);

        let download = server.get(&format!("/files/{}/download", id)).await;
        assert_eq!(download.header("content-type"), "image/png");
        assert_eq!(
            download.header("content-disposition"),
            "attachment; filename=\"new.png\""
        );
        assert_eq!(&download.as_bytes()[..], &[0x89u8, 0x50, 0x4e, 0x47][..]);
    }

    #[tokio::test]
    async fn test_put_ignores_upload_only_fields() {
        let server = server();
        let session = Uuid::new_v4();
        let form = MultipartForm::new()
            .add_part("file", text_part("old.txt", "old", "text/plain"))
            .add_text("description", "kept")
            .add_text("session_id", session.to_string());
        let data = upload(&server, form).await;
        let id = data["id"].as_str().unwrap();

        let form = MultipartForm::new()
            .add_part("file", text_part("new.txt", "newer", "text/plain"))
            .add_text("description", "ignored")
            .add_text("session_id", "not-a-uuid");
        let response = server.put(&format!("/files/{}", id)).multipart(form).await;
        response.assert_status_ok();

        let updated = &response.json::<Value>()["data"];
        assert_eq!(updated["filename"], "new.txt");
        assert_eq!(updated["size"], 5);
        assert_eq!(updated["description"], "kept");
        assert_eq!(updated["session_id"], session.to_string());
    }

    #[tokio::test]
    async fn test_put_missing_is_not_found() {
        let server = server();

        let form = MultipartForm::new().add_part("file", text_part("a.txt", "a", "text/plain"));
        let response = server
            .put(&format!("/files/{}", Uuid::new_v4()))
            .multipart(form)
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_put_too_large_leaves_record_unchanged() {
        let server = server();
        let data = upload_text(&server, "keep.txt", "keep").await;
        let id = data["id"].as_str().unwrap();

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(vec![0u8; ONE_MB + 1]).file_name("big.bin"),
        );
        let response = server.put(&format!("/files/{}", id)).multipart(form).await;
        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);

        let current = server.get(&format!("/files/{}", id)).await.json::<Value>();
        assert_eq!(current["data"]["filename"], "keep.txt");
        assert_eq!(current["data"]["size"], 4);
    }

    #[tokio::test]
    async fn test_delete_then_get_and_delete_again() {
        let server = server();
        let data = upload_text(&server, "gone.txt", "bye").await;
        let id = data["id"].as_str().unwrap();

        server
            .delete(&format!("/files/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .get(&format!("/files/{}", id))
            .await
            .assert_status_not_found();

        server
            .delete(&format!("/files/{}", id))
            .await
            .assert_status_not_found();
    }
}
