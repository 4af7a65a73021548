/// Fixed page size for file listings
pub const FILES_PER_PAGE: i64 = 10;

// =============================================================================
// UPLOAD DEFAULTS
// =============================================================================

/// Filename stored when the upload does not carry one
pub const DEFAULT_FILENAME: &str = "unnamed";

/// MIME type stored when the upload does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extra body allowance on upload routes for multipart framing
pub const MULTIPART_OVERHEAD: usize = 1024 * 1024;
