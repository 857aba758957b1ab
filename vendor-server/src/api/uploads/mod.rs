//! Upload Routes
//!
//! 提供已上传文件的读取，以及 multipart 表单的统一解析。

use axum::{
    Router,
    body::Bytes,
    extract::{Multipart, Path, State},
    response::IntoResponse,
    routing::get,
};
use http::header;

use crate::core::ServerState;
use crate::services::UploadedFile;
use crate::utils::{AppResult, multipart_error};

/// Collect every file part of a multipart form
///
/// Parts without a file name are treated as files with an empty name so
/// the store can report them.
pub async fn read_files(mut multipart: Multipart) -> AppResult<Vec<UploadedFile>> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        files.push(UploadedFile::new(name, file_name, data.to_vec()));
    }
    Ok(files)
}

/// GET /api/uploads/:filename - 读取已上传文件
async fn serve_uploaded_file(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let (content, content_type) = state.files.read(&filename)?;
    tracing::debug!(filename = %filename, size = content.len(), "Serving uploaded file");
    Ok(([(header::CONTENT_TYPE, content_type)], Bytes::from(content)))
}

/// Build upload router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/uploads/{filename}", get(serve_uploaded_file))
}
