//! Uploaded file storage
//!
//! Files are stored flat under `WORK_DIR/uploads/` as `<sha256>.<ext>`, so the
//! same content uploaded twice lands on the same file.

use sha2::{Digest, Sha256};
use shared::error::{AppError, ErrorCode};
use std::fs;
use std::path::{Path, PathBuf};

/// Supported image formats
const SUPPORTED_IMAGE_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// A file received from a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field name
    pub field: String,
    pub file_name: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            data,
        }
    }

    /// Lower-cased extension of the original file name
    pub fn extension(&self) -> Result<String, AppError> {
        if self.file_name.trim().is_empty() {
            return Err(AppError::new(ErrorCode::NoFilename).with_detail("field", self.field.as_str()));
        }
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::UnsupportedFileFormat,
                    format!("Invalid file extension for: {}", self.file_name),
                )
                .with_detail("file_name", self.file_name.as_str())
            })
    }
}

/// Result of a successful store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// `<sha256>.<ext>`
    pub stored_as: String,
    pub content_type: String,
    pub size: u64,
}

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    max_bytes: usize,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Reject empty and oversize files
    pub fn check_size(&self, file: &UploadedFile) -> Result<(), AppError> {
        if file.data.is_empty() {
            return Err(AppError::new(ErrorCode::EmptyFile).with_detail("field", file.field.as_str()));
        }
        if file.data.len() > self.max_bytes {
            return Err(AppError::with_message(
                ErrorCode::FileTooLarge,
                format!(
                    "File too large. Maximum size is {} bytes ({}MB)",
                    self.max_bytes,
                    self.max_bytes / 1024 / 1024
                ),
            )
            .with_detail("field", file.field.as_str())
            .with_detail("size", file.data.len()));
        }
        Ok(())
    }

    /// Validate an image upload, returning its extension
    pub fn validate_image(&self, file: &UploadedFile) -> Result<String, AppError> {
        self.check_size(file)?;
        let ext = file.extension()?;
        if !SUPPORTED_IMAGE_FORMATS.contains(&ext.as_str()) {
            return Err(unsupported(file, &ext, SUPPORTED_IMAGE_FORMATS));
        }
        if let Err(e) = image::load_from_memory(&file.data) {
            return Err(AppError::with_message(
                ErrorCode::InvalidImageFile,
                format!("Invalid image file ({ext}): {e}"),
            )
            .with_detail("field", file.field.as_str()));
        }
        Ok(ext)
    }

    /// Validate a document upload: an image, or a PDF when `allow_pdf`
    pub fn validate_document(&self, file: &UploadedFile, allow_pdf: bool) -> Result<String, AppError> {
        self.check_size(file)?;
        let ext = file.extension()?;
        if allow_pdf && ext == "pdf" {
            if !file.data.starts_with(b"%PDF-") {
                return Err(AppError::with_message(
                    ErrorCode::InvalidFormat,
                    format!("{} is not a PDF document", file.file_name),
                )
                .with_detail("field", file.field.as_str()));
            }
            return Ok(ext);
        }
        if !allow_pdf && ext == "pdf" {
            return Err(unsupported(file, &ext, SUPPORTED_IMAGE_FORMATS));
        }
        self.validate_image(file)
    }

    /// Write content-addressed; an existing file with the same hash is reused
    pub fn store(&self, data: &[u8], ext: &str) -> Result<StoredFile, AppError> {
        fs::create_dir_all(&self.root).map_err(|e| {
            AppError::with_message(
                ErrorCode::FileStorageFailed,
                format!("Failed to create upload directory: {e}"),
            )
        })?;

        let hash = calculate_hash(data);
        let stored_as = format!("{hash}.{ext}");
        let path = self.root.join(&stored_as);

        if path.exists() {
            tracing::debug!(file = %stored_as, "Duplicate upload, reusing stored file");
        } else {
            fs::write(&path, data).map_err(|e| {
                AppError::with_message(ErrorCode::FileStorageFailed, format!("Failed to save file: {e}"))
            })?;
            tracing::info!(file = %stored_as, size = data.len(), "File stored");
        }

        Ok(StoredFile {
            content_type: content_type_for(&stored_as),
            stored_as,
            size: data.len() as u64,
        })
    }

    /// Read a stored file by name
    pub fn read(&self, filename: &str) -> Result<(Vec<u8>, String), AppError> {
        // Security check: prevent path traversal
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(AppError::invalid_request("Invalid filename"));
        }

        let path = self.root.join(filename);
        match fs::read(&path) {
            Ok(content) => Ok((content, content_type_for(filename))),
            Err(_) => Err(AppError::not_found(format!("File {filename}"))),
        }
    }
}

fn content_type_for(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn unsupported(file: &UploadedFile, ext: &str, supported: &[&str]) -> AppError {
    AppError::with_message(
        ErrorCode::UnsupportedFileFormat,
        format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            supported.join(", ")
        ),
    )
    .with_detail("field", file.field.as_str())
}

/// 1x1 PNG for tests
#[cfg(test)]
pub(crate) fn tiny_png() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(1, 1, image::Rgb([255, 90, 31]));
    let mut buffer = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buffer, image::ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("uploads"), 1024);
        (dir, store)
    }

    #[test]
    fn test_image_is_stored_by_hash() {
        let (_dir, store) = store();
        let file = UploadedFile::new("image", "dish.PNG", tiny_png());

        let ext = store.validate_image(&file).unwrap();
        assert_eq!(ext, "png");

        let stored = store.store(&file.data, &ext).unwrap();
        assert_eq!(stored.stored_as, format!("{}.png", calculate_hash(&file.data)));
        assert_eq!(stored.content_type, "image/png");

        let again = store.store(&file.data, &ext).unwrap();
        assert_eq!(again, stored);

        let (content, content_type) = store.read(&stored.stored_as).unwrap();
        assert_eq!(content, file.data);
        assert_eq!(content_type, "image/png");
    }

    #[test]
    fn test_size_limits() {
        let (_dir, store) = store();
        let empty = UploadedFile::new("image", "a.png", Vec::new());
        assert_eq!(store.validate_image(&empty).unwrap_err().code, ErrorCode::EmptyFile);

        let big = UploadedFile::new("image", "a.png", vec![0u8; 2048]);
        assert_eq!(store.validate_image(&big).unwrap_err().code, ErrorCode::FileTooLarge);
    }

    #[test]
    fn test_image_validation() {
        let (_dir, store) = store();
        let gif = UploadedFile::new("image", "a.gif", vec![1, 2, 3]);
        assert_eq!(
            store.validate_image(&gif).unwrap_err().code,
            ErrorCode::UnsupportedFileFormat
        );

        let fake = UploadedFile::new("image", "a.jpg", vec![1, 2, 3]);
        assert_eq!(
            store.validate_image(&fake).unwrap_err().code,
            ErrorCode::InvalidImageFile
        );

        let nameless = UploadedFile::new("image", "", vec![1, 2, 3]);
        assert_eq!(store.validate_image(&nameless).unwrap_err().code, ErrorCode::NoFilename);
    }

    #[test]
    fn test_documents_accept_pdf_only_when_allowed() {
        let (_dir, store) = store();
        let pdf = UploadedFile::new("pan", "pan.pdf", b"%PDF-1.4 test".to_vec());
        assert_eq!(store.validate_document(&pdf, true).unwrap(), "pdf");
        assert_eq!(
            store.validate_document(&pdf, false).unwrap_err().code,
            ErrorCode::UnsupportedFileFormat
        );

        let not_pdf = UploadedFile::new("pan", "pan.pdf", b"hello".to_vec());
        assert_eq!(
            store.validate_document(&not_pdf, true).unwrap_err().code,
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn test_read_rejects_traversal() {
        let (_dir, store) = store();
        assert_eq!(store.read("../secret").unwrap_err().code, ErrorCode::InvalidRequest);
        assert_eq!(store.read("a/b.png").unwrap_err().code, ErrorCode::InvalidRequest);
        assert_eq!(store.read("missing.png").unwrap_err().code, ErrorCode::NotFound);
    }
}
