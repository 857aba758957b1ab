//! KYC Service - identity and kitchen document submission
//!
//! A submission is all-or-nothing: every file is checked before any is
//! written to disk.

use super::uploads::{FileStore, UploadedFile};
use crate::utils::{AppError, AppResult, ErrorCode};
use parking_lot::RwLock;
use shared::models::{DocumentKind, KycDocument, KycState, KycStatus};
use std::sync::Arc;

#[derive(Clone)]
pub struct KycService {
    state: Arc<RwLock<KycState>>,
    files: FileStore,
}

impl std::fmt::Debug for KycService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KycService")
            .field("status", &self.state.read().status)
            .finish()
    }
}

impl KycService {
    pub fn new(files: FileStore) -> Self {
        Self {
            state: Arc::new(RwLock::new(KycState::default())),
            files,
        }
    }

    pub fn status(&self) -> KycState {
        self.state.read().clone()
    }

    /// Submit the document set for review
    ///
    /// Files whose field is not a document slot are ignored.
    pub fn submit(&self, uploads: Vec<UploadedFile>) -> AppResult<KycState> {
        let mut state = self.state.write();
        if state.status != KycStatus::NotSubmitted {
            return Err(AppError::new(ErrorCode::KycAlreadySubmitted));
        }

        let mut accepted: Vec<(DocumentKind, UploadedFile, String)> = Vec::new();
        for file in uploads {
            let Ok(kind) = file.field.parse::<DocumentKind>() else {
                tracing::debug!(field = %file.field, "Ignoring unknown KYC field");
                continue;
            };
            if !kind.allows_multiple() && accepted.iter().any(|(k, _, _)| *k == kind) {
                return Err(AppError::validation(format!(
                    "Only one file allowed for {}",
                    kind.field_name()
                ))
                .with_detail("field", kind.field_name()));
            }
            let ext = self.files.validate_document(&file, kind.accepts_pdf())?;
            accepted.push((kind, file, ext));
        }

        let missing: Vec<&str> = DocumentKind::REQUIRED
            .iter()
            .filter(|kind| !accepted.iter().any(|(k, _, _)| k == *kind))
            .map(|kind| kind.field_name())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::new(ErrorCode::KycDocumentsMissing).with_detail("missing", missing));
        }

        let mut documents = Vec::with_capacity(accepted.len());
        for (kind, file, ext) in accepted {
            let stored = self.files.store(&file.data, &ext)?;
            documents.push(KycDocument {
                kind,
                file_name: file.file_name,
                stored_as: stored.stored_as,
                content_type: stored.content_type,
                size: stored.size,
            });
        }

        state.status = KycStatus::UnderReview;
        state.documents = documents;
        state.submitted_at = Some(shared::util::now_millis());

        tracing::info!(documents = state.documents.len(), "KYC documents submitted");
        Ok(state.clone())
    }
}
