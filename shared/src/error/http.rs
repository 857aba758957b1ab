//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::OrderNotFound | Self::DishNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::OrderInvalidTransition
            | Self::PayoutAlreadyRequested
            | Self::ProfileNotEditing
            | Self::OnboardingAlreadySubmitted
            | Self::OnboardingNotAtFinalStep
            | Self::KycAlreadySubmitted => StatusCode::CONFLICT,

            // 413 Payload Too Large
            Self::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,

            // 415 Unsupported Media Type
            Self::UnsupportedFileFormat => StatusCode::UNSUPPORTED_MEDIA_TYPE,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::SystemBusy => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError
            | Self::FileStorageFailed
            | Self::StorageFull
            | Self::StorageCorrupted => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::OrderNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::DishNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(
            ErrorCode::OrderInvalidTransition.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::PayoutAlreadyRequested.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::ProfileNotEditing.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_upload_status() {
        assert_eq!(
            ErrorCode::FileTooLarge.http_status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ErrorCode::UnsupportedFileFormat.http_status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ErrorCode::InvalidImageFile.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::StorageCorrupted.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::SystemBusy.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_bad_request_status() {
        // Validation and business rule errors default to 400
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::RequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::SupportMessageEmpty.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::PayoutNothingPending.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
