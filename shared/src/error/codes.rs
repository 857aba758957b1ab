//! Unified error codes for the Dabbzo vendor dashboard
//!
//! This module defines all error codes used by vendor-server and the dashboard frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Earnings / payout errors
//! - 6xxx: Menu errors (65xx: file upload)
//! - 7xxx: Vendor errors (profile, onboarding, KYC)
//! - 8xxx: Support errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Transition not allowed from the current status
    OrderInvalidTransition = 4008,

    // ==================== 5xxx: Earnings ====================
    /// Nothing pending to pay out
    PayoutNothingPending = 5101,
    /// A payout request is already open
    PayoutAlreadyRequested = 5102,

    // ==================== 6xxx: Menu ====================
    /// Dish not found
    DishNotFound = 6001,
    /// Dish has invalid price
    DishInvalidPrice = 6002,
    DishInvalidCategory = 6101,

    // ==================== 65xx: File Upload ====================
    /// File too large
    FileTooLarge = 6501,
    /// Unsupported file format
    UnsupportedFileFormat = 6502,
    /// Invalid/corrupted image file
    InvalidImageFile = 6503,
    /// No file provided in request
    NoFileProvided = 6504,
    /// Empty file provided
    EmptyFile = 6505,
    /// No filename provided
    NoFilename = 6506,
    /// File storage failed
    FileStorageFailed = 6509,

    // ==================== 7xxx: Vendor ====================
    /// Profile is not in edit mode
    ProfileNotEditing = 7001,
    ProfileUnknownField = 7002,
    /// Invalid business hours
    InvalidBusinessHours = 7003,
    /// Onboarding step incomplete
    OnboardingStepIncomplete = 7101,
    /// Onboarding already submitted
    OnboardingAlreadySubmitted = 7102,
    /// Onboarding submitted before the final step
    OnboardingNotAtFinalStep = 7103,
    /// KYC documents missing
    KycDocumentsMissing = 7201,
    /// KYC already submitted
    KycAlreadySubmitted = 7202,

    // ==================== 8xxx: Support ====================
    /// Support message is empty
    SupportMessageEmpty = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Storage is full
    StorageFull = 9401,
    /// Storage is corrupted
    StorageCorrupted = 9403,
    /// System busy (transient, retry)
    SystemBusy = 9404,
}

/// Invalid error code value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Please fill all required fields",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderInvalidTransition => "Order cannot move to that status",

            // Earnings
            ErrorCode::PayoutNothingPending => "There is no pending amount to pay out",
            ErrorCode::PayoutAlreadyRequested => "A payout request is already in progress",

            // Menu
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DishInvalidPrice => "Dish price must not be negative",
            ErrorCode::DishInvalidCategory => "Unknown dish category",

            // File Upload
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::InvalidImageFile => "Invalid image file",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::EmptyFile => "Empty file provided",
            ErrorCode::NoFilename => "No filename provided",
            ErrorCode::FileStorageFailed => "File storage failed",

            // Vendor
            ErrorCode::ProfileNotEditing => "Profile is not being edited",
            ErrorCode::ProfileUnknownField => "Unknown profile field",
            ErrorCode::InvalidBusinessHours => "Invalid business hours",
            ErrorCode::OnboardingStepIncomplete => "Please fill all required fields",
            ErrorCode::OnboardingAlreadySubmitted => "Onboarding has already been submitted",
            ErrorCode::OnboardingNotAtFinalStep => "Onboarding is not at the final step",
            ErrorCode::KycDocumentsMissing => "All KYC documents are required",
            ErrorCode::KycAlreadySubmitted => "KYC documents have already been submitted",

            // Support
            ErrorCode::SupportMessageEmpty => "Message must not be empty",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageFull => "Storage is full",
            ErrorCode::StorageCorrupted => "Storage is corrupted",
            ErrorCode::SystemBusy => "System is busy, please retry",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4008 => Ok(ErrorCode::OrderInvalidTransition),

            // Earnings
            5101 => Ok(ErrorCode::PayoutNothingPending),
            5102 => Ok(ErrorCode::PayoutAlreadyRequested),

            // Menu
            6001 => Ok(ErrorCode::DishNotFound),
            6002 => Ok(ErrorCode::DishInvalidPrice),
            6101 => Ok(ErrorCode::DishInvalidCategory),

            // File Upload
            6501 => Ok(ErrorCode::FileTooLarge),
            6502 => Ok(ErrorCode::UnsupportedFileFormat),
            6503 => Ok(ErrorCode::InvalidImageFile),
            6504 => Ok(ErrorCode::NoFileProvided),
            6505 => Ok(ErrorCode::EmptyFile),
            6506 => Ok(ErrorCode::NoFilename),
            6509 => Ok(ErrorCode::FileStorageFailed),

            // Vendor
            7001 => Ok(ErrorCode::ProfileNotEditing),
            7002 => Ok(ErrorCode::ProfileUnknownField),
            7003 => Ok(ErrorCode::InvalidBusinessHours),
            7101 => Ok(ErrorCode::OnboardingStepIncomplete),
            7102 => Ok(ErrorCode::OnboardingAlreadySubmitted),
            7103 => Ok(ErrorCode::OnboardingNotAtFinalStep),
            7201 => Ok(ErrorCode::KycDocumentsMissing),
            7202 => Ok(ErrorCode::KycAlreadySubmitted),

            // Support
            8001 => Ok(ErrorCode::SupportMessageEmpty),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9401 => Ok(ErrorCode::StorageFull),
            9403 => Ok(ErrorCode::StorageCorrupted),
            9404 => Ok(ErrorCode::SystemBusy),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::RequiredField.code(), 7);

        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::OrderInvalidTransition.code(), 4008);

        assert_eq!(ErrorCode::PayoutNothingPending.code(), 5101);

        assert_eq!(ErrorCode::DishNotFound.code(), 6001);
        assert_eq!(ErrorCode::FileTooLarge.code(), 6501);

        assert_eq!(ErrorCode::ProfileNotEditing.code(), 7001);
        assert_eq!(ErrorCode::KycDocumentsMissing.code(), 7201);

        assert_eq!(ErrorCode::SupportMessageEmpty.code(), 8001);

        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::SystemBusy.code(), 9404);
    }

    const ALL_CODES: [ErrorCode; 33] = [
        ErrorCode::Success,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::InvalidRequest,
        ErrorCode::InvalidFormat,
        ErrorCode::RequiredField,
        ErrorCode::OrderNotFound,
        ErrorCode::OrderInvalidTransition,
        ErrorCode::PayoutNothingPending,
        ErrorCode::PayoutAlreadyRequested,
        ErrorCode::DishNotFound,
        ErrorCode::DishInvalidPrice,
        ErrorCode::DishInvalidCategory,
        ErrorCode::FileTooLarge,
        ErrorCode::UnsupportedFileFormat,
        ErrorCode::InvalidImageFile,
        ErrorCode::NoFileProvided,
        ErrorCode::EmptyFile,
        ErrorCode::NoFilename,
        ErrorCode::FileStorageFailed,
        ErrorCode::ProfileNotEditing,
        ErrorCode::ProfileUnknownField,
        ErrorCode::InvalidBusinessHours,
        ErrorCode::OnboardingStepIncomplete,
        ErrorCode::OnboardingAlreadySubmitted,
        ErrorCode::OnboardingNotAtFinalStep,
        ErrorCode::KycDocumentsMissing,
        ErrorCode::KycAlreadySubmitted,
        ErrorCode::SupportMessageEmpty,
        ErrorCode::InternalError,
        ErrorCode::StorageFull,
        ErrorCode::StorageCorrupted,
        ErrorCode::SystemBusy,
    ];

    #[test]
    fn test_every_code_round_trips_through_u16() {
        for code in ALL_CODES {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_every_code_has_a_message() {
        for code in ALL_CODES {
            assert!(!code.message().is_empty(), "{code} has no message");
        }
        assert_eq!(ErrorCode::DishInvalidCategory.message(), "Unknown dish category");
        assert_eq!(ErrorCode::ProfileUnknownField.message(), "Unknown profile field");
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::NotFound).unwrap();
        assert_eq!(json, "3");

        let json = serde_json::to_string(&ErrorCode::OrderInvalidTransition).unwrap();
        assert_eq!(json, "4008");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::OrderNotFound.message(), "Order not found");
        assert_eq!(
            ErrorCode::RequiredField.message(),
            "Please fill all required fields"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
