//! Unified error system for the vendor dashboard
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorResponse`]: JSON body of every error response
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Earnings / payout errors
//! - 6xxx: Menu errors (65xx: uploads)
//! - 7xxx: Vendor errors (profile, onboarding, KYC)
//! - 8xxx: Support errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::validation("Please fill all required fields")
//!     .with_detail("field", "price");
//!
//! let body = ErrorResponse::from(&err);
//! assert_eq!(body.code, ErrorCode::ValidationFailed);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
