//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 4xxx: Order errors
/// - 5xxx: Earnings errors
/// - 6xxx: Menu errors (including uploads)
/// - 7xxx: Vendor errors
/// - 8xxx: Support errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx, plus the unused 1xxx-3xxx ranges)
    General,
    /// Order errors (4xxx)
    Order,
    /// Earnings errors (5xxx)
    Earnings,
    /// Menu errors (6xxx)
    Menu,
    /// Vendor errors (7xxx)
    Vendor,
    /// Support errors (8xxx)
    Support,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..4000 => Self::General,
            4000..5000 => Self::Order,
            5000..6000 => Self::Earnings,
            6000..7000 => Self::Menu,
            7000..8000 => Self::Vendor,
            8000..9000 => Self::Support,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Order => "order",
            Self::Earnings => "earnings",
            Self::Menu => "menu",
            Self::Vendor => "vendor",
            Self::Support => "support",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
