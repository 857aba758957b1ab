//! KYC Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Document slot in the KYC form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Aadhaar,
    Pan,
    Fssai,
    KitchenPhoto,
}

impl DocumentKind {
    pub const REQUIRED: [DocumentKind; 4] = [
        DocumentKind::Aadhaar,
        DocumentKind::Pan,
        DocumentKind::Fssai,
        DocumentKind::KitchenPhoto,
    ];

    /// Multipart field name
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::Fssai => "fssai",
            Self::KitchenPhoto => "kitchen_photos",
        }
    }

    /// Identity documents may be PDFs; kitchen photos must be images.
    pub fn accepts_pdf(&self) -> bool {
        !matches!(self, Self::KitchenPhoto)
    }

    /// Only kitchen photos may repeat
    pub fn allows_multiple(&self) -> bool {
        matches!(self, Self::KitchenPhoto)
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aadhaar" | "aadhar" => Ok(Self::Aadhaar),
            "pan" => Ok(Self::Pan),
            "fssai" => Ok(Self::Fssai),
            "kitchen_photos" | "kitchen_photo" => Ok(Self::KitchenPhoto),
            other => Err(other.to_string()),
        }
    }
}

/// A stored upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycDocument {
    pub kind: DocumentKind,
    /// Name as uploaded
    pub file_name: String,
    /// Content-addressed name under the uploads directory
    pub stored_as: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    #[default]
    NotSubmitted,
    UnderReview,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycState {
    pub status: KycStatus,
    pub documents: Vec<KycDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<i64>,
}
