//! Data models
//!
//! Shared between vendor-server and the dashboard frontend (via API).

pub mod dashboard;
pub mod dish;
pub mod earnings;
pub mod kyc;
pub mod onboarding;
pub mod order;
pub mod profile;
pub mod support;
pub mod theme;

// Re-exports
pub use dashboard::*;
pub use dish::*;
pub use earnings::*;
pub use kyc::*;
pub use onboarding::*;
pub use order::*;
pub use profile::*;
pub use support::*;
pub use theme::*;
