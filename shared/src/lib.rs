//! Shared types for the Dabbzo vendor dashboard
//!
//! Domain models, the unified error system and small utilities used by
//! vendor-server and mirrored by the dashboard frontend.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
