//! Vendor order workflow
//!
//! # Architecture
//!
//! ```text
//! accept / reject / complete
//!     └─ OrdersManager::execute
//!          ├─ TransitionAction::execute   (validate status, build event)
//!          ├─ reducer::apply              (event -> new order snapshot)
//!          └─ OrderStorage                (snapshot + event, one write txn)
//! ```
//!
//! Transitions: `pending -> accepted -> completed`, `pending -> rejected`.

pub mod actions;
pub mod manager;
pub mod reducer;
pub mod storage;

pub use actions::TransitionAction;
pub use manager::{ManagerError, ManagerResult, OrdersManager};
pub use storage::OrderStorage;
