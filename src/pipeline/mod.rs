//! Consumer flows over the complaint store.
//!
//! - Report submission (validate, then add)
//! - Councillor actions (start repair, mark complete)
//! - Session context for identity and log correlation

pub mod context;
pub mod councillor;
pub mod submission;

pub use context::*;
pub use councillor::*;
pub use submission::*;
