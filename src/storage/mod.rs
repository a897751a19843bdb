//! Storage module.
//!
//! Complaint models, the persistence backends and the complaint store that
//! owns the persisted collection.

pub mod backend;
pub mod clock;
pub mod ids;
pub mod models;
pub mod queries;
pub mod store;

pub use backend::*;
pub use clock::*;
pub use models::*;
pub use queries::*;
pub use store::*;
