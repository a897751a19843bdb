//! Validation module.
//!
//! Checks applied before anything reaches the store:
//! - Report form field presence and enumerations
//! - Photo data URI format and size
//! - Status transition policy

pub mod form;
pub mod image;
pub mod transition;

pub use form::*;
pub use image::*;
pub use transition::*;
