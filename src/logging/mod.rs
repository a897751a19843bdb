//! Event logging for the complaint lifecycle.
//!
//! Log lines carry the session and complaint they concern; see
//! [`structured`] for the line format.

pub mod structured;

pub use structured::*;
