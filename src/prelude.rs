//! Prelude module for format_validators crate.
//!
//! Re-exports the derive_more derives shared by the validated types.

pub use derive_more::{Deref, Display, Into};
