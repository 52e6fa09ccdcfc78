//! Note domain model.
//!
//! # Responsibility
//! - Define the note record shared by collection, rendering and callers.
//!
//! # Invariants
//! - Note kinds form a closed set; callers never see free-form tags.

pub mod note;
