//! In-process note collection.
//!
//! # Responsibility
//! - Accumulate categorized notes in insertion order.
//! - Answer aggregate queries and render the collection as text.
//!
//! # Invariants
//! - Entries only grow or are reset to empty as a whole.

pub mod dominance;
pub mod note_log;
pub mod render;
