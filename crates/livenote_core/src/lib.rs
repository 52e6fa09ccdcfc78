//! Lightweight in-process note accumulator.
//! Callers append categorized notes, query aggregate state, and render the
//! collection as text for whatever sink they own.

pub mod collector;
pub mod config;
pub mod logging;
pub mod model;

pub use collector::dominance::CountedKinds;
pub use collector::note_log::NoteLog;
pub use collector::render::{render_notes, LineEnding};
pub use config::NoteLogOptions;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteKind, NoteKindParseError, MESSAGE_DELIMITER};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
