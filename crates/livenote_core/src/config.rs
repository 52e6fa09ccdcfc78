//! Note log options.
//!
//! # Responsibility
//! - Hold the environment-dependent and variant-dependent knobs of a
//!   `NoteLog` so rendering and tallying stay platform-agnostic.
//!
//! # Invariants
//! - Every field has a default; partial documents deserialize.

use crate::collector::dominance::CountedKinds;
use crate::collector::render::LineEnding;
use serde::{Deserialize, Serialize};

/// Options applied to a `NoteLog` for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteLogOptions {
    /// Terminator emitted after every rendered line.
    pub line_ending: LineEnding,
    /// Kinds that compete for `NoteLog::dominant`.
    pub counted_kinds: CountedKinds,
}

impl NoteLogOptions {
    /// Replaces the line ending used by `NoteLog::render`.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Replaces the kinds that compete in `NoteLog::dominant`.
    pub fn with_counted_kinds(mut self, counted_kinds: CountedKinds) -> Self {
        self.counted_kinds = counted_kinds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::NoteLogOptions;
    use crate::collector::dominance::CountedKinds;
    use crate::collector::render::LineEnding;
    use crate::model::note::NoteKind;

    #[test]
    fn defaults_use_native_ending_and_full_kind_set() {
        let options = NoteLogOptions::default();
        assert_eq!(options.line_ending, LineEnding::native());
        assert!(options.counted_kinds.contains(NoteKind::Success));
        assert!(!options.counted_kinds.contains(NoteKind::Fatal));
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let options: NoteLogOptions =
            serde_json::from_str(r#"{"line_ending":"cr_lf"}"#).unwrap();
        assert_eq!(options.line_ending, LineEnding::CrLf);
        assert_eq!(options.counted_kinds, CountedKinds::full());
    }
}
