//! Multi-line rendering of note sequences.

use crate::model::note::Note;
use serde::{Deserialize, Serialize};

/// Line terminator used between (and after) rendered notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    /// Single `\n`.
    Lf,
    /// Two-character `\r\n`.
    CrLf,
}

impl LineEnding {
    /// CRLF on Windows targets, LF elsewhere.
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// Terminator text appended after each line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

/// Renders one line per note, each followed by `line_ending`.
///
/// An empty sequence renders as an empty string.
pub fn render_notes<'a>(
    notes: impl IntoIterator<Item = &'a Note>,
    line_ending: LineEnding,
) -> String {
    let terminator = line_ending.as_str();
    let mut out = String::new();
    for note in notes {
        out.push_str(&note.to_string());
        out.push_str(terminator);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_notes, LineEnding};
    use crate::model::note::{Note, NoteKind};

    #[test]
    fn empty_sequence_renders_empty_string() {
        assert_eq!(render_notes(&Vec::<Note>::new(), LineEnding::CrLf), "");
    }

    #[test]
    fn every_line_is_terminated() {
        let notes = vec![
            Note::new(NoteKind::Info, "a", "one"),
            Note::new(NoteKind::App, "", "two"),
        ];
        assert_eq!(render_notes(&notes, LineEnding::Lf), "INF[a]: one\n: two\n");
        assert_eq!(
            render_notes(&notes, LineEnding::CrLf),
            "INF[a]: one\r\n: two\r\n"
        );
    }

    #[test]
    fn native_matches_target_family() {
        let expected = if cfg!(windows) { "\r\n" } else { "\n" };
        assert_eq!(LineEnding::native().as_str(), expected);
    }
}
