//! Ordered note accumulator.
//!
//! # Responsibility
//! - Append notes per kind (trimmed, tagged with the default prefix) or
//!   verbatim in bulk.
//! - Answer `has_*` and `dominant` queries against the current entries.
//! - Render entries as terminated text lines.
//!
//! # Invariants
//! - Entry order is append order across every append path.
//! - The default prefix is applied only by the per-kind helpers.
//! - Queries never cache; they always reflect the current entries.

use crate::collector::render::{render_notes, LineEnding};
use crate::config::NoteLogOptions;
use crate::model::note::{Note, NoteKind};
use log::debug;
use std::fmt::{Display, Formatter};

/// Ordered collection of notes with a default prefix.
///
/// Mutation needs `&mut self` and nothing is synchronized internally; callers
/// that share a log between threads must serialize access themselves, for
/// example with `Mutex<NoteLog>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteLog {
    prefix: String,
    entries: Vec<Note>,
    options: NoteLogOptions,
}

impl NoteLog {
    /// Creates an empty log. An empty `prefix` means unlabeled notes.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_options(prefix, NoteLogOptions::default())
    }

    /// Creates an empty log with explicit rendering and tally options.
    pub fn with_options(prefix: impl Into<String>, options: NoteLogOptions) -> Self {
        Self {
            prefix: prefix.into(),
            entries: Vec::new(),
            options,
        }
    }

    /// Default prefix applied by the `add_*` helpers.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replaces the default prefix. Notes already stored keep theirs.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Options fixed at construction.
    pub fn options(&self) -> &NoteLogOptions {
        &self.options
    }

    /// Adds one trimmed `Info` note per message.
    pub fn add_info<S: AsRef<str>>(&mut self, messages: impl IntoIterator<Item = S>) {
        self.add_kind(NoteKind::Info, messages);
    }

    /// Adds one trimmed `Warning` note per message.
    pub fn add_warning<S: AsRef<str>>(&mut self, messages: impl IntoIterator<Item = S>) {
        self.add_kind(NoteKind::Warning, messages);
    }

    /// Adds one trimmed `Error` note per message.
    pub fn add_error<S: AsRef<str>>(&mut self, messages: impl IntoIterator<Item = S>) {
        self.add_kind(NoteKind::Error, messages);
    }

    /// Adds one trimmed `Success` note per message.
    pub fn add_success<S: AsRef<str>>(&mut self, messages: impl IntoIterator<Item = S>) {
        self.add_kind(NoteKind::Success, messages);
    }

    /// Adds one trimmed `Fatal` note per message. Not counted by default.
    pub fn add_fatal<S: AsRef<str>>(&mut self, messages: impl IntoIterator<Item = S>) {
        self.add_kind(NoteKind::Fatal, messages);
    }

    /// Adds plain application messages (empty tag).
    pub fn add_app_message<S: AsRef<str>>(&mut self, messages: impl IntoIterator<Item = S>) {
        self.add_kind(NoteKind::App, messages);
    }

    /// Adds one trimmed note per message, tagged with `kind` and the default
    /// prefix. Empty messages are stored as-is.
    pub fn add_kind<S: AsRef<str>>(
        &mut self,
        kind: NoteKind,
        messages: impl IntoIterator<Item = S>,
    ) {
        for message in messages {
            self.entries
                .push(Note::trimmed(kind, self.prefix.as_str(), message.as_ref()));
        }
    }

    /// Appends fully-formed notes verbatim, keeping argument order.
    pub fn append(&mut self, notes: impl IntoIterator<Item = Note>) {
        self.entries.extend(notes);
    }

    /// Appends one fully-formed note verbatim.
    pub fn push(&mut self, note: Note) {
        self.entries.push(note);
    }

    /// Drops every entry. The prefix and options are kept.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!(
                "event=note_log_clear module=collector status=ok cleared={}",
                self.entries.len()
            );
        }
        self.entries.clear();
    }

    /// Returns whether any entry carries `kind`.
    pub fn has_kind(&self, kind: NoteKind) -> bool {
        self.entries.iter().any(|note| note.kind == kind)
    }

    /// Returns whether any entry is an `Error` note.
    pub fn has_errors(&self) -> bool {
        self.has_kind(NoteKind::Error)
    }

    /// Returns whether any entry is a `Warning` note.
    pub fn has_warnings(&self) -> bool {
        self.has_kind(NoteKind::Warning)
    }

    /// Returns whether any entry is an `Info` note.
    pub fn has_infos(&self) -> bool {
        self.has_kind(NoteKind::Info)
    }

    /// Returns whether any entry is a `Success` note.
    pub fn has_successes(&self) -> bool {
        self.has_kind(NoteKind::Success)
    }

    /// Number of entries carrying `kind`.
    pub fn count(&self, kind: NoteKind) -> usize {
        self.entries.iter().filter(|note| note.kind == kind).count()
    }

    /// Kind with a strict plurality among the configured counted kinds.
    ///
    /// Returns `NoteKind::App` for an empty log or on any tie.
    pub fn dominant(&self) -> NoteKind {
        self.options.counted_kinds.dominant(&self.entries)
    }

    /// Current entries in append order.
    ///
    /// The borrow keeps the view stable; clone it (`to_vec`) to keep a
    /// snapshot across later appends.
    pub fn notes(&self) -> &[Note] {
        &self.entries
    }

    /// Iterates entries in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.entries.iter()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders every entry on its own line using the configured line ending.
    pub fn render(&self) -> String {
        self.render_with(self.options.line_ending)
    }

    /// Renders every entry with an explicit line ending, ignoring the
    /// configured one.
    pub fn render_with(&self, line_ending: LineEnding) -> String {
        render_notes(&self.entries, line_ending)
    }
}

impl Extend<Note> for NoteLog {
    fn extend<T: IntoIterator<Item = Note>>(&mut self, iter: T) {
        self.append(iter);
    }
}

impl<'a> IntoIterator for &'a NoteLog {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for NoteLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
