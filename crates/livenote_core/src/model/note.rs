//! Note domain model.
//!
//! # Responsibility
//! - Define the closed set of note kinds and their short rendering tags.
//! - Define the immutable `Note` record and its one-line rendering.
//!
//! # Invariants
//! - A kind's identity is the enum variant; the tag is a derived attribute.
//! - `NoteKind::App` renders with an empty tag.
//! - A rendered note is always `<tag><[prefix]>: <message>`, even when both
//!   tag and prefix are empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Separator between the tag/prefix block and the message body.
pub const MESSAGE_DELIMITER: &str = ": ";

/// Rendering tag for `NoteKind::Info`.
pub const TAG_INFO: &str = "INF";
/// Rendering tag for `NoteKind::Warning`.
pub const TAG_WARNING: &str = "WRN";
/// Rendering tag for `NoteKind::Error`.
pub const TAG_ERROR: &str = "ERR";
/// Rendering tag for `NoteKind::Success`.
pub const TAG_SUCCESS: &str = "SUC";
/// Rendering tag for `NoteKind::Fatal`.
pub const TAG_FATAL: &str = "FTL";
/// Rendering tag for `NoteKind::App`.
pub const TAG_APP: &str = "";

/// Category of a single note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Informational message (`INF`).
    Info,
    /// Something suspicious that did not stop work (`WRN`).
    Warning,
    /// A failed step (`ERR`).
    Error,
    /// A completed step (`SUC`).
    Success,
    /// An unrecoverable failure (`FTL`).
    Fatal,
    /// Plain application message. Also the "no dominant kind" sentinel.
    App,
}

impl NoteKind {
    /// Every kind, in declaration order.
    pub const ALL: [NoteKind; 6] = [
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Success,
        Self::Fatal,
        Self::App,
    ];

    /// Short tag used when rendering a note line.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Info => TAG_INFO,
            Self::Warning => TAG_WARNING,
            Self::Error => TAG_ERROR,
            Self::Success => TAG_SUCCESS,
            Self::Fatal => TAG_FATAL,
            Self::App => TAG_APP,
        }
    }

    /// Parses a kind back from its rendering tag.
    ///
    /// Surrounding whitespace is ignored, so a blank tag maps to `App`.
    ///
    /// # Errors
    /// - Returns `NoteKindParseError::UnknownTag` for any other value.
    pub fn from_tag(value: &str) -> Result<Self, NoteKindParseError> {
        match value.trim() {
            TAG_INFO => Ok(Self::Info),
            TAG_WARNING => Ok(Self::Warning),
            TAG_ERROR => Ok(Self::Error),
            TAG_SUCCESS => Ok(Self::Success),
            TAG_FATAL => Ok(Self::Fatal),
            TAG_APP => Ok(Self::App),
            other => Err(NoteKindParseError::UnknownTag(other.to_string())),
        }
    }

    /// Level to use when a caller forwards this note to a `log` sink.
    pub fn log_level(self) -> log::Level {
        match self {
            Self::Warning => log::Level::Warn,
            Self::Error | Self::Fatal => log::Level::Error,
            Self::Info | Self::Success | Self::App => log::Level::Info,
        }
    }
}

impl Display for NoteKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NoteKind {
    type Err = NoteKindParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_tag(value)
    }
}

/// Tag parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteKindParseError {
    /// Value is not a known rendering tag.
    UnknownTag(String),
}

impl Display for NoteKindParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTag(value) => write!(
                f,
                "unknown note tag `{value}`; expected INF|WRN|ERR|SUC|FTL or empty"
            ),
        }
    }
}

impl Error for NoteKindParseError {}

/// One categorized message.
///
/// Built once and never mutated by `NoteLog`. An empty `prefix` means the
/// note is unlabeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Serialized as `type` to keep the payload shape short.
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Bracketed label; empty means none. Defaults to empty when absent.
    #[serde(default)]
    pub prefix: String,
    /// Message body, rendered after `MESSAGE_DELIMITER`.
    pub message: String,
}

impl Note {
    /// Creates a fully-formed note. No trimming is applied.
    pub fn new(kind: NoteKind, prefix: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            prefix: prefix.into(),
            message: message.into(),
        }
    }

    /// Creates a note the way the per-kind `NoteLog::add_*` helpers do:
    /// the message is trimmed, the prefix is kept as given.
    pub fn trimmed(kind: NoteKind, prefix: impl Into<String>, message: &str) -> Self {
        Self::new(kind, prefix, message.trim())
    }

    /// Renders this note as a single line without a terminator.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.tag())?;
        if !self.prefix.is_empty() {
            write!(f, "[{}]", self.prefix)?;
        }
        f.write_str(MESSAGE_DELIMITER)?;
        f.write_str(&self.message)
    }
}
