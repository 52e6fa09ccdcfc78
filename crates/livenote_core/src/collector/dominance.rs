//! Dominant-kind tally.
//!
//! # Invariants
//! - `NoteKind::App` is never counted and never part of a `CountedKinds`.
//! - A kind dominates only with a strict plurality; ties and empty tallies
//!   resolve to `NoteKind::App`.

use crate::model::note::{Note, NoteKind};
use serde::{Deserialize, Deserializer, Serialize};

/// Subset of kinds that compete in `NoteLog::dominant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountedKinds {
    kinds: Vec<NoteKind>,
}

impl CountedKinds {
    /// Builds a subset from any kinds. `App` and duplicates are dropped,
    /// first occurrence order is kept.
    pub fn new(kinds: impl IntoIterator<Item = NoteKind>) -> Self {
        let mut unique = Vec::new();
        for kind in kinds {
            if kind != NoteKind::App && !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self { kinds: unique }
    }

    /// Info, Warning and Error.
    pub fn base() -> Self {
        Self::new([NoteKind::Info, NoteKind::Warning, NoteKind::Error])
    }

    /// Info, Warning, Error and Success.
    pub fn full() -> Self {
        Self::new([
            NoteKind::Info,
            NoteKind::Warning,
            NoteKind::Error,
            NoteKind::Success,
        ])
    }

    /// Returns whether `kind` competes for dominance.
    pub fn contains(&self, kind: NoteKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Counted kinds in first-seen order.
    pub fn kinds(&self) -> &[NoteKind] {
        &self.kinds
    }

    /// Returns the kind whose count is strictly greater than every other
    /// counted kind's count, or `NoteKind::App` when none is.
    pub fn dominant<'a>(&self, notes: impl IntoIterator<Item = &'a Note>) -> NoteKind {
        let mut counts = vec![0usize; self.kinds.len()];
        for note in notes {
            if let Some(slot) = self.kinds.iter().position(|kind| *kind == note.kind) {
                counts[slot] += 1;
            }
        }

        for (slot, count) in counts.iter().enumerate() {
            let strict = *count > 0
                && counts
                    .iter()
                    .enumerate()
                    .all(|(other, other_count)| other == slot || count > other_count);
            if strict {
                return self.kinds[slot];
            }
        }
        NoteKind::App
    }
}

impl Default for CountedKinds {
    fn default() -> Self {
        Self::full()
    }
}

impl<'de> Deserialize<'de> for CountedKinds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let kinds = Vec::<NoteKind>::deserialize(deserializer)?;
        Ok(Self::new(kinds))
    }
}

#[cfg(test)]
mod tests {
    use super::CountedKinds;
    use crate::model::note::{Note, NoteKind};

    fn notes(kinds: &[NoteKind]) -> Vec<Note> {
        kinds
            .iter()
            .map(|kind| Note::new(*kind, "", "x"))
            .collect()
    }

    #[test]
    fn new_drops_app_and_duplicates() {
        let counted = CountedKinds::new([
            NoteKind::Error,
            NoteKind::App,
            NoteKind::Error,
            NoteKind::Fatal,
        ]);
        assert_eq!(counted.kinds(), &[NoteKind::Error, NoteKind::Fatal]);
        assert!(!counted.contains(NoteKind::App));
    }

    #[test]
    fn empty_tally_is_app() {
        assert_eq!(CountedKinds::full().dominant(&notes(&[])), NoteKind::App);
    }

    #[test]
    fn single_counted_kind_with_no_notes_is_app() {
        let counted = CountedKinds::new([NoteKind::Error]);
        assert_eq!(counted.dominant(&notes(&[NoteKind::Info])), NoteKind::App);
    }

    #[test]
    fn three_way_tie_is_app() {
        let sample = notes(&[NoteKind::Info, NoteKind::Warning, NoteKind::Error]);
        assert_eq!(CountedKinds::base().dominant(&sample), NoteKind::App);
    }

    #[test]
    fn success_only_competes_when_counted() {
        let sample = notes(&[NoteKind::Success, NoteKind::Success, NoteKind::Info]);
        assert_eq!(CountedKinds::full().dominant(&sample), NoteKind::Success);
        assert_eq!(CountedKinds::base().dominant(&sample), NoteKind::Info);
    }

    #[test]
    fn uncounted_kinds_do_not_break_ties() {
        let sample = notes(&[
            NoteKind::Info,
            NoteKind::Warning,
            NoteKind::Fatal,
            NoteKind::App,
            NoteKind::App,
        ]);
        assert_eq!(CountedKinds::full().dominant(&sample), NoteKind::App);
    }

    #[test]
    fn deserialize_normalizes_subset() {
        let counted: CountedKinds =
            serde_json::from_str(r#"["warning","app","warning","info"]"#).unwrap();
        assert_eq!(counted.kinds(), &[NoteKind::Warning, NoteKind::Info]);
    }
}
